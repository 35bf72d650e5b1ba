// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            artists::ArtistCommandService, managers::ManagerCommandService,
            promotions::PromotionCommandService,
        },
        ports::{ClockPort, SlugGeneratorPort},
        queries::{
            artists::ArtistQueryService, managers::ManagerQueryService,
            promotions::PromotionQueryService,
        },
    },
    domain::{
        artist::{ArtistReadRepository, ArtistWriteRepository, services::ArtistSlugService},
        manager::ManagerRepository,
        promotion::{PromotionReadRepository, PromotionWriteRepository},
    },
};

/// Repositories the services are built on.
pub struct Repositories {
    pub artist_write: Arc<dyn ArtistWriteRepository>,
    pub artist_read: Arc<dyn ArtistReadRepository>,
    pub promotion_write: Arc<dyn PromotionWriteRepository>,
    pub promotion_read: Arc<dyn PromotionReadRepository>,
    pub managers: Arc<dyn ManagerRepository>,
}

pub struct ApplicationServices {
    pub artist_commands: Arc<ArtistCommandService>,
    pub artist_queries: Arc<ArtistQueryService>,
    pub promotion_commands: Arc<PromotionCommandService>,
    pub promotion_queries: Arc<PromotionQueryService>,
    pub manager_commands: Arc<ManagerCommandService>,
    pub manager_queries: Arc<ManagerQueryService>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
        slug_max_suffix: u32,
    ) -> Self {
        let Repositories {
            artist_write,
            artist_read,
            promotion_write,
            promotion_read,
            managers,
        } = repos;

        let slug_service = Arc::new(
            ArtistSlugService::new(Arc::clone(&artist_read), Arc::clone(&slugger))
                .with_max_numeric_suffix(slug_max_suffix),
        );

        let artist_commands = Arc::new(ArtistCommandService::new(
            Arc::clone(&artist_write),
            Arc::clone(&artist_read),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));
        let artist_queries = Arc::new(ArtistQueryService::new(Arc::clone(&artist_read)));

        let promotion_commands = Arc::new(PromotionCommandService::new(
            Arc::clone(&promotion_write),
            Arc::clone(&promotion_read),
            Arc::clone(&artist_read),
            Arc::clone(&managers),
            Arc::clone(&clock),
        ));
        let promotion_queries = Arc::new(PromotionQueryService::new(Arc::clone(&promotion_read)));

        let manager_commands = Arc::new(ManagerCommandService::new(
            Arc::clone(&managers),
            Arc::clone(&clock),
        ));
        let manager_queries = Arc::new(ManagerQueryService::new(Arc::clone(&managers)));

        Self {
            artist_commands,
            artist_queries,
            promotion_commands,
            promotion_queries,
            manager_commands,
            manager_queries,
        }
    }
}
