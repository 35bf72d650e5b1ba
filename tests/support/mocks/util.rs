// tests/support/mocks/util.rs
use chrono::{DateTime, Duration, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

#[derive(Clone, Default)]
pub struct FixedClock;

impl promo_desk::application::ports::time::Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}

/// Advances one second per call, so records get distinct timestamps.
#[derive(Default)]
pub struct TickingClock {
    ticks: AtomicI64,
}

impl promo_desk::application::ports::time::Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        super::time::fixed_now() + Duration::seconds(tick)
    }
}

/// Returns the input unchanged; lets tests pick exact bases.
#[derive(Clone, Default)]
pub struct IdentitySlug;

impl promo_desk::application::ports::util::SlugGenerator for IdentitySlug {
    fn slugify(&self, s: &str) -> String {
        s.to_string()
    }
}
