use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDate};
use tokio::time::Instant;

#[cfg(test)]
use mockall::automock;

/// Represents an entity responsible for providing dates across application. Day boundaries are
/// decided through it, so tests can move a store into tomorrow without waiting for midnight.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Clock: Sync + Send + 'static {
    fn time(&self) -> DateTime<Local>;

    fn instant(&self) -> Instant;

    async fn sleep_until(&self, instant: Instant);
}

/// Calendar day in the local time zone.
pub fn today(clock: &dyn Clock) -> NaiveDate {
    clock.time().date_naive()
}

pub struct DefaultClock;

#[async_trait]
impl Clock for DefaultClock {
    fn time(&self) -> DateTime<Local> {
        Local::now()
    }

    fn instant(&self) -> Instant {
        Instant::now()
    }

    async fn sleep_until(&self, instant: Instant) {
        tokio::time::sleep_until(instant).await;
    }
}
