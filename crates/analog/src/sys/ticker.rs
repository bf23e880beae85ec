use crate::events::AppEvent;
use async_channel::Sender;
use chrono::{Local, Timelike};
use clockface::WallClockSample;
use std::time::Duration;
use tokio::time::{self, Instant, MissedTickBehavior};

const TICK: Duration = Duration::from_secs(1);

/// Time left until the next whole second, given the sub-second part of now.
fn until_next_second(nanos: u32) -> Duration {
    // chrono reports a leap second as nanos >= 1e9
    let nanos = nanos % 1_000_000_000;
    Duration::from_nanos(u64::from(1_000_000_000 - nanos))
}

/// Sends one local wall-clock sample per second, lined up with the
/// second boundary so the hand moves when the system clock does.
pub async fn run_ticker(tx: Sender<AppEvent>) {
    if tx.send(AppEvent::Tick(WallClockSample::now())).await.is_err() {
        return;
    }

    let start = Instant::now() + until_next_second(Local::now().nanosecond());
    let mut interval = time::interval_at(start, TICK);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        interval.tick().await;
        let sample = WallClockSample::now();
        log::trace!("tick {:?}", sample);
        if tx.send(AppEvent::Tick(sample)).await.is_err() {
            log::debug!("Ticker stopped: UI is gone");
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_until_next_second() {
        assert_eq!(until_next_second(0), Duration::from_secs(1));
        assert_eq!(until_next_second(250_000_000), Duration::from_millis(750));
        assert_eq!(until_next_second(999_999_999), Duration::from_nanos(1));
        assert_eq!(until_next_second(1_400_000_000), Duration::from_millis(600));
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_sample_is_immediate() {
        let (tx, rx) = async_channel::bounded(4);
        let handle = tokio::spawn(run_ticker(tx));

        let first = rx.recv().await.unwrap();
        assert!(matches!(first, AppEvent::Tick(_)));

        let second = rx.recv().await.unwrap();
        assert!(matches!(second, AppEvent::Tick(_)));

        drop(rx);
        handle.await.unwrap();
    }
}
