use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info};

use crate::errors::ClientError;
use crate::models::{GenerationOutcome, JobStatus};

/// Timing knobs for one polling loop.
///
/// The defaults give the backend ten seconds of head start before the first
/// status check, then check every three seconds, twenty checks total. Worst
/// case wall clock before timing out: 10s + 19 * 3s = 67s.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollSchedule {
    pub initial_delay: Duration,
    pub poll_interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollSchedule {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(10_000),
            poll_interval: Duration::from_millis(3_000),
            max_attempts: 20,
        }
    }
}

/// Where the poller gets each status reading from. The HTTP client
/// implements this for one job; tests substitute scripted sources.
#[allow(async_fn_in_trait)]
pub trait StatusSource {
    async fn fetch_status(&mut self) -> Result<JobStatus, ClientError>;
}

/// Drive `source` until a terminal status, a transport failure, or
/// exhaustion of the schedule.
///
/// Attempts are strictly sequential: attempt k+1 never starts before
/// attempt k's request completes and, if non-terminal, before the interval
/// elapses. `on_progress` fires once per attempt, before the status check,
/// with the 1-based attempt number; it is side-effect-only.
///
/// A backend `error` status is a normal outcome here, not an `Err`.
/// Transport failures are not retried; the first one ends the loop.
pub async fn poll_until_terminal<S, F>(
    source: &mut S,
    schedule: PollSchedule,
    mut on_progress: F,
) -> Result<GenerationOutcome, ClientError>
where
    S: StatusSource,
    F: FnMut(u32),
{
    sleep(schedule.initial_delay).await;

    for attempt in 1..=schedule.max_attempts {
        on_progress(attempt);

        match source.fetch_status().await? {
            JobStatus::Completed { image_url } => {
                info!(attempt, "job completed");
                return Ok(GenerationOutcome::Completed { image_url });
            }
            JobStatus::Error { message } => {
                info!(attempt, "job reported an error");
                return Ok(GenerationOutcome::Failed { message });
            }
            JobStatus::Pending => {
                debug!(attempt, "job still pending");
                // No point sleeping once the schedule is spent.
                if attempt < schedule.max_attempts {
                    sleep(schedule.poll_interval).await;
                }
            }
        }
    }

    Err(ClientError::PollTimeout {
        attempts: schedule.max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_matches_backend_latency_profile() {
        let schedule = PollSchedule::default();
        assert_eq!(schedule.initial_delay, Duration::from_millis(10_000));
        assert_eq!(schedule.poll_interval, Duration::from_millis(3_000));
        assert_eq!(schedule.max_attempts, 20);
    }
}
