use reqwest::Client;

use crate::clients::ad_generation::{HttpStatusSource, submit_form};
use crate::clients::poller::{PollSchedule, poll_until_terminal};
use crate::errors::ClientError;
use crate::models::{Credentials, GenerationOutcome, SubmitPayload};

pub const SENDING: &str = "Sending your form...";
pub const GENERATING: &str = "Generating your ad...";

/// Loading-indicator snapshot pushed to the caller while a submission runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub message: &'static str,
    pub percent: u8,
}

/// Indicator percentage while polling: 30 once the job is accepted, plus
/// three points per attempt.
pub fn polling_percent(attempt: u32) -> u8 {
    (30 + attempt.saturating_mul(3)).min(100) as u8
}

/// Drive one full submission: send the payload, then poll the job to a
/// terminal outcome, pushing loading updates along the way.
///
/// The updates are best-effort UI feedback; the outcome (or error) is the
/// only thing the caller should act on.
pub async fn run_submission(
    client: &Client,
    creds: &Credentials,
    payload: &SubmitPayload,
    schedule: PollSchedule,
    mut on_progress: impl FnMut(ProgressUpdate),
) -> Result<GenerationOutcome, ClientError> {
    on_progress(ProgressUpdate {
        message: SENDING,
        percent: 10,
    });
    let job = submit_form(client, creds, payload).await?;

    on_progress(ProgressUpdate {
        message: GENERATING,
        percent: 30,
    });
    let mut source = HttpStatusSource::new(client, creds, job);
    poll_until_terminal(&mut source, schedule, |attempt| {
        on_progress(ProgressUpdate {
            message: GENERATING,
            percent: polling_percent(attempt),
        });
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polling_percent_starts_above_the_accepted_mark() {
        assert_eq!(polling_percent(1), 33);
        assert_eq!(polling_percent(10), 60);
        assert_eq!(polling_percent(20), 90);
    }

    #[test]
    fn polling_percent_never_exceeds_full() {
        assert_eq!(polling_percent(1_000), 100);
    }
}
