use std::path::Path;

use tokio::runtime::Runtime;

use crate::clients::poller::PollSchedule;
use crate::errors::ClientError;
use crate::form::session::{ProgressUpdate, run_submission};
use crate::models::{Credentials, GenerationOutcome, PhotoAttachment, SubmitPayload};
use crate::utils::init_tracing;

/// Blocking facade over the async client.
///
/// Owns its own runtime so synchronous callers (the CLI, embedding hosts)
/// can drive a full submit-and-poll flow without one. Holds one or more
/// backend endpoints; the batch layer rotates across them round-robin.
pub struct MadCreateClient {
    runtime: Runtime,
    pub(crate) credentials: Vec<Credentials>,
}

impl MadCreateClient {
    /// Create a client over the given endpoints.
    ///
    /// At least one endpoint is required. `enable_logs` installs the global
    /// tracing subscriber (idempotent across clients).
    pub fn new(credentials: Vec<Credentials>, enable_logs: bool) -> Result<Self, ClientError> {
        if enable_logs {
            init_tracing();
        }
        if credentials.is_empty() {
            return Err(ClientError::NoEndpoint);
        }

        Ok(Self {
            runtime: Runtime::new().map_err(ClientError::Runtime)?,
            credentials,
        })
    }

    /// Read a photo attachment from disk.
    pub fn load_photo(&self, path: impl AsRef<Path>) -> Result<PhotoAttachment, ClientError> {
        self.runtime.block_on(PhotoAttachment::from_path(path))
    }

    /// Run one full submission to its terminal outcome, pushing loading
    /// updates to `on_progress` along the way.
    pub fn run_form_submission(
        &self,
        payload: &SubmitPayload,
        schedule: PollSchedule,
        on_progress: impl FnMut(ProgressUpdate),
    ) -> Result<GenerationOutcome, ClientError> {
        let creds = self.credentials.first().ok_or(ClientError::NoEndpoint)?;
        let client = reqwest::Client::new();
        self.runtime
            .block_on(run_submission(&client, creds, payload, schedule, on_progress))
    }

    /// Run many independent submissions concurrently and block until all of
    /// them finish. `max_rps` caps in-flight flows per endpoint.
    pub fn process_batch(
        &self,
        payloads: Vec<SubmitPayload>,
        schedule: PollSchedule,
        max_rps: Option<usize>,
    ) -> Vec<Result<GenerationOutcome, String>> {
        let semaphore_size = max_rps.unwrap_or(15) * self.credentials.len();
        self.runtime
            .block_on(self.process_submissions_async(payloads, schedule, semaphore_size))
    }
}
