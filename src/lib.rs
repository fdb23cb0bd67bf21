//! Client for the MadCreate ad-generation backend.
//!
//! A submission moves through three stages: the form layer collects and
//! validates the marketing answers and contact details, the submission
//! client posts them as one multipart request, and the polling orchestrator
//! watches the resulting job until the backend produces an image, reports
//! an error, or the schedule runs out.
//!
//! The async core lives in [`clients`]; [`MadCreateClient`] wraps it in a
//! blocking facade with its own runtime for synchronous callers.

pub mod clients;
pub mod errors;
pub mod form;
pub mod models;
pub mod utils;

pub use clients::poller::PollSchedule;
pub use errors::ClientError;
pub use models::{
    Credentials, GenerationOutcome, JobHandle, JobStatus, MadCreateClient, PhotoAttachment,
    SubmitPayload,
};
pub use utils::init_tracing;

/// Default endpoint root of a local backend deployment. Overridable
/// everywhere a [`Credentials`] is accepted.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";
