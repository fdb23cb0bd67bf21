pub mod credentials;
pub mod generator_client;
pub mod job;
pub mod payload;
pub mod status_response;

pub use credentials::Credentials;
pub use generator_client::MadCreateClient;
pub use job::{JobHandle, JobResponse};
pub use payload::{PartValue, PhotoAttachment, SubmitPayload};
pub use status_response::{GenerationOutcome, JobStatus, StatusResponse};
