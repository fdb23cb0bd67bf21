use thiserror::Error;

/// Everything the client can fail with. A backend `error` status is not in
/// here: it is a normal terminal outcome, see
/// [`GenerationOutcome`](crate::models::GenerationOutcome).
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure, or a response body that does not match the expected
    /// shape. Never retried.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The status endpoint reported a status string this client does not
    /// know. Treated as an error rather than implicit `pending` so a
    /// misbehaving backend cannot spin the polling loop to exhaustion.
    #[error("unrecognized job status \"{0}\"")]
    UnknownStatus(String),

    /// The job claims completion but the response carried no image url.
    #[error("job completed but response carried no image url")]
    MissingImageUrl,

    /// The polling schedule ran out before the job reached a terminal
    /// status. Distinct from a backend error so callers can tell the user
    /// "still processing" instead of "something went wrong".
    #[error("job still pending after {attempts} attempts")]
    PollTimeout { attempts: u32 },

    #[error("invalid api key header: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    #[error("no backend endpoint configured")]
    NoEndpoint,

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start async runtime: {0}")]
    Runtime(std::io::Error),
}

impl ClientError {
    pub async fn from_response(response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ClientError::Http { status, message }
    }
}
