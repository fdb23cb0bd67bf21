use serde::{Deserialize, Serialize};

use crate::errors::ClientError;

/// Wire shape of one status check against the retrieval endpoint.
#[derive(Deserialize, Serialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub error: Option<String>,
}

/// One poll attempt's parsed result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JobStatus {
    Pending,
    Completed { image_url: String },
    Error { message: Option<String> },
}

/// Terminal result of a generation job, as retained by the caller. Only the
/// last poll attempt produces one of these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationOutcome {
    Completed { image_url: String },
    Failed { message: Option<String> },
}

impl StatusResponse {
    /// Parse the raw status string into the tri-state result.
    ///
    /// A `completed` status must carry a non-empty image url. Status values
    /// outside the known vocabulary are an error, never implicit `pending`.
    /// An `error` status may arrive without a message.
    pub fn into_status(self) -> Result<JobStatus, ClientError> {
        match self.status.as_str() {
            "pending" => Ok(JobStatus::Pending),
            "completed" => match self.image_url {
                Some(url) if !url.is_empty() => Ok(JobStatus::Completed { image_url: url }),
                _ => Err(ClientError::MissingImageUrl),
            },
            "error" => Ok(JobStatus::Error {
                message: self.error,
            }),
            other => Err(ClientError::UnknownStatus(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<JobStatus, ClientError> {
        serde_json::from_str::<StatusResponse>(body)
            .expect("valid json")
            .into_status()
    }

    #[test]
    fn pending_has_no_payload() {
        assert_eq!(parse(r#"{"status":"pending"}"#).unwrap(), JobStatus::Pending);
    }

    #[test]
    fn completed_carries_image_url() {
        let status = parse(r#"{"status":"completed","imageUrl":"https://cdn.example/ad.png"}"#);
        assert_eq!(
            status.unwrap(),
            JobStatus::Completed {
                image_url: "https://cdn.example/ad.png".to_owned()
            }
        );
    }

    #[test]
    fn completed_without_image_url_is_rejected() {
        let status = parse(r#"{"status":"completed"}"#);
        assert!(matches!(status, Err(ClientError::MissingImageUrl)));
    }

    #[test]
    fn completed_with_empty_image_url_is_rejected() {
        let status = parse(r#"{"status":"completed","imageUrl":""}"#);
        assert!(matches!(status, Err(ClientError::MissingImageUrl)));
    }

    #[test]
    fn error_message_is_optional() {
        let with_message = parse(r#"{"status":"error","error":"model overloaded"}"#).unwrap();
        assert_eq!(
            with_message,
            JobStatus::Error {
                message: Some("model overloaded".to_owned())
            }
        );

        let without_message = parse(r#"{"status":"error"}"#).unwrap();
        assert_eq!(without_message, JobStatus::Error { message: None });
    }

    #[test]
    fn unknown_status_is_a_distinct_error_not_pending() {
        let status = parse(r#"{"status":"queued"}"#);
        match status {
            Err(ClientError::UnknownStatus(value)) => assert_eq!(value, "queued"),
            other => panic!("expected UnknownStatus, got {:?}", other),
        }
    }
}
