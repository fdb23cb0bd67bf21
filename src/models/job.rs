use serde::Deserialize;

/// Opaque identifier for one backend generation job. Created by a
/// submission, consumed by every status check for that job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobHandle(String);

impl JobHandle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for JobHandle {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for JobHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Response body of an accepted form submission.
#[derive(Deserialize)]
pub struct JobResponse {
    #[serde(rename = "jobId")]
    pub job_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_response_deserializes_camel_case_id() {
        let response: JobResponse =
            serde_json::from_str(r#"{"jobId":"job-42"}"#).expect("valid response body");
        assert_eq!(response.job_id, "job-42");
    }

    #[test]
    fn job_response_without_id_is_rejected() {
        let result = serde_json::from_str::<JobResponse>(r#"{"status":"queued"}"#);
        assert!(result.is_err());
    }
}
