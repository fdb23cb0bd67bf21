use reqwest::header::HeaderValue;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use secrecy::ExposeSecret;
use tracing::info;

use crate::clients::poller::{PollSchedule, StatusSource, poll_until_terminal};
use crate::errors::ClientError;
use crate::models::{
    Credentials, GenerationOutcome, JobHandle, JobResponse, JobStatus, PartValue, StatusResponse,
    SubmitPayload,
};

fn api_key_header(creds: &Credentials) -> Result<Option<HeaderValue>, ClientError> {
    match &creds.api_key {
        Some(key) => {
            let mut value = HeaderValue::from_str(key.expose_secret())?;
            value.set_sensitive(true);
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

async fn handle_response_status(response: Response) -> Result<Response, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::from_response(response).await);
    }
    Ok(response)
}

/// Submit one form payload as a multipart request.
///
/// Every present field becomes one part: photos as file parts with their
/// name and MIME type, everything else as a text part. Returns the handle
/// of the job the backend queued. No retry here: a failed submission
/// surfaces immediately.
pub async fn submit_form(
    client: &Client,
    creds: &Credentials,
    payload: &SubmitPayload,
) -> Result<JobHandle, ClientError> {
    let endpoint = creds.base_url.trim_end_matches('/');
    let submit_url = format!("{}/form", endpoint);

    let mut form = Form::new();
    for (field_name, value) in payload.parts() {
        form = match value {
            PartValue::Text(text) => form.text(field_name, text),
            PartValue::File(photo) => {
                let part = Part::bytes(photo.bytes)
                    .file_name(photo.file_name)
                    .mime_str(photo.mime_type)?;
                form.part(field_name, part)
            }
        };
    }

    let mut request = client.post(&submit_url).multipart(form);
    if let Some(key) = api_key_header(creds)? {
        request = request.header("X-API-Key", key);
    }

    let response = handle_response_status(request.send().await?).await?;
    let job: JobResponse = response.json().await?;

    info!(job_id = job.job_id.as_str(), "form submission accepted");
    Ok(JobHandle::from(job.job_id))
}

/// One read-only status check for a previously submitted job.
pub async fn retrieve_results(
    client: &Client,
    creds: &Credentials,
    job: &JobHandle,
) -> Result<JobStatus, ClientError> {
    let endpoint = creds.base_url.trim_end_matches('/');
    let retrieve_url = format!("{}/retrieve_results", endpoint);

    let mut request = client
        .get(&retrieve_url)
        .query(&[("jobId", job.as_str())]);
    if let Some(key) = api_key_header(creds)? {
        request = request.header("X-API-Key", key);
    }

    let response = handle_response_status(request.send().await?).await?;
    let status: StatusResponse = response.json().await?;
    status.into_status()
}

/// Adapter that lets the poller drive [`retrieve_results`] for one job.
pub struct HttpStatusSource<'a> {
    client: &'a Client,
    creds: &'a Credentials,
    job: JobHandle,
}

impl<'a> HttpStatusSource<'a> {
    pub fn new(client: &'a Client, creds: &'a Credentials, job: JobHandle) -> Self {
        Self { client, creds, job }
    }
}

impl StatusSource for HttpStatusSource<'_> {
    async fn fetch_status(&mut self) -> Result<JobStatus, ClientError> {
        retrieve_results(self.client, self.creds, &self.job).await
    }
}

/// Submit a payload and poll the resulting job until it reaches a terminal
/// state (or the schedule runs out).
pub async fn generate_ad(
    client: &Client,
    creds: &Credentials,
    payload: &SubmitPayload,
    schedule: PollSchedule,
    on_progress: impl FnMut(u32),
) -> Result<GenerationOutcome, ClientError> {
    let job = submit_form(client, creds, payload).await?;
    let mut source = HttpStatusSource::new(client, creds, job);
    poll_until_terminal(&mut source, schedule, on_progress).await
}
