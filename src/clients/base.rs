use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use futures::future::join_all;
use reqwest::Client;
use tokio::sync::Semaphore;

use crate::clients::ad_generation::generate_ad;
use crate::clients::poller::PollSchedule;
use crate::models::{GenerationOutcome, SubmitPayload, generator_client::MadCreateClient};

impl MadCreateClient {
    /// Run many independent submissions concurrently.
    ///
    /// Each payload gets its own job handle and polling loop; nothing is
    /// shared between flows. Endpoints rotate round-robin across the
    /// configured credential list and the semaphore caps how many flows are
    /// in flight at once. Per-item failures degrade to strings so one bad
    /// submission cannot take down the batch.
    pub(crate) async fn process_submissions_async(
        &self,
        payloads: Vec<SubmitPayload>,
        schedule: PollSchedule,
        semaphore_size: usize,
    ) -> Vec<Result<GenerationOutcome, String>> {
        let client = Client::new();
        let cred_list = Arc::new(self.credentials.clone());
        let list_len = cred_list.len();
        let semaphore = Arc::new(Semaphore::new(semaphore_size));
        let current_index = Arc::new(AtomicUsize::new(0));

        let tasks = payloads.into_iter().map(|payload| {
            let client = client.clone();
            let cred_list_clone = cred_list.clone();
            let index_counter = current_index.clone();
            let semaphore = semaphore.clone();

            tokio::spawn(async move {
                let _permit = semaphore.acquire().await.unwrap();
                let old_index = index_counter.fetch_add(1, Ordering::Relaxed);
                let actual_index = old_index % list_len;
                let creds = cred_list_clone[actual_index].clone();

                generate_ad(&client, &creds, &payload, schedule, |_attempt| {}).await
            })
        });

        let results = join_all(tasks).await;

        results
            .into_iter()
            .map(|join_result| match join_result {
                Err(join_err) => Err(format!("Task panicked: {}", join_err)),
                Ok(api_result) => match api_result {
                    Ok(outcome) => Ok(outcome),
                    Err(api_err) => Err(format!("API Error: {}", api_err)),
                },
            })
            .collect()
    }
}
