use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{trace, warn};

use crate::error::{ChartError, ChartResult};

use super::{PreferenceEndpoint, PreferenceUpdate};

/// Counters of what the background sender has done so far.
#[derive(Debug, Clone, Default)]
pub struct DeliveryStats {
    delivered: Arc<AtomicUsize>,
    failed: Arc<AtomicUsize>,
}

impl DeliveryStats {
    #[must_use]
    pub fn delivered(&self) -> usize {
        self.delivered.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.failed.load(Ordering::Acquire)
    }
}

/// Posts preference updates to the agent preferences handler.
///
/// `persist` only hands the update to a background thread and returns; the
/// POST itself (`Action=AgentPreferences`, `Subaction=UpdateAJAX`,
/// `Key=<report key>`, `Value=<json>`) runs there, one request at a time.
/// Failed requests are logged by the worker and counted in
/// [`DeliveryStats`]. The worker exits once the endpoint is dropped and its
/// queue is empty.
#[derive(Debug)]
pub struct HttpPreferenceEndpoint {
    url: String,
    sender: Sender<PreferenceUpdate>,
    stats: DeliveryStats,
}

impl HttpPreferenceEndpoint {
    pub fn new(url: impl Into<String>) -> ChartResult<Self> {
        Self::with_timeout(url, Duration::from_secs(10))
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> ChartResult<Self> {
        let url = url.into();
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("statviz/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ChartError::Persistence(format!("failed to build http client: {e}")))?;

        let (sender, receiver) = mpsc::channel::<PreferenceUpdate>();
        let stats = DeliveryStats::default();
        let worker_stats = stats.clone();
        let worker_url = url.clone();

        thread::Builder::new()
            .name("statviz-preferences".to_owned())
            .spawn(move || {
                for update in receiver {
                    match post_update(&http, &worker_url, &update) {
                        Ok(()) => {
                            trace!(report_key = %update.report_key, "preference update saved");
                            worker_stats.delivered.fetch_add(1, Ordering::AcqRel);
                        }
                        Err(err) => {
                            warn!(
                                report_key = %update.report_key,
                                error = %err,
                                "preference update was not saved remotely"
                            );
                            worker_stats.failed.fetch_add(1, Ordering::AcqRel);
                        }
                    }
                }
            })
            .map_err(|e| {
                ChartError::Persistence(format!("failed to start preference sender: {e}"))
            })?;

        Ok(Self { url, sender, stats })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Shared view of the worker's counters; stays valid after the endpoint
    /// moves into a store.
    #[must_use]
    pub fn stats(&self) -> DeliveryStats {
        self.stats.clone()
    }
}

impl PreferenceEndpoint for HttpPreferenceEndpoint {
    fn persist(&mut self, update: &PreferenceUpdate) -> ChartResult<()> {
        self.sender
            .send(update.clone())
            .map_err(|_| ChartError::Persistence("preference sender has stopped".to_owned()))
    }
}

fn post_update(http: &Client, url: &str, update: &PreferenceUpdate) -> ChartResult<()> {
    let form = [
        ("Action", "AgentPreferences"),
        ("Subaction", "UpdateAJAX"),
        ("Key", update.report_key.as_str()),
        ("Value", update.value.as_str()),
    ];
    let response = http
        .post(url)
        .form(&form)
        .send()
        .map_err(|e| ChartError::Persistence(format!("POST {url}: {e}")))?;
    if !response.status().is_success() {
        return Err(ChartError::Persistence(format!(
            "POST {url} failed with HTTP {}",
            response.status()
        )));
    }
    Ok(())
}
