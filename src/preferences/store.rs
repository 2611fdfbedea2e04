use std::cell::RefCell;
use std::fmt;
use std::mem;
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::core::ChartKind;
use crate::error::{ChartError, ChartResult};

use super::{
    DisplayPreferences, NullEndpoint, PreferenceEndpoint, PreferencePatch, PreferenceUpdate,
    ReportPreferences,
};

/// Handle used to inject one store into every collaborator of a page.
pub type SharedPreferenceStore = Rc<RefCell<PreferenceStore>>;

/// Session-wide display preferences, keyed by report.
pub struct PreferenceStore {
    reports: IndexMap<String, ReportPreferences>,
    endpoint: Box<dyn PreferenceEndpoint>,
    /// Latest unsent value per report; each entry holds the whole report.
    outbox: IndexMap<String, PreferenceUpdate>,
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::new(Box::new(NullEndpoint))
    }
}

impl fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("reports", &self.reports)
            .field("pending", &self.outbox.len())
            .finish_non_exhaustive()
    }
}

impl PreferenceStore {
    #[must_use]
    pub fn new(endpoint: Box<dyn PreferenceEndpoint>) -> Self {
        Self {
            reports: IndexMap::new(),
            endpoint,
            outbox: IndexMap::new(),
        }
    }

    /// Wraps a new store in a [`SharedPreferenceStore`].
    #[must_use]
    pub fn shared(endpoint: Box<dyn PreferenceEndpoint>) -> SharedPreferenceStore {
        Rc::new(RefCell::new(Self::new(endpoint)))
    }

    /// Loads the server-provided preference value of a report, replacing any
    /// in-memory state for it. On parse failure the store is left unchanged.
    pub fn seed(&mut self, report_key: &str, json: &str) -> ChartResult<()> {
        let preferences: ReportPreferences = serde_json::from_str(json).map_err(|e| {
            ChartError::InvalidData(format!(
                "failed to parse preferences for `{report_key}`: {e}"
            ))
        })?;
        debug!(report_key, kinds = preferences.len(), "seeded report preferences");
        self.reports.insert(report_key.to_owned(), preferences);
        Ok(())
    }

    /// Returns the preferences of a report, creating an empty entry on first
    /// access.
    pub fn get(&mut self, report_key: &str) -> ReportPreferences {
        self.entry(report_key).clone()
    }

    /// Preferences of one chart kind within a report; defaults when unset.
    pub fn display(&mut self, report_key: &str, kind: ChartKind) -> DisplayPreferences {
        self.entry(report_key)
            .get(&kind)
            .cloned()
            .unwrap_or_default()
    }

    /// Read-only lookup that does not create an entry.
    #[must_use]
    pub fn peek(&self, report_key: &str) -> Option<&ReportPreferences> {
        self.reports.get(report_key)
    }

    /// Merges `patch` into the preferences of `(report_key, kind)` and queues
    /// the full report value for persistence, replacing any value of the same
    /// report that has not been sent yet.
    ///
    /// The merge is visible to the next `get` immediately; persistence only
    /// happens when the host calls [`Self::dispatch_pending`].
    pub fn merge_update(&mut self, report_key: &str, kind: ChartKind, patch: PreferencePatch) {
        let report = self.entry(report_key);
        report.entry(kind).or_default().merge(patch);

        match serde_json::to_string(report) {
            Ok(value) => {
                trace!(report_key, %kind, "queued preference update");
                self.outbox.insert(
                    report_key.to_owned(),
                    PreferenceUpdate {
                        report_key: report_key.to_owned(),
                        value,
                    },
                );
            }
            Err(err) => {
                warn!(
                    report_key,
                    error = %err,
                    "skipping persistence of unserializable preferences"
                );
            }
        }
    }

    /// Number of reports with an update waiting for the remote endpoint.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.outbox.len()
    }

    /// Sends the queued update of every report, in order of first merge.
    ///
    /// Failures are logged and dropped; they never touch in-memory state.
    /// Returns how many updates the endpoint accepted.
    pub fn dispatch_pending(&mut self) -> usize {
        let mut accepted = 0;
        for update in mem::take(&mut self.outbox).into_values() {
            match self.endpoint.persist(&update) {
                Ok(()) => accepted += 1,
                Err(err) => {
                    warn!(
                        report_key = %update.report_key,
                        error = %err,
                        "preference update was not saved remotely"
                    );
                }
            }
        }
        accepted
    }

    fn entry(&mut self, report_key: &str) -> &mut ReportPreferences {
        self.reports.entry(report_key.to_owned()).or_default()
    }
}
