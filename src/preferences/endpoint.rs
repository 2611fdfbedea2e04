use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Full preference value of one report, ready for the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceUpdate {
    pub report_key: String,
    /// JSON object holding every chart kind's preferences for the report.
    pub value: String,
}

/// Remote preference store.
///
/// Callers never wait on the outcome: a returned error is logged and dropped,
/// and the in-memory preferences stay authoritative for the session.
pub trait PreferenceEndpoint {
    fn persist(&mut self, update: &PreferenceUpdate) -> ChartResult<()>;
}

/// Endpoint that drops every update, for hosts without remote storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEndpoint;

impl PreferenceEndpoint for NullEndpoint {
    fn persist(&mut self, _update: &PreferenceUpdate) -> ChartResult<()> {
        Ok(())
    }
}

/// Endpoint that records updates in memory.
///
/// Clones share the same log, so a test can keep one handle while the store
/// owns another.
#[derive(Debug, Default, Clone)]
pub struct RecordingEndpoint {
    updates: Rc<RefCell<Vec<PreferenceUpdate>>>,
    failing: Rc<Cell<bool>>,
}

impl RecordingEndpoint {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent `persist` calls fail without recording.
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    #[must_use]
    pub fn updates(&self) -> Vec<PreferenceUpdate> {
        self.updates.borrow().clone()
    }

    #[must_use]
    pub fn last_value(&self, report_key: &str) -> Option<serde_json::Value> {
        self.updates
            .borrow()
            .iter()
            .rev()
            .find(|update| update.report_key == report_key)
            .and_then(|update| serde_json::from_str(&update.value).ok())
    }
}

impl PreferenceEndpoint for RecordingEndpoint {
    fn persist(&mut self, update: &PreferenceUpdate) -> ChartResult<()> {
        if self.failing.get() {
            return Err(ChartError::Persistence(format!(
                "endpoint rejected update for `{}`",
                update.report_key
            )));
        }
        self.updates.borrow_mut().push(update.clone());
        Ok(())
    }
}
