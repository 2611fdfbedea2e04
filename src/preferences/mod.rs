//! Per-report display preferences and their fire-and-forget persistence.
//!
//! Preferences live in memory for the whole page session. Every merge is
//! applied immediately and then queued for the remote endpoint; the queue is
//! drained on a later event-loop turn by [`PreferenceStore::dispatch_pending`].

mod endpoint;
mod model;
mod store;

#[cfg(feature = "http-endpoint")]
mod http_endpoint;

pub use endpoint::{NullEndpoint, PreferenceEndpoint, PreferenceUpdate, RecordingEndpoint};
pub use model::{DisplayPreferences, PreferencePatch, ReportPreferences, StylePatch, StyleState};
pub use store::{PreferenceStore, SharedPreferenceStore};

#[cfg(feature = "http-endpoint")]
pub use http_endpoint::{DeliveryStats, HttpPreferenceEndpoint};
