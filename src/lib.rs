//! statviz: chart series, display preferences and axis configuration for
//! statistics report screens.
//!
//! Report matrices are turned into chart-ready series by [`core::transform`],
//! drawn through a host-provided [`render::Renderer`] by
//! [`api::ChartController`], and user interaction on the chart is written back
//! into a shared [`preferences::PreferenceStore`]. The [`axis`] module holds
//! the modal editor that picks which fields feed each report axis.

pub mod api;
pub mod axis;
pub mod core;
pub mod error;
pub mod interaction;
pub mod preferences;
pub mod render;
pub mod telemetry;

pub use api::{ChartController, ChartControllerConfig, ChartId};
pub use axis::{AxisConfigurator, AxisConfiguratorConfig, AxisElement, AxisKind};
pub use crate::core::{ChartKind, ReportMatrix, SeriesSet};
pub use error::{ChartError, ChartResult};
pub use preferences::{PreferenceStore, SharedPreferenceStore};
