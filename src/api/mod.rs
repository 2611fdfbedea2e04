mod chart_controller;
mod chart_events;
mod chart_render;
mod controller_config;

pub use chart_controller::{ChartController, ChartId, RenderedChart};
pub use chart_events::STACKED_STYLE;
pub use controller_config::ChartControllerConfig;
