mod null_renderer;
mod options;
mod request;
mod target;

pub use null_renderer::NullRenderer;
pub use options::{DrawOptions, Margins};
pub use request::{DrawRequest, StyleHint};
pub use target::{ChartTarget, RENDERER_CLASS_SUFFIX};

use crate::error::ChartResult;

/// Contract implemented by any chart drawing backend.
///
/// Backends receive fully transformed series plus style directives, so
/// drawing code stays isolated from report parsing and preference handling.
/// Errors are reported back and logged by the caller; they never escape the
/// controller.
pub trait Renderer {
    fn render(&mut self, target: &ChartTarget, request: &DrawRequest) -> ChartResult<()>;
}
