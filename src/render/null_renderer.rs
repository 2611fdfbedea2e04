use crate::error::{ChartError, ChartResult};
use crate::render::{ChartTarget, DrawRequest, Renderer};

/// Renderer that draws nothing, used by tests and headless hosts.
///
/// It still validates the request so tests catch malformed series before a
/// real backend sees them, and it can be told to fail to exercise the
/// controller's error boundary.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub draw_count: usize,
    pub last_target: Option<ChartTarget>,
    pub last_request: Option<DrawRequest>,
    pub fail_with: Option<String>,
}

impl NullRenderer {
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::default()
        }
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, target: &ChartTarget, request: &DrawRequest) -> ChartResult<()> {
        if let Some(message) = &self.fail_with {
            return Err(ChartError::Render(message.clone()));
        }
        request.validate()?;
        self.draw_count += 1;
        self.last_target = Some(target.clone());
        self.last_request = Some(request.clone());
        Ok(())
    }
}
