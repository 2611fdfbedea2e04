use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::ChartKind;
use crate::preferences::SharedPreferenceStore;
use crate::render::{ChartTarget, Renderer};

use super::ChartControllerConfig;

/// Handle of a chart drawn by a [`ChartController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChartId(u64);

impl ChartId {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chart-{}", self.0)
    }
}

/// Bookkeeping for a drawn chart so renderer events can be routed back.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    pub kind: ChartKind,
    pub target: ChartTarget,
    /// Series keys in drawing order.
    pub keys: Vec<String>,
    /// Whether the renderer accepted the last draw.
    pub drawn: bool,
}

/// Binds transformed series to a renderer and writes user interaction back
/// into the preference store.
pub struct ChartController<R: Renderer> {
    pub(super) renderer: R,
    pub(super) store: SharedPreferenceStore,
    pub(super) config: ChartControllerConfig,
    pub(super) charts: IndexMap<ChartId, RenderedChart>,
    next_id: u64,
}

impl<R: Renderer> ChartController<R> {
    #[must_use]
    pub fn new(renderer: R, store: SharedPreferenceStore) -> Self {
        Self::with_config(renderer, store, ChartControllerConfig::default())
    }

    #[must_use]
    pub fn with_config(
        renderer: R,
        store: SharedPreferenceStore,
        config: ChartControllerConfig,
    ) -> Self {
        Self {
            renderer,
            store,
            config,
            charts: IndexMap::new(),
            next_id: 1,
        }
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn store(&self) -> &SharedPreferenceStore {
        &self.store
    }

    #[must_use]
    pub fn config(&self) -> &ChartControllerConfig {
        &self.config
    }

    #[must_use]
    pub fn chart(&self, id: ChartId) -> Option<&RenderedChart> {
        self.charts.get(&id)
    }

    #[must_use]
    pub fn chart_count(&self) -> usize {
        self.charts.len()
    }

    /// Forgets a chart; later events for `id` are ignored.
    pub fn remove(&mut self, id: ChartId) -> bool {
        self.charts.shift_remove(&id).is_some()
    }

    /// Registers a drawn chart, retiring any earlier chart drawn into the
    /// same element so only the latest id routes events.
    pub(super) fn register(&mut self, chart: RenderedChart) -> ChartId {
        let element_id = chart.target.element_id();
        self.charts
            .retain(|_, existing| existing.target.element_id() != element_id);
        let id = ChartId(self.next_id);
        self.next_id += 1;
        self.charts.insert(id, chart);
        id
    }
}

impl<R: Renderer> fmt::Debug for ChartController<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartController")
            .field("charts", &self.charts)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
