pub mod color;
pub mod kind;
pub mod matrix;
pub mod palette;
pub mod series;
pub mod transform;

pub use color::Color;
pub use kind::ChartKind;
pub use matrix::{AGGREGATE_MARKER, Cell, ReportMatrix};
pub use palette::{PALETTE_LEN, SIMPLE_PALETTE, color_at, simple_color_at};
pub use series::{
    LABEL_END, LABEL_START, Series, SeriesPoint, SeriesSet, ValueFormat, disambiguation_label,
    strip_disambiguation_label,
};
pub use transform::transform;
