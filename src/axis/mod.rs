//! Axis element selection behind a modal edit dialog.

mod config;
mod configurator;
mod dialog;
mod element;
mod input;
mod session;

pub use config::{AxisConfiguratorConfig, AxisSettings};
pub use configurator::AxisConfigurator;
pub use dialog::{
    DialogAction, DialogCall, DialogHost, DialogRole, DialogSize, DialogSpec, NullDialogHost,
    RecordingDialogHost,
};
pub use element::{AxisElement, AxisKind, ElementInput};
pub use input::AxisInput;
pub use session::AxisEditSession;
