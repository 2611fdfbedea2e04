use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::AxisInput;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogRole {
    Primary,
    Cancel,
}

/// Dialog button; pressing it feeds `input` back into the configurator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogAction {
    pub label: String,
    pub role: DialogRole,
    pub input: AxisInput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogSpec {
    pub title: String,
    pub size: DialogSize,
    pub actions: Vec<DialogAction>,
}

/// Modal dialog surface the configurator runs in.
pub trait DialogHost {
    fn open(&mut self, spec: &DialogSpec);
    fn close(&mut self);
}

/// Host that shows nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDialogHost;

impl DialogHost for NullDialogHost {
    fn open(&mut self, _spec: &DialogSpec) {}

    fn close(&mut self) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogCall {
    Open(DialogSpec),
    Close,
}

/// Host that records every call; clones share the same log.
#[derive(Debug, Default, Clone)]
pub struct RecordingDialogHost {
    calls: Rc<RefCell<Vec<DialogCall>>>,
}

impl RecordingDialogHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn calls(&self) -> Vec<DialogCall> {
        self.calls.borrow().clone()
    }

    /// Whether the last call left a dialog open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.calls.borrow().last(), Some(DialogCall::Open(_)))
    }
}

impl DialogHost for RecordingDialogHost {
    fn open(&mut self, spec: &DialogSpec) {
        self.calls.borrow_mut().push(DialogCall::Open(spec.clone()));
    }

    fn close(&mut self) {
        self.calls.borrow_mut().push(DialogCall::Close);
    }
}
