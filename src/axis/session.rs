use indexmap::IndexMap;

use super::{AxisElement, AxisKind};

/// Working state of one open edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisEditSession {
    axis: AxisKind,
    limit: Option<usize>,
    selected: Vec<AxisElement>,
    /// Elements deleted during this session, kept with their input state so
    /// adding them again restores it.
    released: IndexMap<String, AxisElement>,
}

impl AxisEditSession {
    pub(super) fn new(axis: AxisKind, limit: Option<usize>, seed: &[AxisElement]) -> Self {
        let mut session = Self {
            axis,
            limit,
            selected: Vec::with_capacity(seed.len()),
            released: IndexMap::new(),
        };
        for element in seed {
            if !session.contains(&element.key) {
                session.selected.push(element.clone());
            }
        }
        session
    }

    #[must_use]
    pub fn axis(&self) -> AxisKind {
        self.axis
    }

    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    #[must_use]
    pub fn selected(&self) -> &[AxisElement] {
        &self.selected
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Whether another element may be added.
    #[must_use]
    pub fn can_add(&self) -> bool {
        self.limit.is_none_or(|limit| self.selected.len() < limit)
    }

    /// State a deleted element had when it left the selection.
    #[must_use]
    pub fn released(&self, key: &str) -> Option<&AxisElement> {
        self.released.get(key)
    }

    /// Deleted elements in deletion order.
    pub fn released_elements(&self) -> impl Iterator<Item = &AxisElement> {
        self.released.values()
    }

    pub(super) fn push(&mut self, element: AxisElement) {
        self.released.shift_remove(&element.key);
        self.selected.push(element);
    }

    pub(super) fn remove(&mut self, key: &str) -> bool {
        let Some(position) = self.position(key) else {
            return false;
        };
        let element = self.selected.remove(position);
        self.released.insert(element.key.clone(), element);
        true
    }

    pub(super) fn get_mut(&mut self, key: &str) -> Option<&mut AxisElement> {
        self.selected.iter_mut().find(|element| element.key == key)
    }

    pub(super) fn into_selected(self) -> Vec<AxisElement> {
        self.selected
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.selected.iter().position(|element| element.key == key)
    }
}
