use std::fmt;

use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::error::{ChartError, ChartResult};

use super::{
    AxisConfiguratorConfig, AxisEditSession, AxisElement, AxisInput, AxisKind, DialogAction,
    DialogHost, DialogRole, DialogSpec, ElementInput,
};

/// Edits which elements feed each report axis.
///
/// Every axis has a catalog of known elements and a committed selection (the
/// value submitted with the report form). Editing happens in an
/// [`AxisEditSession`] opened through the dialog host; only one session can be
/// open at a time.
pub struct AxisConfigurator {
    config: AxisConfiguratorConfig,
    catalogs: IndexMap<AxisKind, Vec<AxisElement>>,
    committed: IndexMap<AxisKind, Vec<AxisElement>>,
    session: Option<AxisEditSession>,
    dialog: Box<dyn DialogHost>,
}

impl AxisConfigurator {
    #[must_use]
    pub fn new(config: AxisConfiguratorConfig, dialog: Box<dyn DialogHost>) -> Self {
        Self {
            config,
            catalogs: IndexMap::new(),
            committed: IndexMap::new(),
            session: None,
            dialog,
        }
    }

    /// Replaces the known elements of `axis`. Duplicate keys keep the first
    /// occurrence.
    pub fn set_catalog(&mut self, axis: AxisKind, elements: Vec<AxisElement>) {
        let catalog = dedup_by_key(axis, elements);
        debug!(%axis, elements = catalog.len(), "axis catalog loaded");
        self.catalogs.insert(axis, catalog);
    }

    /// Loads the persisted form state of `axis`.
    pub fn set_committed(&mut self, axis: AxisKind, elements: Vec<AxisElement>) {
        self.committed.insert(axis, dedup_by_key(axis, elements));
    }

    #[must_use]
    pub fn config(&self) -> &AxisConfiguratorConfig {
        &self.config
    }

    #[must_use]
    pub fn committed(&self, axis: AxisKind) -> &[AxisElement] {
        self.committed
            .get(&axis)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Committed selection flattened to `(key, values)` form fields.
    #[must_use]
    pub fn form_values(&self, axis: AxisKind) -> Vec<(String, Vec<String>)> {
        self.committed(axis)
            .iter()
            .map(|element| (element.key.clone(), element.input.form_values()))
            .collect()
    }

    #[must_use]
    pub fn session(&self) -> Option<&AxisEditSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Working selection of the open session; empty when closed.
    #[must_use]
    pub fn selected(&self) -> &[AxisElement] {
        self.session
            .as_ref()
            .map(AxisEditSession::selected)
            .unwrap_or_default()
    }

    /// Elements that can be added: catalog elements not in the working
    /// selection in catalog order, followed by elements deleted this session
    /// that the catalog does not know (stale persisted entries).
    #[must_use]
    pub fn available(&self) -> Vec<&AxisElement> {
        let Some(session) = &self.session else {
            return Vec::new();
        };
        let catalog = self
            .catalogs
            .get(&session.axis())
            .map(Vec::as_slice)
            .unwrap_or_default();

        let mut available: Vec<&AxisElement> = catalog
            .iter()
            .filter(|element| !session.contains(&element.key))
            .map(|element| session.released(&element.key).unwrap_or(element))
            .collect();
        available.extend(
            session
                .released_elements()
                .filter(|element| !catalog.iter().any(|known| known.key == element.key)),
        );
        available
    }

    /// Whether the add affordance is enabled.
    #[must_use]
    pub fn can_add(&self) -> bool {
        self.session.as_ref().is_some_and(AxisEditSession::can_add)
    }

    /// Opens the edit dialog for `axis`, seeding the working selection from the
    /// committed one.
    ///
    /// Fails with [`ChartError::SessionAlreadyOpen`] while another session is
    /// open; that session is left untouched.
    pub fn open(&mut self, axis: AxisKind) -> ChartResult<()> {
        if let Some(session) = &self.session {
            return Err(ChartError::SessionAlreadyOpen {
                axis: session.axis().to_string(),
            });
        }

        let session = AxisEditSession::new(axis, self.config.limit(axis), self.committed(axis));
        if !session.can_add() {
            debug!(
                %axis,
                selected = session.selected().len(),
                "selection limit reached on open"
            );
        }
        self.session = Some(session);
        self.dialog.open(&DialogSpec {
            title: self.config.title(axis),
            size: self.config.dialog_size,
            actions: vec![
                DialogAction {
                    label: "Save".to_owned(),
                    role: DialogRole::Primary,
                    input: AxisInput::Save,
                },
                DialogAction {
                    label: "Cancel".to_owned(),
                    role: DialogRole::Cancel,
                    input: AxisInput::Cancel,
                },
            ],
        });
        debug!(%axis, "axis edit session opened");
        Ok(())
    }

    /// Moves an available element to the end of the working selection.
    ///
    /// Returns `false` and changes nothing when no session is open, the key
    /// is not available, or the limit is reached.
    pub fn add(&mut self, key: &str) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.contains(key) || !session.can_add() {
            trace!(key, "add ignored");
            return false;
        }
        let element = match session.released(key) {
            Some(released) => released.clone(),
            None => {
                let Some(known) = self
                    .catalogs
                    .get(&session.axis())
                    .and_then(|catalog| catalog.iter().find(|element| element.key == key))
                else {
                    trace!(key, "add of unknown element ignored");
                    return false;
                };
                known.clone()
            }
        };
        session.push(element);
        true
    }

    /// Moves a selected element back to the available list, keeping its
    /// input state for a later add.
    pub fn delete(&mut self, key: &str) -> bool {
        self.session
            .as_mut()
            .is_some_and(|session| session.remove(key))
    }

    /// Replaces the nested input state of a selected element.
    pub fn update_element(&mut self, key: &str, input: ElementInput) -> ChartResult<()> {
        let session = self.session.as_mut().ok_or(ChartError::NoActiveSession)?;
        let element = session
            .get_mut(key)
            .ok_or_else(|| ChartError::UnknownElement(key.to_owned()))?;
        if !element.input.same_shape(&input) || !input.is_consistent() {
            return Err(ChartError::InvalidData(format!(
                "input does not match element `{key}`"
            )));
        }
        element.input = input;
        Ok(())
    }

    /// Commits the working selection, in order, as the axis form state.
    pub fn save(&mut self) -> ChartResult<()> {
        let session = self.session.take().ok_or(ChartError::NoActiveSession)?;
        let axis = session.axis();
        let selected = session.into_selected();
        debug!(%axis, selected = selected.len(), "axis selection saved");
        self.committed.insert(axis, selected);
        self.dialog.close();
        Ok(())
    }

    /// Discards the working selection.
    pub fn cancel(&mut self) -> ChartResult<()> {
        let session = self.session.take().ok_or(ChartError::NoActiveSession)?;
        debug!(axis = %session.axis(), "axis edit cancelled");
        self.dialog.close();
        Ok(())
    }

    /// Applies one user input. Returns `true` when state changed.
    pub fn dispatch(&mut self, input: AxisInput) -> bool {
        let result = match input {
            AxisInput::Add(key) => return self.add(&key),
            AxisInput::Delete(key) => return self.delete(&key),
            AxisInput::Update { key, input } => self.update_element(&key, input),
            AxisInput::Save => self.save(),
            AxisInput::Cancel => self.cancel(),
        };
        match result {
            Ok(()) => true,
            Err(err) => {
                debug!(error = %err, "axis input ignored");
                false
            }
        }
    }
}

impl fmt::Debug for AxisConfigurator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisConfigurator")
            .field("config", &self.config)
            .field("catalogs", &self.catalogs)
            .field("committed", &self.committed)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

fn dedup_by_key(axis: AxisKind, elements: Vec<AxisElement>) -> Vec<AxisElement> {
    let mut unique: IndexMap<String, AxisElement> = IndexMap::with_capacity(elements.len());
    for element in elements {
        if unique.contains_key(&element.key) {
            warn!(%axis, key = %element.key, "dropping duplicate axis element");
            continue;
        }
        unique.insert(element.key.clone(), element);
    }
    unique.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::AxisConfigurator;
    use crate::axis::{AxisConfiguratorConfig, AxisElement, AxisKind, NullDialogHost};
    use crate::error::ChartError;

    fn configurator() -> AxisConfigurator {
        let mut configurator =
            AxisConfigurator::new(AxisConfiguratorConfig::default(), Box::new(NullDialogHost));
        configurator.set_catalog(
            AxisKind::XAxis,
            vec![AxisElement::new("A", "A"), AxisElement::new("B", "B")],
        );
        configurator
    }

    #[test]
    fn second_open_is_rejected() {
        let mut configurator = configurator();
        configurator.open(AxisKind::XAxis).expect("open");
        assert!(configurator.add("A"));

        let err = configurator.open(AxisKind::YAxis).expect_err("second open");
        assert!(matches!(err, ChartError::SessionAlreadyOpen { ref axis } if axis == "XAxis"));
        assert_eq!(configurator.selected().len(), 1);
    }

    #[test]
    fn operations_without_session_are_noops() {
        let mut configurator = configurator();
        assert!(!configurator.add("A"));
        assert!(!configurator.delete("A"));
        assert!(configurator.available().is_empty());
        assert!(matches!(configurator.save(), Err(ChartError::NoActiveSession)));
    }
}
