use indexmap::IndexMap;

use crate::extensions::api::action::{Action, ActionName};
use crate::extensions::api::descriptors::ExtensionDescriptor;
use crate::extensions::api::error::ExtensionCatalogError;
use crate::extensions::api::registry::RegisteredAction;

use super::{ContributionInstallContext, ContributionSpecImpl};

/// Storage backing registered actions, keyed by qualified name.
///
/// Insertion order is preserved so listings match registration order.
#[derive(Clone, Default)]
pub struct ActionStore {
    actions: IndexMap<ActionName, RegisteredAction>,
}

impl ActionStore {
    /// Check that `name` is free for registration.
    pub fn ensure_available(&self, name: &ActionName) -> Result<(), ExtensionCatalogError> {
        if self.actions.contains_key(name) {
            return Err(ExtensionCatalogError::DuplicateAction { name: name.clone() });
        }
        Ok(())
    }

    /// Insert a registered action; callers must check availability first.
    pub fn insert(&mut self, registered: RegisteredAction) {
        let existing = self.actions.insert(registered.name().clone(), registered);
        debug_assert!(
            existing.is_none(),
            "qualified action names should be unique"
        );
    }

    #[must_use]
    pub fn get(&self, name: &ActionName) -> Option<&RegisteredAction> {
        self.actions.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredAction> {
        self.actions.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Drop every action contributed by the extension with `id`, returning
    /// how many were removed.
    pub fn remove_extension(&mut self, id: &str) -> usize {
        let before = self.actions.len();
        self.actions
            .retain(|_, registered| registered.descriptor().id != id);
        before - self.actions.len()
    }
}

/// Contribution describing a single registered action.
#[derive(Clone)]
pub(super) struct ActionContribution {
    descriptor: &'static ExtensionDescriptor,
    name: &'static str,
    action: Action,
}

impl ActionContribution {
    pub(super) fn new(
        descriptor: &'static ExtensionDescriptor,
        name: &'static str,
        action: Action,
    ) -> Self {
        Self {
            descriptor,
            name,
            action,
        }
    }
}

impl ContributionSpecImpl for ActionContribution {
    fn install(
        &self,
        context: &mut ContributionInstallContext<'_>,
    ) -> Result<(), ExtensionCatalogError> {
        let qualified = ActionName::qualified(self.descriptor.namespace, self.name);
        let registered = RegisteredAction::new(self.descriptor, qualified, self.action.clone());
        context.register_action(registered)
    }
}
