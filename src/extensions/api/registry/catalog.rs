use std::sync::Arc;

use crate::extensions::api::action::{Action, ActionName};
use crate::extensions::api::context::ActionContext;
use crate::extensions::api::contributions::{
    ActionStore, ConsolePane, ConsoleStore, Contribution, ContributionInstallContext,
    ExtensionPackage, RegisteredDropdown, ToolbarStore,
};
use crate::extensions::api::descriptors::ExtensionDescriptor;
use crate::extensions::api::error::ExtensionCatalogError;
use crate::extensions::api::registry::RegisteredAction;

/// Catalog of every contribution installed by the loaded extensions.
///
/// The catalog owns three stores: named actions, toolbar dropdowns, and
/// console panes. Packages install their contributions through an install
/// context so each contribution type checks its own uniqueness rules.
#[derive(Clone, Default)]
pub struct ExtensionCatalog {
    actions: ActionStore,
    toolbar: ToolbarStore,
    consoles: ConsoleStore,
}

impl ExtensionCatalog {
    /// Create a catalog with no registered contributions.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new() -> Self {
        Self::empty()
    }

    fn install_contribution(
        &mut self,
        contribution: &Contribution,
    ) -> Result<(), ExtensionCatalogError> {
        let mut context = ContributionInstallContext::new(
            &mut self.actions,
            &mut self.toolbar,
            &mut self.consoles,
        );
        contribution.install(&mut context)
    }

    /// Install every contribution provided by `package`.
    ///
    /// Installation stops at the first failing contribution; earlier ones
    /// from the same package stay registered.
    pub fn register_package<B>(&mut self, package: B) -> Result<(), ExtensionCatalogError>
    where
        B: ExtensionPackage,
    {
        for contribution in package.contributions() {
            self.install_contribution(&contribution)?;
        }
        Ok(())
    }

    /// Register a single action under the descriptor's namespace.
    pub fn register_action(
        &mut self,
        descriptor: &'static ExtensionDescriptor,
        name: &'static str,
        action: Action,
    ) -> Result<(), ExtensionCatalogError> {
        let contribution = Contribution::action(descriptor, name, action);
        self.install_contribution(&contribution)
    }

    /// Run the handler registered under the qualified `name`.
    pub fn invoke(
        &self,
        name: &ActionName,
        context: &mut ActionContext<'_>,
    ) -> Result<(), ExtensionCatalogError> {
        let Some(registered) = self.actions.get(name) else {
            return Err(ExtensionCatalogError::UnknownAction { name: name.clone() });
        };
        registered.action().invoke(context);
        Ok(())
    }

    /// Look up a registered action by qualified name.
    #[must_use]
    pub fn action(&self, name: &ActionName) -> Option<&RegisteredAction> {
        self.actions.get(name)
    }

    /// Iterate over registered actions in registration order.
    pub fn actions(&self) -> impl Iterator<Item = &RegisteredAction> {
        self.actions.iter()
    }

    /// Iterate over contributed toolbar dropdowns in registration order.
    pub fn dropdowns(&self) -> impl Iterator<Item = &RegisteredDropdown> {
        self.toolbar.iter()
    }

    /// Look up a contributed dropdown by control id.
    #[must_use]
    pub fn dropdown(&self, id: &str) -> Option<&RegisteredDropdown> {
        self.toolbar.get(id)
    }

    /// Number of contributed toolbar dropdowns.
    #[must_use]
    pub fn dropdown_count(&self) -> usize {
        self.toolbar.len()
    }

    /// Iterate over contributed console panes.
    pub fn console_panes(&self) -> impl Iterator<Item = &Arc<dyn ConsolePane>> {
        self.consoles.iter()
    }

    /// Remove every contribution installed by the extension with `id`,
    /// returning how many entries were swept.
    pub fn remove_extension(&mut self, id: &str) -> usize {
        self.actions.remove_extension(id)
            + self.toolbar.remove_extension(id)
            + self.consoles.remove_extension(id)
    }

    /// Number of registered actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.toolbar.is_empty() && self.consoles.is_empty()
    }
}
