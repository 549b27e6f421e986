mod actions;
mod console;
mod toolbar;

use std::sync::Arc;

use crate::extensions::api::action::Action;
use crate::extensions::api::descriptors::ExtensionDescriptor;
use crate::extensions::api::error::ExtensionCatalogError;
use crate::extensions::api::registry::RegisteredAction;

pub use actions::ActionStore;
pub use console::{ConsolePane, ConsoleStore};
pub use toolbar::{Dropdown, DropdownItem, RegisteredDropdown, ToolbarStore};

/// Trait implemented by concrete contribution specifications.
trait ContributionSpec: Send + Sync {
    /// Install the contribution into the provided context.
    fn install(
        &self,
        context: &mut ContributionInstallContext<'_>,
    ) -> Result<(), ExtensionCatalogError>;

    /// Clone the contribution specification.
    fn clone_spec(&self) -> Arc<dyn ContributionSpec>;
}

impl<T> ContributionSpec for T
where
    T: ContributionSpecImpl + Clone + 'static,
{
    fn install(
        &self,
        context: &mut ContributionInstallContext<'_>,
    ) -> Result<(), ExtensionCatalogError> {
        <T as ContributionSpecImpl>::install(self, context)
    }

    fn clone_spec(&self) -> Arc<dyn ContributionSpec> {
        Arc::new(self.clone())
    }
}

/// Internal trait implemented for each contribution type.
trait ContributionSpecImpl: Send + Sync {
    fn install(
        &self,
        context: &mut ContributionInstallContext<'_>,
    ) -> Result<(), ExtensionCatalogError>;
}

/// A clonable contribution provided by a package.
#[derive(Clone)]
pub struct Contribution(Arc<dyn ContributionSpec>);

impl Contribution {
    fn new(spec: Arc<dyn ContributionSpec>) -> Self {
        Self(spec)
    }

    /// Create an action contribution registered under the descriptor's
    /// namespace.
    pub fn action(
        descriptor: &'static ExtensionDescriptor,
        name: &'static str,
        action: Action,
    ) -> Self {
        Self::from_spec(actions::ActionContribution::new(descriptor, name, action))
    }

    /// Create a toolbar dropdown contribution.
    pub fn dropdown(descriptor: &'static ExtensionDescriptor, control: Dropdown) -> Self {
        Self::from_spec(toolbar::DropdownContribution::new(descriptor, control))
    }

    /// Create a console pane contribution.
    pub fn console<P>(descriptor: &'static ExtensionDescriptor, pane: P) -> Self
    where
        P: ConsolePane + 'static,
    {
        Self::from_spec(console::ConsoleContribution::new(descriptor, pane))
    }

    fn from_spec<T>(spec: T) -> Self
    where
        T: ContributionSpec + 'static,
    {
        Self::new(spec.clone_spec())
    }

    pub(crate) fn install(
        &self,
        context: &mut ContributionInstallContext<'_>,
    ) -> Result<(), ExtensionCatalogError> {
        self.0.install(context)
    }
}

/// Collection of contributions provided by an extension package.
pub trait ExtensionPackage: Send + Sync {
    type Contributions<'a>: IntoIterator<Item = Contribution>
    where
        Self: 'a;

    fn contributions(&self) -> Self::Contributions<'_>;
}

/// Mutable view into the catalog used while installing contributions.
pub struct ContributionInstallContext<'a> {
    actions: &'a mut ActionStore,
    toolbar: &'a mut ToolbarStore,
    consoles: &'a mut ConsoleStore,
}

impl<'a> ContributionInstallContext<'a> {
    pub(crate) fn new(
        actions: &'a mut ActionStore,
        toolbar: &'a mut ToolbarStore,
        consoles: &'a mut ConsoleStore,
    ) -> Self {
        Self {
            actions,
            toolbar,
            consoles,
        }
    }

    /// Register an action, rejecting duplicate qualified names.
    pub fn register_action(
        &mut self,
        registered: RegisteredAction,
    ) -> Result<(), ExtensionCatalogError> {
        self.actions.ensure_available(registered.name())?;
        self.actions.insert(registered);
        Ok(())
    }

    /// Register a toolbar dropdown, rejecting duplicate control ids.
    pub fn register_dropdown(
        &mut self,
        registered: RegisteredDropdown,
    ) -> Result<(), ExtensionCatalogError> {
        self.toolbar.register(registered)
    }

    /// Register a console pane; at most one per extension.
    pub fn register_console(
        &mut self,
        id: &'static str,
        pane: Arc<dyn ConsolePane>,
    ) -> Result<(), ExtensionCatalogError> {
        self.consoles.register(id, pane)
    }
}
