use crate::extensions::api::action::{Action, ActionName};
use crate::extensions::api::descriptors::ExtensionDescriptor;

/// Metadata and handler tuple stored by the catalog.
#[derive(Clone)]
pub struct RegisteredAction {
    descriptor: &'static ExtensionDescriptor,
    name: ActionName,
    action: Action,
}

impl RegisteredAction {
    #[must_use]
    pub fn new(descriptor: &'static ExtensionDescriptor, name: ActionName, action: Action) -> Self {
        Self {
            descriptor,
            name,
            action,
        }
    }

    #[must_use]
    pub fn descriptor(&self) -> &'static ExtensionDescriptor {
        self.descriptor
    }

    /// The fully qualified name this action answers to.
    #[must_use]
    pub fn name(&self) -> &ActionName {
        &self.name
    }

    #[must_use]
    pub fn action(&self) -> &Action {
        &self.action
    }
}
