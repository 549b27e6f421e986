use indexmap::IndexMap;

use crate::extensions::api::action::{ActionHandler, Icon};
use crate::extensions::api::context::ActionContext;
use crate::extensions::api::descriptors::ExtensionDescriptor;
use crate::extensions::api::error::ExtensionCatalogError;

use super::{ContributionInstallContext, ContributionSpecImpl};

/// A labelled menu entry bound to a handler.
#[derive(Clone)]
pub struct DropdownItem {
    id: String,
    label: String,
    icon: Option<Icon>,
    handler: ActionHandler,
}

impl DropdownItem {
    /// Create an entry from its element id, display label, and handler.
    pub fn new<F>(id: impl Into<String>, label: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut ActionContext<'_>) + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            handler: std::sync::Arc::new(handler),
        }
    }

    /// Attach an icon shown ahead of the label in the open menu.
    #[must_use]
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn icon(&self) -> Option<Icon> {
        self.icon
    }

    /// Clone the entry's handler.
    #[must_use]
    pub fn handler(&self) -> ActionHandler {
        std::sync::Arc::clone(&self.handler)
    }

    /// Run the entry's handler against the provided context.
    pub fn activate(&self, context: &mut ActionContext<'_>) {
        (self.handler)(context);
    }
}

/// A dropdown control appended to the host toolbar.
///
/// The control is assembled once at registration time and immutable after
/// install; the host renders the button and, while open, the item list.
#[derive(Clone)]
pub struct Dropdown {
    id: String,
    button_label: String,
    title: String,
    items: Vec<DropdownItem>,
}

impl Dropdown {
    /// Create an empty dropdown with the given control id, button label, and
    /// hover title.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        button_label: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            button_label: button_label.into(),
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Append a menu entry.
    #[must_use]
    pub fn with_item(mut self, item: DropdownItem) -> Self {
        self.items.push(item);
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn button_label(&self) -> &str {
        &self.button_label
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn items(&self) -> &[DropdownItem] {
        &self.items
    }
}

/// Descriptor and control pair stored by the catalog.
#[derive(Clone)]
pub struct RegisteredDropdown {
    descriptor: &'static ExtensionDescriptor,
    control: Dropdown,
}

impl RegisteredDropdown {
    #[must_use]
    pub fn new(descriptor: &'static ExtensionDescriptor, control: Dropdown) -> Self {
        Self { descriptor, control }
    }

    #[must_use]
    pub fn descriptor(&self) -> &'static ExtensionDescriptor {
        self.descriptor
    }

    #[must_use]
    pub fn control(&self) -> &Dropdown {
        &self.control
    }
}

/// Storage backing contributed toolbar controls, in registration order.
#[derive(Clone, Default)]
pub struct ToolbarStore {
    controls: IndexMap<String, RegisteredDropdown>,
}

impl ToolbarStore {
    /// Insert a dropdown, rejecting duplicate control ids.
    pub fn register(&mut self, registered: RegisteredDropdown) -> Result<(), ExtensionCatalogError> {
        let id = registered.control().id().to_string();
        if self.controls.contains_key(&id) {
            return Err(ExtensionCatalogError::DuplicateControl { id });
        }
        self.controls.insert(id, registered);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RegisteredDropdown> {
        self.controls.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredDropdown> {
        self.controls.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Drop every control contributed by the extension with `id`, returning
    /// how many were removed.
    pub fn remove_extension(&mut self, id: &str) -> usize {
        let before = self.controls.len();
        self.controls
            .retain(|_, registered| registered.descriptor().id != id);
        before - self.controls.len()
    }
}

/// Contribution describing a toolbar dropdown.
#[derive(Clone)]
pub(super) struct DropdownContribution {
    descriptor: &'static ExtensionDescriptor,
    control: Dropdown,
}

impl DropdownContribution {
    pub(super) fn new(descriptor: &'static ExtensionDescriptor, control: Dropdown) -> Self {
        Self { descriptor, control }
    }
}

impl ContributionSpecImpl for DropdownContribution {
    fn install(
        &self,
        context: &mut ContributionInstallContext<'_>,
    ) -> Result<(), ExtensionCatalogError> {
        let registered = RegisteredDropdown::new(self.descriptor, self.control.clone());
        context.register_dropdown(registered)
    }
}
