//! Extension API surface.
//!
//! Extensions package up [`Contribution`]s (actions, toolbar dropdowns,
//! console panes) and install them into the [`ExtensionCatalog`] owned by the
//! running app. Handlers reach host state only through [`ActionContext`].

pub mod action;
pub mod context;
pub mod contributions;
pub mod descriptors;
pub mod error;
pub mod registry;

pub use action::{Action, ActionHandler, ActionName, Icon};
pub use context::ActionContext;
pub use contributions::{ConsolePane, Contribution, Dropdown, DropdownItem, ExtensionPackage};
pub use descriptors::ExtensionDescriptor;
pub use error::ExtensionCatalogError;
pub use registry::{ExtensionCatalog, RegisteredAction};
