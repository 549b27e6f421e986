//! Core crate exports for building and running the `quire` notebook viewer.
//!
//! The root module primarily re-exports types from the notebook, UI, and
//! extension subsystems so that embedders can configure the application
//! without digging through the module hierarchy.

pub mod app_dirs;
pub mod extensions;
pub mod logging;
pub mod notebook;
pub mod tui;
pub mod ui;

pub use ui::{App, run};

pub use crate::extensions::api::{
    Action, ActionContext, ActionName, Dropdown, DropdownItem, ExtensionCatalog,
    ExtensionCatalogError, ExtensionDescriptor, Icon,
};
pub use crate::notebook::{Cell, CellKind, Notebook, Transition, Visibility};
pub use crate::tui::theme::{Theme, by_name, default_theme, names};
