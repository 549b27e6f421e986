use thiserror::Error;

use super::action::ActionName;

/// Errors surfaced while installing contributions into, or invoking actions
/// on, the extension catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtensionCatalogError {
    /// An extension attempted to register a qualified action name that is
    /// already taken.
    #[error("action '{name}' is already registered")]
    DuplicateAction { name: ActionName },

    /// An extension attempted to register a toolbar control id that is
    /// already present.
    #[error("toolbar control '{id}' is already registered")]
    DuplicateControl { id: String },

    /// An extension attempted to register a second console pane.
    #[error("console pane for extension '{id}' is already registered")]
    DuplicateConsole { id: &'static str },

    /// An action was invoked under a name with no registered handler.
    #[error("no action registered under '{name}'")]
    UnknownAction { name: ActionName },
}
