pub mod api;
pub mod builtin;

pub use crate::extensions::api::context::{self, ActionContext};
pub use crate::extensions::api::descriptors;
pub use crate::extensions::api::registry::{self, ExtensionCatalog, RegisteredAction};
