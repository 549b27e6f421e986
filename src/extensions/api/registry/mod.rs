mod catalog;
mod registered_action;

pub use catalog::ExtensionCatalog;
pub use registered_action::RegisteredAction;

#[cfg(test)]
mod tests;
