//! Interactive terminal UI orchestration for the notebook viewer.
//!
//! The submodules implement the event loop, key handling, and the rendering
//! pipeline around the aggregate [`App`] state shared between them.

mod actions;
mod render;
mod runtime;
mod state;

#[cfg(test)]
mod tests;

pub use runtime::run;
pub use state::App;
