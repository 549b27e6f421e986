//! Terminal UI building blocks for rendering `quire`.
//!
//! The submodules here expose reusable widgets and the theme registry used by
//! the higher level UI orchestration code.

pub mod components;
pub mod theme;
