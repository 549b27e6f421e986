//! Notebook document model owned by the host environment.
//!
//! Cells are loaded from Jupyter nbformat JSON. Extensions only ever read
//! `metadata.tags` and drive each cell's [`CellPresentation`] handle; the
//! rest of the document is carried through untouched.

mod cell;
mod document;
mod presentation;

pub use cell::{Cell, CellKind, CellMetadata, SourceText};
pub use document::Notebook;
pub use presentation::{CellPresentation, Transition, Visibility};
