use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::cell::Cell;

/// A parsed nbformat document.
///
/// Only the pieces the viewer needs are modelled; notebook-level metadata is
/// retained as raw JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct Notebook {
    #[serde(default)]
    cells: Vec<Cell>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(default = "default_nbformat")]
    pub nbformat: u32,
    #[serde(default)]
    pub nbformat_minor: u32,
}

fn default_nbformat() -> u32 {
    4
}

impl Notebook {
    /// Parse a notebook from nbformat JSON text.
    pub fn from_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("failed to parse notebook JSON")
    }

    /// Read and parse a notebook file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read notebook file {}", path.display()))?;
        Self::from_str(&text)
            .with_context(|| format!("failed to parse notebook file {}", path.display()))
    }

    /// The bilingual demo document shown when no notebook path is given.
    #[must_use]
    pub fn sample() -> Self {
        let cells = vec![
            Cell::markdown("# Welcome to quire\n\nOpen the Language menu to filter cells by tag."),
            Cell::markdown("## Greetings\n\nHello! This cell is tagged for English readers.")
                .with_tags(["english"]),
            Cell::code("print(\"Hello, world!\")")
                .with_tags(["english"])
                .with_execution_count(1),
            Cell::markdown("## Begruessung\n\nHallo! Diese Zelle ist fuer deutsche Leser markiert.")
                .with_tags(["deutsch"]),
            Cell::code("print(\"Hallo, Welt!\")")
                .with_tags(["deutsch"])
                .with_execution_count(2),
            Cell::markdown("---\n\nCells without a language tag stay put."),
        ];

        Self {
            cells,
            metadata: Map::new(),
            nbformat: 4,
            nbformat_minor: 5,
        }
    }

    /// Read access to the cell list, in document order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable access to the cell list; this is the seam handed to actions.
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}
