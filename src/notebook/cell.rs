use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::presentation::CellPresentation;

/// The nbformat cell categories the viewer renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Code,
    Markdown,
    Raw,
}

/// Cell metadata with the `tags` sequence pulled out for direct access.
///
/// Every other key survives in `extra` so documents round-trip through the
/// viewer without losing kernel or frontend specific entries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CellMetadata {
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Cell source text.
///
/// nbformat stores sources either as a single string or as a list of line
/// strings with embedded newlines; deserialization accepts both and keeps
/// the joined form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceText(String);

impl SourceText {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of display lines; an empty source still occupies one row.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.0.lines().count().max(1)
    }
}

impl From<String> for SourceText {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SourceText {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for SourceText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Joined(String),
            Lines(Vec<String>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Joined(text) => Self(text),
            Raw::Lines(lines) => Self(lines.concat()),
        })
    }
}

/// A single notebook cell plus its host-side presentation handle.
#[derive(Debug, Clone, Deserialize)]
pub struct Cell {
    #[serde(rename = "cell_type")]
    pub kind: CellKind,
    #[serde(default)]
    pub metadata: CellMetadata,
    #[serde(default)]
    pub source: SourceText,
    #[serde(default)]
    pub execution_count: Option<u32>,
    #[serde(skip)]
    pub presentation: CellPresentation,
}

impl Cell {
    #[must_use]
    pub fn code(source: impl Into<SourceText>) -> Self {
        Self::new(CellKind::Code, source)
    }

    #[must_use]
    pub fn markdown(source: impl Into<SourceText>) -> Self {
        Self::new(CellKind::Markdown, source)
    }

    #[must_use]
    pub fn raw(source: impl Into<SourceText>) -> Self {
        Self::new(CellKind::Raw, source)
    }

    fn new(kind: CellKind, source: impl Into<SourceText>) -> Self {
        Self {
            kind,
            metadata: CellMetadata::default(),
            source: source.into(),
            execution_count: None,
            presentation: CellPresentation::default(),
        }
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metadata.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_execution_count(mut self, count: u32) -> Self {
        self.execution_count = Some(count);
        self
    }

    /// The cell's language tags, if the metadata carries a `tags` sequence.
    #[must_use]
    pub fn tags(&self) -> Option<&[String]> {
        self.metadata.tags.as_deref()
    }
}
