use std::fmt;
use std::sync::Arc;

use ratatui::style::{Color, Style};
use ratatui::text::Span;
use unicode_width::UnicodeWidthChar;

use super::context::ActionContext;

/// Handler invoked when an action fires.
///
/// Handlers receive the host seam through an [`ActionContext`] rather than
/// reaching into ambient state, so the same closure serves menu activation
/// and direct invocation alike.
pub type ActionHandler = Arc<dyn Fn(&mut ActionContext<'_>) + Send + Sync>;

/// A host-level command contributed by an extension.
#[derive(Clone)]
pub struct Action {
    help: String,
    icon: Icon,
    handler: ActionHandler,
}

impl Action {
    /// Create an action from its help text, icon, and handler.
    pub fn new<F>(help: impl Into<String>, icon: Icon, handler: F) -> Self
    where
        F: Fn(&mut ActionContext<'_>) + Send + Sync + 'static,
    {
        Self {
            help: help.into(),
            icon,
            handler: Arc::new(handler),
        }
    }

    #[must_use]
    pub fn help(&self) -> &str {
        &self.help
    }

    #[must_use]
    pub fn icon(&self) -> Icon {
        self.icon
    }

    /// Run the handler against the provided context.
    pub fn invoke(&self, context: &mut ActionContext<'_>) {
        (self.handler)(context);
    }

    /// Clone the underlying handler for use outside the action record.
    #[must_use]
    pub fn handler(&self) -> ActionHandler {
        Arc::clone(&self.handler)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("help", &self.help)
            .field("icon", &self.icon)
            .finish_non_exhaustive()
    }
}

/// Fully qualified action key in `namespace:name` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionName(String);

impl ActionName {
    /// Build the qualified key for `name` under `namespace`.
    #[must_use]
    pub fn qualified(namespace: &str, name: &str) -> Self {
        Self(format!("{namespace}:{name}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Icon shown next to menu entries contributed by extensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Icon {
    glyph: char,
    color: Option<Color>,
}

impl Icon {
    #[must_use]
    pub fn new(glyph: char, color: Option<Color>) -> Self {
        Self { glyph, color }
    }

    /// Create an icon from a `#rrggbb` hex string, falling back to no colour
    /// when the string does not parse.
    #[must_use]
    pub fn from_hex(glyph: char, hex: &str) -> Self {
        Self {
            glyph,
            color: parse_hex_color(hex),
        }
    }

    #[must_use]
    pub fn glyph(&self) -> char {
        self.glyph
    }

    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Render the icon as a span padded to a stable width.
    ///
    /// Padding keeps menu labels aligned whether the glyph occupies one or
    /// two terminal columns.
    #[must_use]
    pub fn to_padded_span(&self) -> Span<'static> {
        let width = self.glyph.width().unwrap_or(1);
        let padding = if width >= 2 { " " } else { "  " };
        let text = format!("{}{}", self.glyph, padding);
        match self.color {
            Some(color) => Span::styled(text, Style::default().fg(color)),
            None => Span::raw(text),
        }
    }
}

fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let red = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let green = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let blue = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(red, green, blue))
}
