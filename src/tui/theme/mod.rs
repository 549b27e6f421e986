//! Colour themes for the viewer chrome and notebook body.

mod light;
mod slate;

use ratatui::style::Style;

pub use light::LIGHT;
pub use slate::SLATE;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub toolbar: Style,
    pub button: Style,
    pub button_focus: Style,
    pub menu: Style,
    pub menu_highlight: Style,
    pub cell_border: Style,
    pub caption: Style,
    pub text: Style,
    pub empty: Style,
    pub highlight: Style,
}

impl Theme {
    #[must_use]
    pub fn toolbar_style(&self) -> Style {
        self.toolbar
    }

    #[must_use]
    pub fn button_style(&self) -> Style {
        self.button
    }

    #[must_use]
    pub fn button_focus_style(&self) -> Style {
        self.button_focus
    }

    #[must_use]
    pub fn menu_style(&self) -> Style {
        self.menu
    }

    #[must_use]
    pub fn menu_highlight_style(&self) -> Style {
        self.menu_highlight
    }

    #[must_use]
    pub fn cell_border_style(&self) -> Style {
        self.cell_border
    }

    #[must_use]
    pub fn caption_style(&self) -> Style {
        self.caption
    }

    #[must_use]
    pub fn text_style(&self) -> Style {
        self.text
    }

    #[must_use]
    pub fn empty_style(&self) -> Style {
        self.empty
    }

    #[must_use]
    pub fn highlight_style(&self) -> Style {
        self.highlight
    }
}

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
    pub name: &'static str,
    pub theme: Theme,
}

impl ThemeDefinition {
    pub const fn new(name: &'static str, theme: Theme) -> Self {
        Self { name, theme }
    }
}

const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[slate::DEFINITION, light::DEFINITION];

/// Names of the built-in themes, in presentation order.
#[must_use]
pub fn names() -> Vec<&'static str> {
    BUILT_IN_DEFINITIONS
        .iter()
        .map(|definition| definition.name)
        .collect()
}

/// Look up a built-in theme by name, ignoring ASCII case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    BUILT_IN_DEFINITIONS
        .iter()
        .find(|definition| definition.name.eq_ignore_ascii_case(name))
        .map(|definition| definition.theme)
}

/// The theme used when configuration does not pick one.
#[must_use]
pub fn default_theme() -> Theme {
    SLATE
}
