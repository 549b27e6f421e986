use ratatui::style::{Color, Modifier, Style};

use super::{Theme, ThemeDefinition};

pub const LIGHT: Theme = Theme {
    toolbar: Style::new().bg(Color::Rgb(226, 232, 240)),
    button: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .bg(Color::Rgb(203, 213, 225)),
    button_focus: Style::new()
        .fg(Color::Rgb(120, 120, 0))
        .bg(Color::Rgb(203, 213, 225))
        .add_modifier(Modifier::BOLD),
    menu: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .bg(Color::Rgb(226, 232, 240)),
    menu_highlight: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .bg(Color::Rgb(120, 120, 0))
        .add_modifier(Modifier::BOLD),
    cell_border: Style::new().fg(Color::Rgb(148, 163, 184)),
    caption: Style::new().fg(Color::Rgb(0, 102, 153)),
    text: Style::new().fg(Color::Rgb(15, 23, 42)),
    empty: Style::new().fg(Color::Rgb(100, 100, 100)),
    highlight: Style::new()
        .fg(Color::Rgb(120, 120, 0))
        .add_modifier(Modifier::BOLD),
};

pub(super) const DEFINITION: ThemeDefinition = ThemeDefinition::new("light", LIGHT);
