use ratatui::style::{Color, Modifier, Style};

use super::{Theme, ThemeDefinition};

pub const SLATE: Theme = Theme {
    toolbar: Style::new().bg(Color::Rgb(15, 23, 42)),
    button: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .bg(Color::Rgb(30, 41, 59)),
    button_focus: Style::new()
        .fg(Color::Rgb(250, 204, 21))
        .bg(Color::Rgb(30, 41, 59))
        .add_modifier(Modifier::BOLD),
    menu: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .bg(Color::Rgb(30, 41, 59)),
    menu_highlight: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .bg(Color::Rgb(250, 204, 21))
        .add_modifier(Modifier::BOLD),
    cell_border: Style::new().fg(Color::Rgb(71, 85, 105)),
    caption: Style::new().fg(Color::LightCyan),
    text: Style::new().fg(Color::Rgb(226, 232, 240)),
    empty: Style::new().fg(Color::DarkGray),
    highlight: Style::new()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD),
};

pub(super) const DEFINITION: ThemeDefinition = ThemeDefinition::new("slate", SLATE);
