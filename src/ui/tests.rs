use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Terminal, backend::TestBackend};

use super::App;
use crate::notebook::{Notebook, Visibility};

fn sample_app() -> App {
    App::new(Notebook::sample())
}

fn draw_to_string(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal =
        Terminal::new(TestBackend::new(width, height)).expect("create test terminal");
    terminal.draw(|frame| app.draw(frame)).expect("draw frame");
    terminal.backend().to_string()
}

#[test]
fn toolbar_shows_the_language_menu_button() {
    let mut app = sample_app();
    assert_eq!(app.catalog().dropdown_count(), 1);

    let view = draw_to_string(&mut app, 80, 30);
    assert!(
        view.contains("Language \u{25be}"),
        "toolbar button missing from:\n{view}"
    );
}

#[test]
fn enter_opens_the_focused_dropdown() {
    let mut app = sample_app();
    app.handle_key(KeyEvent::from(KeyCode::Enter));
    assert!(app.open_dropdown.is_some(), "enter should open the menu");

    let view = draw_to_string(&mut app, 80, 30);
    assert!(
        view.contains("Switch Language"),
        "menu title missing from:\n{view}"
    );
    assert!(
        view.contains("Deutsch"),
        "menu entries missing from:\n{view}"
    );
}

#[test]
fn deutsch_keybinding_hides_english_cells() {
    let mut app = sample_app();
    app.set_animate(false);
    app.handle_key(KeyEvent::from(KeyCode::Char('d')));
    app.advance_transitions();

    let view = draw_to_string(&mut app, 80, 30);
    assert!(
        view.contains("deutsche Leser"),
        "german cell missing from:\n{view}"
    );
    assert!(
        !view.contains("English readers"),
        "english cell still rendered in:\n{view}"
    );
    assert!(
        view.contains("language tag stay put"),
        "untagged cell missing from:\n{view}"
    );
}

#[test]
fn menu_activation_matches_the_keybinding() {
    let mut app = sample_app();
    app.handle_key(KeyEvent::from(KeyCode::Enter));
    app.handle_key(KeyEvent::from(KeyCode::Down));
    app.handle_key(KeyEvent::from(KeyCode::Enter));

    assert!(app.open_dropdown.is_none(), "activation closes the menu");
    let visibilities: Vec<Visibility> = app
        .notebook
        .cells()
        .iter()
        .map(|cell| cell.presentation.visibility())
        .collect();
    assert_eq!(
        visibilities,
        vec![
            Visibility::Visible,
            Visibility::Hidden,
            Visibility::Hidden,
            Visibility::Visible,
            Visibility::Visible,
            Visibility::Visible,
        ]
    );

    while app.has_running_transitions() {
        app.advance_transitions();
    }
    let view = draw_to_string(&mut app, 80, 30);
    assert!(
        !view.contains("English readers"),
        "hidden cell still rendered in:\n{view}"
    );
}

#[test]
fn backtick_toggles_the_log_console() {
    let mut app = sample_app();
    assert!(app.visible_console().is_none());

    app.handle_key(KeyEvent::from(KeyCode::Char('`')));
    assert!(app.visible_console().is_some());
    let view = draw_to_string(&mut app, 80, 30);
    assert!(
        view.contains("Runtime log"),
        "console pane missing from:\n{view}"
    );

    app.handle_key(KeyEvent::from(KeyCode::Char('`')));
    assert!(app.visible_console().is_none());
}

#[test]
fn escape_closes_the_menu_without_quitting() {
    let mut app = sample_app();
    app.handle_key(KeyEvent::from(KeyCode::Enter));
    app.handle_key(KeyEvent::from(KeyCode::Esc));
    assert!(app.open_dropdown.is_none());
    assert!(!app.should_quit());

    app.handle_key(KeyEvent::from(KeyCode::Esc));
    assert!(app.should_quit());
}

#[test]
fn scroll_stays_within_the_notebook() {
    let mut app = sample_app();
    for _ in 0..20 {
        app.handle_key(KeyEvent::from(KeyCode::Down));
    }
    assert_eq!(app.scroll, app.notebook.cells().len() - 1);

    app.handle_key(KeyEvent::from(KeyCode::PageUp));
    assert_eq!(app.scroll, 0);
}

#[test]
fn menu_selection_stays_within_the_items() {
    let mut app = sample_app();
    app.handle_key(KeyEvent::from(KeyCode::Enter));
    for _ in 0..5 {
        app.handle_key(KeyEvent::from(KeyCode::Down));
    }
    assert_eq!(app.open_dropdown.map(|state| state.selected), Some(1));

    for _ in 0..5 {
        app.handle_key(KeyEvent::from(KeyCode::Up));
    }
    assert_eq!(app.open_dropdown.map(|state| state.selected), Some(0));
}

#[test]
fn empty_notebook_renders_a_placeholder() {
    let notebook = Notebook::from_str(
        r#"{"cells": [], "metadata": {}, "nbformat": 4, "nbformat_minor": 5}"#,
    )
    .expect("parse empty notebook");
    let mut app = App::new(notebook);

    let view = draw_to_string(&mut app, 40, 10);
    assert!(view.contains("No cells"), "placeholder missing from:\n{view}");
}
