use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::App;
use crate::extensions::builtin::{language_switcher, log_console};

impl App {
    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        if let Some(console) = self.visible_console()
            && console.handle_key(key)
        {
            return;
        }

        if self.open_dropdown.is_some() {
            self.handle_menu_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.quit = true;
            }
            KeyCode::Left => {
                self.focus_left();
            }
            KeyCode::Right => {
                self.focus_right();
            }
            KeyCode::Enter => {
                self.open_focused();
            }
            KeyCode::Up => {
                self.scroll_up();
            }
            KeyCode::Down => {
                self.scroll_down();
            }
            KeyCode::PageUp => {
                self.scroll_page_up();
            }
            KeyCode::PageDown => {
                self.scroll_page_down();
            }
            KeyCode::Char('e') => {
                self.invoke_action(&language_switcher::english_action());
            }
            KeyCode::Char('d') => {
                self.invoke_action(&language_switcher::deutsch_action());
            }
            KeyCode::Char('`') => {
                self.invoke_action(&log_console::toggle_action());
            }
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.close_dropdown();
            }
            KeyCode::Up => {
                self.menu_up();
            }
            KeyCode::Down => {
                self.menu_down();
            }
            KeyCode::Enter => {
                self.activate_selected();
            }
            _ => {}
        }
    }
}
