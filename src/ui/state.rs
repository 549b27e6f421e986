use std::sync::Arc;

use log::warn;

use crate::extensions::api::{ActionContext, ActionName, ConsolePane, ExtensionCatalog};
use crate::extensions::builtin::register_builtin_extensions;
use crate::notebook::Notebook;
use crate::tui::theme::Theme;

/// Number of cells skipped by a page scroll.
const SCROLL_PAGE: usize = 5;

/// Position within the open toolbar dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct DropdownState {
    pub(crate) control: usize,
    pub(crate) selected: usize,
}

/// Aggregate state for the interactive viewer.
pub struct App {
    pub notebook: Notebook,
    pub theme: Theme,
    pub(crate) catalog: ExtensionCatalog,
    pub(crate) toolbar_focus: usize,
    pub(crate) open_dropdown: Option<DropdownState>,
    pub(crate) scroll: usize,
    pub(crate) animate: bool,
    pub(crate) quit: bool,
}

impl App {
    /// Create an app over `notebook` with the builtin extensions installed.
    #[must_use]
    pub fn new(notebook: Notebook) -> Self {
        crate::logging::initialize();

        let mut catalog = ExtensionCatalog::empty();
        register_builtin_extensions(&mut catalog)
            .expect("builtin extensions must register successfully");

        Self::with_extensions(notebook, catalog)
    }

    /// Create an app over `notebook` using a caller-assembled catalog.
    #[must_use]
    pub fn with_extensions(notebook: Notebook, catalog: ExtensionCatalog) -> Self {
        Self {
            notebook,
            theme: Theme::default(),
            catalog,
            toolbar_focus: 0,
            open_dropdown: None,
            scroll: 0,
            animate: true,
            quit: false,
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Enable or disable transition animation; when disabled, show and hide
    /// settle on the next tick.
    pub fn set_animate(&mut self, animate: bool) {
        self.animate = animate;
    }

    #[must_use]
    pub fn catalog(&self) -> &ExtensionCatalog {
        &self.catalog
    }

    /// Run the handler registered under `name` against the notebook.
    ///
    /// A missing action is logged rather than treated as fatal so a stale
    /// keybinding cannot take the viewer down.
    pub fn invoke_action(&mut self, name: &ActionName) {
        let mut context = ActionContext::new(self.notebook.cells_mut());
        if let Err(err) = self.catalog.invoke(name, &mut context) {
            warn!("action invocation failed: {err}");
        }
    }

    /// Activate the highlighted entry of the open dropdown and close it.
    pub(crate) fn activate_selected(&mut self) {
        let Some(state) = self.open_dropdown.take() else {
            return;
        };
        let handler = self
            .catalog
            .dropdowns()
            .nth(state.control)
            .and_then(|registered| registered.control().items().get(state.selected))
            .map(|item| item.handler());
        if let Some(handler) = handler {
            let mut context = ActionContext::new(self.notebook.cells_mut());
            handler(&mut context);
        }
    }

    /// Advance every cell transition by one tick.
    pub fn advance_transitions(&mut self) {
        let animate = self.animate;
        for cell in self.notebook.cells_mut() {
            if animate {
                cell.presentation.advance();
            } else {
                cell.presentation.snap();
            }
        }
    }

    /// Whether any cell transition is still in flight.
    #[must_use]
    pub fn has_running_transitions(&self) -> bool {
        self.notebook
            .cells()
            .iter()
            .any(|cell| !cell.presentation.is_settled())
    }

    /// The first console pane that wants to be drawn, if any.
    pub(crate) fn visible_console(&self) -> Option<Arc<dyn ConsolePane>> {
        self.catalog
            .console_panes()
            .find(|pane| pane.visible())
            .cloned()
    }

    pub(crate) fn focus_left(&mut self) {
        self.toolbar_focus = self.toolbar_focus.saturating_sub(1);
    }

    pub(crate) fn focus_right(&mut self) {
        let count = self.catalog.dropdown_count();
        if count > 0 {
            self.toolbar_focus = (self.toolbar_focus + 1).min(count - 1);
        }
    }

    pub(crate) fn open_focused(&mut self) {
        if self.toolbar_focus < self.catalog.dropdown_count() {
            self.open_dropdown = Some(DropdownState {
                control: self.toolbar_focus,
                selected: 0,
            });
        }
    }

    pub(crate) fn close_dropdown(&mut self) {
        self.open_dropdown = None;
    }

    fn open_item_count(&self) -> usize {
        self.open_dropdown
            .and_then(|state| self.catalog.dropdowns().nth(state.control))
            .map(|registered| registered.control().items().len())
            .unwrap_or(0)
    }

    pub(crate) fn menu_up(&mut self) {
        if let Some(state) = &mut self.open_dropdown {
            state.selected = state.selected.saturating_sub(1);
        }
    }

    pub(crate) fn menu_down(&mut self) {
        let count = self.open_item_count();
        if count == 0 {
            return;
        }
        if let Some(state) = &mut self.open_dropdown {
            state.selected = (state.selected + 1).min(count - 1);
        }
    }

    pub(crate) fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub(crate) fn scroll_down(&mut self) {
        self.scroll = (self.scroll + 1).min(self.max_scroll());
    }

    pub(crate) fn scroll_page_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(SCROLL_PAGE);
    }

    pub(crate) fn scroll_page_down(&mut self) {
        self.scroll = (self.scroll + SCROLL_PAGE).min(self.max_scroll());
    }

    pub(crate) fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn max_scroll(&self) -> usize {
        self.notebook.cells().len().saturating_sub(1)
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit
    }
}
