use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
};

use super::App;
use crate::extensions::api::Dropdown;
use crate::tui::components::cells::{CellsContext, render_cells};
use crate::tui::components::toolbar::{
    OpenMenu, ToolbarContext, render_dropdown_popup, render_toolbar,
};

impl App {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        self.clamp_scroll();

        let area = frame.area();
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(area);

        let controls: Vec<&Dropdown> = self
            .catalog
            .dropdowns()
            .map(|registered| registered.control())
            .collect();
        let open = self.open_dropdown.map(|state| OpenMenu {
            control: state.control,
            selected: state.selected,
        });

        render_toolbar(
            frame,
            ToolbarContext {
                controls: &controls,
                focused: self.toolbar_focus,
                open,
                area: layout[0],
                theme: &self.theme,
            },
        );

        let body = layout[1];
        if self.notebook.cells().is_empty() {
            let empty = Paragraph::new("No cells")
                .alignment(Alignment::Center)
                .style(self.theme.empty_style());
            frame.render_widget(empty, body);
        } else {
            render_cells(
                frame,
                CellsContext {
                    cells: self.notebook.cells(),
                    scroll: self.scroll,
                    area: body,
                    theme: &self.theme,
                },
            );
        }

        if let Some(pane) = self.visible_console() {
            pane.render(frame, console_area(body), &self.theme);
        }

        // Drawn last so the popup sits on top of the body and any console.
        if open.is_some() {
            render_dropdown_popup(
                frame,
                ToolbarContext {
                    controls: &controls,
                    focused: self.toolbar_focus,
                    open,
                    area: layout[0],
                    theme: &self.theme,
                },
            );
        }
    }
}

/// Band across the bottom of `body` reserved for a console overlay.
fn console_area(body: Rect) -> Rect {
    let height = body.height.saturating_mul(2) / 5;
    Rect {
        x: body.x,
        y: body.bottom().saturating_sub(height),
        width: body.width,
        height,
    }
}
