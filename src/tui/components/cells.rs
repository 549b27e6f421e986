use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::notebook::{Cell, CellKind};
use crate::tui::theme::Theme;

/// Argument bundle for rendering the notebook body.
pub struct CellsContext<'a> {
    pub cells: &'a [Cell],
    pub scroll: usize,
    pub area: Rect,
    pub theme: &'a Theme,
}

/// Render cells top to bottom starting at the `scroll`-th cell.
///
/// Cells collapsed to zero height are skipped entirely, so hidden cells take
/// no vertical space. A one row gap separates consecutive cells; the last
/// visible cell is clipped at the bottom edge.
pub fn render_cells(frame: &mut Frame, context: CellsContext<'_>) {
    let CellsContext {
        cells,
        scroll,
        area,
        theme,
    } = context;

    let mut y = area.y;
    for cell in cells.iter().skip(scroll) {
        if y >= area.bottom() {
            break;
        }
        let height = rendered_height(cell);
        if height == 0 {
            continue;
        }
        let height = height.min(area.bottom() - y);
        let rect = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        render_cell(frame, rect, cell, theme);
        y = y.saturating_add(height + 1);
    }
}

/// The cell's natural height scaled by its transition progress.
#[must_use]
pub fn rendered_height(cell: &Cell) -> u16 {
    let natural = natural_height(cell) as f32;
    (natural * cell.presentation.height_factor()).round() as u16
}

fn natural_height(cell: &Cell) -> u16 {
    let lines = cell.source.line_count() as u16;
    match cell.kind {
        // Bordered block adds a row above and below the source.
        CellKind::Code => lines + 2,
        CellKind::Markdown | CellKind::Raw => lines,
    }
}

fn render_cell(frame: &mut Frame, area: Rect, cell: &Cell, theme: &Theme) {
    match cell.kind {
        CellKind::Code => {
            let caption = match cell.execution_count {
                Some(count) => format!(" In [{count}]: "),
                None => " In [ ]: ".to_string(),
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme.cell_border_style())
                .title(Span::styled(caption, theme.caption_style()));
            let body = Paragraph::new(cell.source.as_str())
                .style(theme.text_style())
                .block(block);
            frame.render_widget(body, area);
        }
        CellKind::Markdown => {
            let body = Paragraph::new(cell.source.as_str()).style(theme.text_style());
            frame.render_widget(body, area);
        }
        CellKind::Raw => {
            let body = Paragraph::new(cell.source.as_str()).style(theme.empty_style());
            frame.render_widget(body, area);
        }
    }
}
