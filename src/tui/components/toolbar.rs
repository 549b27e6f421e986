use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::extensions::api::contributions::Dropdown;
use crate::tui::theme::Theme;

const MENU_MAX_WIDTH: u16 = 40;

/// Identifies the open control and the highlighted entry within it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenMenu {
    pub control: usize,
    pub selected: usize,
}

/// Argument bundle for rendering the toolbar row and its open menu.
pub struct ToolbarContext<'a> {
    pub controls: &'a [&'a Dropdown],
    pub focused: usize,
    pub open: Option<OpenMenu>,
    pub area: Rect,
    pub theme: &'a Theme,
}

/// Render the toolbar row with one button per contributed dropdown.
pub fn render_toolbar(frame: &mut Frame, context: ToolbarContext<'_>) {
    let ToolbarContext {
        controls,
        focused,
        open,
        area,
        theme,
    } = context;

    let mut spans = vec![Span::raw(" ")];
    for (index, control) in controls.iter().enumerate() {
        let style = if open.is_some_and(|menu| menu.control == index) || index == focused {
            theme.button_focus_style()
        } else {
            theme.button_style()
        };
        spans.push(Span::styled(button_label(control), style));
        spans.push(Span::raw(" "));
    }

    let row = Paragraph::new(Line::from(spans)).style(theme.toolbar_style());
    frame.render_widget(row, area);
}

/// Render the open dropdown as a popup anchored under its button.
///
/// Must be drawn after the notebook body so the popup sits on top.
pub fn render_dropdown_popup(frame: &mut Frame, context: ToolbarContext<'_>) {
    let ToolbarContext {
        controls,
        open,
        area,
        theme,
        ..
    } = context;
    let Some(menu) = open else {
        return;
    };
    let Some(control) = controls.get(menu.control) else {
        return;
    };
    if control.items().is_empty() {
        return;
    }

    let frame_area = frame.area();
    let popup = popup_area(controls, menu.control, area, frame_area);
    if popup.width == 0 || popup.height == 0 {
        return;
    }

    let items: Vec<ListItem> = control
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let mut spans = vec![Span::raw(" ")];
            if let Some(icon) = item.icon() {
                spans.push(icon.to_padded_span());
            }
            spans.push(Span::raw(item.label().to_string()));
            let style = if index == menu.selected {
                theme.menu_highlight_style()
            } else {
                theme.menu_style()
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.menu_style())
            .title(control.title()),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(list, popup);
}

fn button_label(control: &Dropdown) -> String {
    format!(" {} \u{25be} ", control.button_label())
}

/// X origin of the button at `index`, mirroring the span walk in
/// [`render_toolbar`].
fn button_origin(controls: &[&Dropdown], index: usize) -> u16 {
    let mut x = 1u16;
    for control in controls.iter().take(index) {
        x = x.saturating_add(button_label(control).width() as u16 + 1);
    }
    x
}

fn popup_area(controls: &[&Dropdown], index: usize, toolbar: Rect, frame_area: Rect) -> Rect {
    let control = controls[index];

    let content_width = control
        .items()
        .iter()
        .map(|item| {
            let icon_width = if item.icon().is_some() { 3 } else { 0 };
            item.label().width() as u16 + icon_width
        })
        .max()
        .unwrap_or(0)
        .max(control.title().width() as u16);
    let width = (content_width + 4)
        .min(MENU_MAX_WIDTH)
        .min(frame_area.width);
    let height = (control.items().len() as u16 + 2).min(frame_area.height.saturating_sub(1));

    let mut x = toolbar.x.saturating_add(button_origin(controls, index));
    if x.saturating_add(width) > frame_area.right() {
        x = frame_area.right().saturating_sub(width);
    }
    let y = toolbar.y.saturating_add(1);

    Rect {
        x,
        y,
        width,
        height,
    }
}
