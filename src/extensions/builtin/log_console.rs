use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::LevelFilter;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Frame, layout::Rect, widgets::Clear};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerSmartWidget, TuiWidgetEvent, TuiWidgetState};

use crate::extensions::api::contributions::ConsolePane;
use crate::extensions::api::{
    Action, ActionName, Contribution, ExtensionDescriptor, ExtensionPackage, Icon,
};
use crate::logging;
use crate::tui::theme::Theme;

pub static LOG_CONSOLE_DESCRIPTOR: ExtensionDescriptor = ExtensionDescriptor {
    id: "console",
    title: "Log console",
    namespace: "console",
};

pub fn descriptor() -> &'static ExtensionDescriptor {
    &LOG_CONSOLE_DESCRIPTOR
}

/// Qualified name of the action that shows or hides the console.
#[must_use]
pub fn toggle_action() -> ActionName {
    ActionName::qualified(LOG_CONSOLE_DESCRIPTOR.namespace, "toggle")
}

/// Widget state shared between the toggle action and the rendered pane.
pub struct ConsoleState {
    widget: TuiWidgetState,
    visible: AtomicBool,
}

impl ConsoleState {
    pub fn new() -> Self {
        let widget = TuiWidgetState::new().set_default_display_level(LevelFilter::Debug);
        Self {
            widget,
            visible: AtomicBool::new(false),
        }
    }

    pub fn widget(&self) -> &TuiWidgetState {
        &self.widget
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::Relaxed)
    }

    pub fn toggle(&self) {
        self.visible.fetch_xor(true, Ordering::Relaxed);
    }

    pub fn handle_key(&self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        let event = match key.code {
            KeyCode::Char(' ') => Some(TuiWidgetEvent::SpaceKey),
            KeyCode::Char('h') | KeyCode::Char('H') => Some(TuiWidgetEvent::HideKey),
            KeyCode::Char('f') | KeyCode::Char('F') => Some(TuiWidgetEvent::FocusKey),
            KeyCode::Char('+') => Some(TuiWidgetEvent::PlusKey),
            KeyCode::Char('-') => Some(TuiWidgetEvent::MinusKey),
            KeyCode::Up => Some(TuiWidgetEvent::UpKey),
            KeyCode::Down => Some(TuiWidgetEvent::DownKey),
            KeyCode::Left => Some(TuiWidgetEvent::LeftKey),
            KeyCode::Right => Some(TuiWidgetEvent::RightKey),
            KeyCode::PageUp => Some(TuiWidgetEvent::PrevPageKey),
            KeyCode::PageDown => Some(TuiWidgetEvent::NextPageKey),
            KeyCode::Esc => Some(TuiWidgetEvent::EscapeKey),
            _ => None,
        };

        if let Some(event) = event {
            self.widget.transition(event);
            return true;
        }

        false
    }
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
struct LogConsolePane {
    state: Arc<ConsoleState>,
}

impl LogConsolePane {
    fn new(state: Arc<ConsoleState>) -> Self {
        Self { state }
    }
}

impl ConsolePane for LogConsolePane {
    fn visible(&self) -> bool {
        self.state.is_visible()
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        frame.render_widget(Clear, area);
        if area.width == 0 || area.height == 0 {
            return;
        }

        logging::initialize();
        tui_logger::move_events();

        let widget = TuiLoggerSmartWidget::default()
            .title_log("Runtime log")
            .title_target("Targets")
            .highlight_style(theme.highlight_style())
            .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
            .state(self.state.widget());
        frame.render_widget(widget, area);
    }

    fn handle_key(&self, key: KeyEvent) -> bool {
        self.state.handle_key(key)
    }
}

fn console_icon() -> Icon {
    Icon::new('\u{f120}', None)
}

pub struct LogConsolePackage {
    contributions: [Contribution; 2],
}

impl LogConsolePackage {
    fn new() -> Self {
        let state = Arc::new(ConsoleState::new());
        let toggle_state = Arc::clone(&state);
        let toggle = Action::new(
            "Show or hide the runtime log console",
            console_icon(),
            move |_context| toggle_state.toggle(),
        );

        let contributions = [
            Contribution::console(descriptor(), LogConsolePane::new(state)),
            Contribution::action(descriptor(), "toggle", toggle),
        ];
        Self { contributions }
    }
}

impl Default for LogConsolePackage {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtensionPackage for LogConsolePackage {
    type Contributions<'a>
        = std::array::IntoIter<Contribution, 2>
    where
        Self: 'a;

    fn contributions(&self) -> Self::Contributions<'_> {
        self.contributions.clone().into_iter()
    }
}

#[must_use]
pub fn bundle() -> LogConsolePackage {
    LogConsolePackage::default()
}
