use std::sync::Arc;

use indexmap::IndexMap;
use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use crate::extensions::api::descriptors::ExtensionDescriptor;
use crate::extensions::api::error::ExtensionCatalogError;
use crate::tui::theme::Theme;

use super::{ContributionInstallContext, ContributionSpecImpl};

/// Behaviour implemented by extension-rendered console panes.
///
/// Panes own their visibility; the host draws the first visible pane into an
/// overlay region each frame and offers it key events before anything else.
pub trait ConsolePane: Send + Sync {
    /// Whether the pane should currently be drawn.
    fn visible(&self) -> bool;

    /// Draw the pane into the reserved overlay area.
    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Offer a key event to the pane; `true` when consumed.
    fn handle_key(&self, key: KeyEvent) -> bool;
}

/// Storage for console panes registered by extensions.
#[derive(Clone, Default)]
pub struct ConsoleStore {
    panes: IndexMap<&'static str, Arc<dyn ConsolePane>>,
}

impl ConsoleStore {
    /// Insert a pane, rejecting a second registration for the same extension.
    pub fn register(
        &mut self,
        id: &'static str,
        pane: Arc<dyn ConsolePane>,
    ) -> Result<(), ExtensionCatalogError> {
        if self.panes.contains_key(id) {
            return Err(ExtensionCatalogError::DuplicateConsole { id });
        }
        self.panes.insert(id, pane);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ConsolePane>> {
        self.panes.values()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    /// Drop the pane contributed by the extension with `id`, returning how
    /// many were removed.
    pub fn remove_extension(&mut self, id: &str) -> usize {
        let before = self.panes.len();
        self.panes.retain(|pane_id, _| *pane_id != id);
        before - self.panes.len()
    }
}

/// Contribution describing a console pane.
#[derive(Clone)]
pub(super) struct ConsoleContribution {
    descriptor: &'static ExtensionDescriptor,
    pane: Arc<dyn ConsolePane>,
}

impl ConsoleContribution {
    pub(super) fn new<P>(descriptor: &'static ExtensionDescriptor, pane: P) -> Self
    where
        P: ConsolePane + 'static,
    {
        Self {
            descriptor,
            pane: Arc::new(pane),
        }
    }
}

impl ContributionSpecImpl for ConsoleContribution {
    fn install(
        &self,
        context: &mut ContributionInstallContext<'_>,
    ) -> Result<(), ExtensionCatalogError> {
        context.register_console(self.descriptor.id, Arc::clone(&self.pane))
    }
}
