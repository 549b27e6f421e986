use crate::notebook::Cell;

/// Shared inputs handed to action handlers when they are invoked.
///
/// The context struct is the only way handlers reach host state. Wrapping
/// the cell slice keeps handler signatures stable if more surface is exposed
/// later, and replaces the ambient globals a notebook front-end would
/// otherwise provide.
pub struct ActionContext<'a> {
    cells: &'a mut [Cell],
}

impl<'a> ActionContext<'a> {
    /// Create a context over the live cell list.
    #[must_use]
    pub fn new(cells: &'a mut [Cell]) -> Self {
        Self { cells }
    }

    /// Read access to the notebook's cells.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        self.cells
    }

    /// Mutable access to the notebook's cells.
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        self.cells
    }
}
