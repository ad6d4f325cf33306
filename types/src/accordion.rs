//! Single-expansion accordion over summary/detail row pairs.
//!
//! At most one detail row is open at a time. Clicking the open row closes it,
//! clicking any other row closes everything and opens that one.

/// A list of rows that can be expanded and collapsed.
///
/// Implementations decide what "expanded" looks like (a class on the detail
/// row and its owner in the DOM, a flag in tests).
pub trait AccordionSurface {
    type Row;

    fn is_expanded(&self, row: &Self::Row) -> bool;

    /// Collapse every expanded row, wherever it is.
    fn collapse_all(&mut self);

    fn expand(&mut self, row: &Self::Row);
}

/// Toggle `row`, closing everything else first.
///
/// Returns whether `row` is expanded afterwards.
pub fn toggle_exclusive<S: AccordionSurface>(surface: &mut S, row: &S::Row) -> bool {
    let was_expanded = surface.is_expanded(row);
    surface.collapse_all();
    if !was_expanded {
        surface.expand(row);
    }
    !was_expanded
}
