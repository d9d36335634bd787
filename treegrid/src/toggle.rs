use log::{debug, trace};

use crate::id::RowId;
use crate::row::Indicator;
use crate::stripe::restripe;
use crate::table::Table;

/// Toggle the subtree below the row that owns `id`'s control.
///
/// State is re-derived from live visibility on every activation: if the
/// first direct child is visible the subtree is collapsed at all depths,
/// otherwise exactly the direct children are shown, each with its own
/// subtree collapsed. Rows before the control row are never touched.
/// Finishes with a stripe refresh over the whole table.
///
/// Returns true if any row's visibility changed. A row with no direct
/// children is left untouched.
pub fn toggle(table: &mut Table, id: &RowId) -> bool {
    let Some(start) = table.index_of(id) else {
        trace!("[toggle] no row with id {id}");
        return false;
    };

    // Only rows after the control row can belong to its subtree.
    let first_child_visible = table.rows()[start + 1..]
        .iter()
        .find(|row| id.is_parent_of(&row.id))
        .map(|row| row.visible);

    let Some(first_child_visible) = first_child_visible else {
        trace!("[toggle] {id} has no children");
        return false;
    };

    if first_child_visible {
        collapse(table, start, id);
    } else {
        expand(table, start, id);
    }
    restripe(table);
    true
}

fn collapse(table: &mut Table, start: usize, id: &RowId) {
    debug!("[toggle] collapsing {id}");
    for row in &mut table.rows_mut()[start + 1..] {
        if id.is_ancestor_of(&row.id) {
            row.visible = false;
        }
    }
    set_indicator(table, start, Indicator::Collapsed);
}

fn expand(table: &mut Table, start: usize, id: &RowId) {
    debug!("[toggle] expanding {id}");
    for row in &mut table.rows_mut()[start + 1..] {
        if id.is_parent_of(&row.id) {
            row.visible = true;
            // Children come back one level at a time.
            if let Some(control) = &mut row.control {
                *control = Indicator::Collapsed;
            }
        }
    }
    set_indicator(table, start, Indicator::Expanded);
}

fn set_indicator(table: &mut Table, index: usize, indicator: Indicator) {
    if let Some(control) = &mut table.rows_mut()[index].control {
        *control = indicator;
    }
}
