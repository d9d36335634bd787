use crate::row::Stripe;
use crate::table::Table;

/// Reassign alternating stripe parity to the visible rows, in document
/// order. Hidden rows keep whatever parity they had; it is never drawn.
/// Safe to call any number of times.
pub fn restripe(table: &mut Table) {
    let mut index = 0usize;
    for row in table.rows_mut() {
        if !row.visible {
            continue;
        }
        row.stripe = if index % 2 == 0 {
            Stripe::Even
        } else {
            Stripe::Odd
        };
        index += 1;
    }
}
