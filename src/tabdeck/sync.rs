//! The reorder + cross-tab synchronization algorithm.
//!
//! A move happens on the first tab (id 0) and is mirrored into the second
//! tab (id 1) by card identity: find the card with the same id, pull it
//! out, and re-insert it at the moved-to index, clamped to the second
//! tab's own length. Everything here is pure list splicing; invalid input
//! degrades to a no-op, never an error.

use crate::model::{CardId, Tab, FIRST_TAB_ID, SECOND_TAB_ID};

/// Move the card at `from` to `to` within `primary`, then relocate the
/// matching card in `secondary`.
///
/// No-op when `primary` is absent, `from == to`, or either index is out
/// of range for the primary's current length. The removal happens before
/// the insertion, so with `to > from` the card lands exactly at `to` in
/// the shortened list, not one past it.
pub fn move_card(
    primary: Option<&mut Tab>,
    secondary: Option<&mut Tab>,
    from: usize,
    to: usize,
) {
    let Some(primary) = primary else {
        return;
    };
    let len = primary.cards.len();
    if from == to || from >= len || to >= len {
        return;
    }
    let card = primary.cards.remove(from);
    let card_id = card.id;
    primary.cards.insert(to, card);

    if let Some(secondary) = secondary {
        mirror_card(secondary, card_id, to);
    }
}

/// Relocate the card with `card_id` in `tab` to `to`, clamped against the
/// tab's post-removal length. No-op if the card is not present.
fn mirror_card(tab: &mut Tab, card_id: CardId, to: usize) {
    let Some(pos) = tab.cards.iter().position(|card| card.id == card_id) else {
        return;
    };
    let card = tab.cards.remove(pos);
    let target = to.min(tab.cards.len());
    tab.cards.insert(target, card);
}

/// Disjoint mutable borrows of the id-0 and id-1 tabs.
///
/// Returned as (first, second) regardless of the order the tabs appear in
/// the slice — the seed data lists them inverted.
pub fn first_and_second(tabs: &mut [Tab]) -> (Option<&mut Tab>, Option<&mut Tab>) {
    let mut first = None;
    let mut second = None;
    for tab in tabs {
        match tab.id {
            FIRST_TAB_ID => first = Some(tab),
            SECOND_TAB_ID => second = Some(tab),
            _ => {}
        }
    }
    (first, second)
}
