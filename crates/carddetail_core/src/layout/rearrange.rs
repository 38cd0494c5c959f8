//! Drag-and-drop rearrangement of a content order.
//!
//! # Responsibility
//! - Remove the dragged block from its old slot.
//! - Insert it above, below, or into the row of the drop target.
//!
//! # Invariants
//! - The multiset of block ids is preserved for every resolvable move.
//! - Groups emptied by the removal are dropped; groups left with one member
//!   collapse to a single slot.
//! - Slots not involved in the move keep their relative order.

use crate::model::content_order::{BlockId, ContentOrder, Slot};
use crate::model::coordinate::{Coordinate, MoveIntent, MoveRequest, PlacedBlock};
use log::debug;

/// Computes the content order that results from `request`.
///
/// Returns a clone of `order` when the source is dropped onto itself or
/// when either block cannot be found.
pub fn rearrange(order: &ContentOrder, request: &MoveRequest) -> ContentOrder {
    let source_id = &request.source.block_id;
    let destination_id = &request.destination.block_id;

    if request.is_self_move() {
        debug!(
            "event=content_rearrange module=layout status=noop reason=self_move intent={}",
            request.intent.as_str()
        );
        return order.clone();
    }

    let (Some(source_at), Some(destination_at)) =
        (order.locate(source_id), order.locate(destination_id))
    else {
        debug!(
            "event=content_rearrange module=layout status=noop reason=block_not_found intent={}",
            request.intent.as_str()
        );
        return order.clone();
    };

    log_coordinate_drift(order, &request.source, source_at);
    log_coordinate_drift(order, &request.destination, destination_at);

    let left_of_destination_in_same_row =
        source_at.0 == destination_at.0 && source_at.1 < destination_at.1;

    let mut slots = order.slots().to_vec();
    remove_block(&mut slots, source_at.0, source_id);

    let Some(target_slot) = slots
        .iter()
        .position(|slot| slot.position_of(destination_id).is_some())
    else {
        slots.push(Slot::Single(source_id.clone()));
        return ContentOrder::new(slots);
    };

    match request.intent {
        MoveIntent::AboveRow => slots.insert(target_slot, Slot::Single(source_id.clone())),
        MoveIntent::BelowRow => slots.insert(target_slot + 1, Slot::Single(source_id.clone())),
        MoveIntent::MergeIntoRow => {
            let column = merge_column(
                &request.destination.coordinate,
                left_of_destination_in_same_row,
            );
            merge_into(&mut slots[target_slot], source_id.clone(), column);
        }
    }

    debug!(
        "event=content_rearrange module=layout status=ok intent={} slots_before={} slots_after={}",
        request.intent.as_str(),
        order.len(),
        slots.len()
    );
    ContentOrder::new(slots)
}

/// Column inside the destination row where the source lands.
///
/// The source lands right of the drop target. A destination outside any
/// row counts as column `0` of the row it is about to become.
fn merge_column(destination: &Coordinate, shift_left: bool) -> i64 {
    let mut column = if destination.is_in_row() {
        destination.column
    } else {
        0
    };
    if shift_left {
        column = column.saturating_sub(1);
    }
    column.saturating_add(1)
}

fn remove_block(slots: &mut Vec<Slot>, index: usize, id: &BlockId) {
    let remaining = match &mut slots[index] {
        Slot::Single(_) => 0,
        Slot::Group(members) => {
            if let Some(position) = members.iter().position(|member| member == id) {
                members.remove(position);
            }
            members.len()
        }
    };

    match remaining {
        0 => {
            slots.remove(index);
        }
        1 => {
            let only = match &slots[index] {
                Slot::Group(members) => members.first().cloned(),
                Slot::Single(_) => None,
            };
            if let Some(only) = only {
                slots[index] = Slot::Single(only);
            }
        }
        _ => {}
    }
}

fn merge_into(slot: &mut Slot, id: BlockId, column: i64) {
    let mut members = match std::mem::replace(slot, Slot::Group(Vec::new())) {
        Slot::Single(block) => vec![block],
        Slot::Group(blocks) => blocks,
    };
    let index = usize::try_from(column.max(0))
        .unwrap_or(usize::MAX)
        .min(members.len());
    members.insert(index, id);
    *slot = Slot::Group(members);
}

fn log_coordinate_drift(order: &ContentOrder, placed: &PlacedBlock, located: (usize, usize)) {
    let expected = match &order.slots()[located.0] {
        Slot::Group(_) => Coordinate::in_row(located.0, located.1 as i64),
        Slot::Single(_) => Coordinate::top_level(located.0 as i64),
    };
    if expected != placed.coordinate {
        debug!(
            "event=coordinate_mismatch module=layout status=ok drift=true reported_row={:?} reported_column={} located_row={:?} located_column={}",
            placed.coordinate.row, placed.coordinate.column, expected.row, expected.column
        );
    }
}
