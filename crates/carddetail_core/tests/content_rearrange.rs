use carddetail_core::{
    rearrange, BlockId, ContentOrder, Coordinate, MoveIntent, MoveRequest, PlacedBlock, Slot,
};

const INTENTS: [MoveIntent; 3] = [
    MoveIntent::AboveRow,
    MoveIntent::BelowRow,
    MoveIntent::MergeIntoRow,
];

fn order(json: &str) -> ContentOrder {
    serde_json::from_str(json).unwrap()
}

fn placed(order: &ContentOrder, id: &str) -> PlacedBlock {
    let coordinate = order
        .coordinate_of(&BlockId::from(id))
        .unwrap_or(Coordinate::top_level(-1));
    PlacedBlock::new(id, coordinate)
}

fn move_block(
    current: &ContentOrder,
    source: &str,
    destination: &str,
    intent: MoveIntent,
) -> ContentOrder {
    let request = MoveRequest::new(
        placed(current, source),
        placed(current, destination),
        intent,
    );
    rearrange(current, &request)
}

fn sorted_ids(order: &ContentOrder) -> Vec<String> {
    let mut ids: Vec<String> = order.block_ids().map(|id| id.as_str().to_string()).collect();
    ids.sort();
    ids
}

fn fixtures() -> Vec<ContentOrder> {
    vec![
        order(r#"["a","b","c"]"#),
        order(r#"[["a","b"],"c"]"#),
        order(r#"[["a","b"]]"#),
        order(r#"["a",["b","c","d"],"e",["f","g"]]"#),
    ]
}

fn all_moves(current: &ContentOrder) -> Vec<(String, String, MoveIntent)> {
    let ids: Vec<String> = current.block_ids().map(|id| id.as_str().to_string()).collect();
    let mut moves = Vec::new();
    for source in &ids {
        for destination in &ids {
            for intent in INTENTS {
                moves.push((source.clone(), destination.clone(), intent));
            }
        }
    }
    moves
}

#[test]
fn merge_into_existing_row_next_to_target() {
    let current = order(r#"[["a","b"],"c"]"#);
    let result = move_block(&current, "c", "b", MoveIntent::MergeIntoRow);
    assert_eq!(result, order(r#"[["a","b","c"]]"#));
}

#[test]
fn below_row_moves_block_after_destination() {
    let current = order(r#"["a","b","c"]"#);
    let result = move_block(&current, "a", "c", MoveIntent::BelowRow);
    assert_eq!(result, order(r#"["b","c","a"]"#));
}

#[test]
fn above_row_out_of_pair_leaves_two_singles() {
    let current = order(r#"[["a","b"]]"#);
    let result = move_block(&current, "a", "b", MoveIntent::AboveRow);
    assert_eq!(result, order(r#"["a","b"]"#));
}

#[test]
fn self_moves_leave_order_unchanged() {
    for current in fixtures() {
        let ids: Vec<String> = current.block_ids().map(|id| id.as_str().to_string()).collect();
        for id in &ids {
            for intent in INTENTS {
                assert_eq!(move_block(&current, id, id, intent), current);
            }
        }
    }
}

#[test]
fn unknown_ids_leave_order_unchanged() {
    for current in fixtures() {
        for intent in INTENTS {
            assert_eq!(move_block(&current, "missing", "a", intent), current);
            assert_eq!(move_block(&current, "a", "missing", intent), current);
        }
    }
}

#[test]
fn every_move_preserves_block_multiset_and_invariants() {
    for current in fixtures() {
        for (source, destination, intent) in all_moves(&current) {
            let result = move_block(&current, &source, &destination, intent);
            assert_eq!(
                sorted_ids(&result),
                sorted_ids(&current),
                "{source} -> {destination} ({intent:?}) on {current:?}"
            );
            result.validate().unwrap();
        }
    }
}

#[test]
fn row_moves_place_new_single_next_to_destination() {
    for current in fixtures() {
        for (source, destination, intent) in all_moves(&current) {
            if source == destination || intent == MoveIntent::MergeIntoRow {
                continue;
            }
            let result = move_block(&current, &source, &destination, intent);
            let (source_slot, _) = result.locate(&BlockId::from(source.as_str())).unwrap();
            let (destination_slot, _) = result
                .locate(&BlockId::from(destination.as_str()))
                .unwrap();

            assert_eq!(result.slots()[source_slot], Slot::from(source.as_str()));
            let expected = match intent {
                MoveIntent::AboveRow => source_slot + 1,
                _ => source_slot - 1,
            };
            assert_eq!(destination_slot, expected, "{source} -> {destination} ({intent:?})");
        }
    }
}

#[test]
fn merge_never_adds_top_level_slots() {
    for current in fixtures() {
        for (source, destination, _) in all_moves(&current) {
            if source == destination {
                continue;
            }
            let result = move_block(&current, &source, &destination, MoveIntent::MergeIntoRow);
            assert!(result.len() <= current.len());

            let (source_slot, _) = result.locate(&BlockId::from(source.as_str())).unwrap();
            let (destination_slot, _) = result
                .locate(&BlockId::from(destination.as_str()))
                .unwrap();
            assert_eq!(source_slot, destination_slot);
            assert!(result.slots()[source_slot].is_group());
        }
    }
}

#[test]
fn emptied_groups_do_not_persist() {
    let current = order(r#"["a",["b"],"c"]"#);
    let result = move_block(&current, "b", "c", MoveIntent::BelowRow);
    assert_eq!(result, order(r#"["a","c","b"]"#));
}

#[test]
fn untouched_slots_keep_relative_order() {
    let current = order(r#"["a",["b","c","d"],"e",["f","g"]]"#);
    let result = move_block(&current, "c", "f", MoveIntent::AboveRow);
    assert_eq!(result, order(r#"["a",["b","d"],"e","c",["f","g"]]"#));
}

#[test]
fn merge_respects_destination_column_and_row_index_zero() {
    let current = order(r#"[["a","b","c"],"d"]"#);
    let request = MoveRequest::new(
        placed(&current, "d"),
        PlacedBlock::new("a", Coordinate::from_raw(0, Some(0))),
        MoveIntent::MergeIntoRow,
    );
    assert_eq!(
        rearrange(&current, &request),
        order(r#"[["a","d","b","c"]]"#)
    );
}

#[test]
fn rearrange_does_not_touch_input() {
    let current = order(r#"[["a","b"],"c"]"#);
    let snapshot = current.clone();
    let _ = move_block(&current, "c", "a", MoveIntent::MergeIntoRow);
    assert_eq!(current, snapshot);
}
