//! Property row view model.
//!
//! # Responsibility
//! - Decide per row whether the name opens a menu and whether the value is
//!   editable, from already-resolved permissions.
//! - Report the drop zones each row exposes, with their coordinates.
//! - Track which freshly added property should open its menu once.
//!
//! # Invariants
//! - Rows follow `Board::card_properties` order; row `x` reports column `x`.
//! - Every row has an above-row drop zone; only the last row has a
//!   below-row drop zone.
//! - Drop zone targets carry property template ids, not content block ids;
//!   they address the board's property order, never a card's content order.

use crate::model::board::{Board, PropertyTemplateId};
use crate::model::card::{Card, PropertyValue};
use crate::model::content_order::BlockId;
use crate::model::coordinate::{Coordinate, MoveIntent, PlacedBlock};
use crate::model::property_type::PropertyType;

/// Resolved access for the current viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowAccess {
    pub readonly: bool,
    pub can_edit_board_properties: bool,
    pub can_edit_board_cards: bool,
}

impl RowAccess {
    pub fn can_edit_properties(self) -> bool {
        !self.readonly && self.can_edit_board_properties
    }

    pub fn can_edit_values(self) -> bool {
        !self.readonly && self.can_edit_board_cards
    }
}

/// How a property name is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMode {
    ReadOnly,
    /// Name button opening the type/name/delete menu.
    Menu { open: bool },
}

/// A drop target attached to a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropZone {
    pub intent: MoveIntent,
    pub target: PlacedBlock,
}

/// One rendered property row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRow {
    pub template_id: PropertyTemplateId,
    pub name: String,
    pub kind: PropertyType,
    pub name_mode: NameMode,
    pub value_read_only: bool,
    pub value: Option<PropertyValue>,
    pub drop_zones: Vec<DropZone>,
}

/// The whole property list of one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyList {
    pub rows: Vec<PropertyRow>,
    pub show_add_property: bool,
}

/// Remembers the property just added so its menu opens once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPropertyFocus {
    template_id: Option<PropertyTemplateId>,
}

impl NewPropertyFocus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `template_id` as the property whose menu should open.
    pub fn focus(&mut self, template_id: impl Into<PropertyTemplateId>) {
        self.template_id = Some(template_id.into());
    }

    pub fn menu_open_for(&self) -> Option<&str> {
        self.template_id.as_deref()
    }

    /// Clears the focus once the board shows the new property.
    ///
    /// Call after building the list that rendered the open menu.
    pub fn settle(&mut self, board: &Board) {
        if self
            .template_id
            .as_deref()
            .is_some_and(|id| board.has_property(id))
        {
            self.template_id = None;
        }
    }
}

/// Builds the property rows for `card`.
pub fn build_property_list(
    board: &Board,
    card: &Card,
    access: RowAccess,
    focus: &NewPropertyFocus,
) -> PropertyList {
    let last = board.card_properties.len().saturating_sub(1);
    let rows = board
        .card_properties
        .iter()
        .enumerate()
        .map(|(x, template)| {
            let name_mode = if access.can_edit_properties() {
                NameMode::Menu {
                    open: focus.menu_open_for() == Some(template.id.as_str()),
                }
            } else {
                NameMode::ReadOnly
            };

            let target = PlacedBlock::new(
                BlockId::from(template.id.as_str()),
                Coordinate::top_level(x as i64),
            );
            let mut drop_zones = vec![DropZone {
                intent: MoveIntent::AboveRow,
                target: target.clone(),
            }];
            if x == last {
                drop_zones.push(DropZone {
                    intent: MoveIntent::BelowRow,
                    target,
                });
            }

            PropertyRow {
                template_id: template.id.clone(),
                name: template.name.clone(),
                kind: template.kind,
                name_mode,
                value_read_only: !access.can_edit_values(),
                value: card.property_value(template.id.as_str()).cloned(),
                drop_zones,
            }
        })
        .collect();

    PropertyList {
        rows,
        show_add_property: access.can_edit_properties(),
    }
}

#[cfg(test)]
mod tests {
    use super::{build_property_list, NameMode, NewPropertyFocus, RowAccess};
    use crate::model::board::{Board, PropertyTemplate};
    use crate::model::card::{Card, PropertyValue};
    use crate::model::coordinate::{Coordinate, MoveIntent};
    use crate::model::property_type::PropertyType;

    fn board() -> Board {
        let mut board = Board::new("board-1", "Roadmap");
        board.card_properties = vec![
            PropertyTemplate::with_id("status", PropertyType::Select, "Status"),
            PropertyTemplate::with_id("owner", PropertyType::Person, "Owner"),
            PropertyTemplate::with_id("due", PropertyType::Date, "Due"),
        ];
        board
    }

    fn editor() -> RowAccess {
        RowAccess {
            readonly: false,
            can_edit_board_properties: true,
            can_edit_board_cards: true,
        }
    }

    #[test]
    fn only_last_row_has_below_zone() {
        let list = build_property_list(
            &board(),
            &Card::new("card-1", "board-1", "Card"),
            editor(),
            &NewPropertyFocus::new(),
        );

        let zone_counts: Vec<usize> = list.rows.iter().map(|row| row.drop_zones.len()).collect();
        assert_eq!(zone_counts, vec![1, 1, 2]);

        let last = &list.rows[2];
        assert_eq!(last.drop_zones[0].intent, MoveIntent::AboveRow);
        assert_eq!(last.drop_zones[1].intent, MoveIntent::BelowRow);
        assert_eq!(last.drop_zones[1].target.coordinate, Coordinate::top_level(2));
        assert_eq!(last.drop_zones[1].target.block_id.as_str(), "due");
    }

    #[test]
    fn readonly_viewer_gets_plain_names_and_locked_values() {
        let access = RowAccess {
            readonly: true,
            ..editor()
        };
        let list = build_property_list(
            &board(),
            &Card::new("card-1", "board-1", "Card"),
            access,
            &NewPropertyFocus::new(),
        );

        assert!(!list.show_add_property);
        assert!(list
            .rows
            .iter()
            .all(|row| row.name_mode == NameMode::ReadOnly && row.value_read_only));
    }

    #[test]
    fn card_editor_without_property_permission_edits_values_only() {
        let access = RowAccess {
            can_edit_board_properties: false,
            ..editor()
        };
        let mut card = Card::new("card-1", "board-1", "Card");
        card.fields
            .properties
            .insert("status".into(), PropertyValue::Text("opt-1".into()));

        let list = build_property_list(&board(), &card, access, &NewPropertyFocus::new());
        assert!(!list.show_add_property);
        assert_eq!(list.rows[0].name_mode, NameMode::ReadOnly);
        assert!(!list.rows[0].value_read_only);
        assert_eq!(list.rows[0].value, Some(PropertyValue::Text("opt-1".into())));
        assert_eq!(list.rows[1].value, None);
    }

    #[test]
    fn new_property_menu_opens_once() {
        let board = board();
        let card = Card::new("card-1", "board-1", "Card");
        let mut focus = NewPropertyFocus::new();
        focus.focus("owner");

        let list = build_property_list(&board, &card, editor(), &focus);
        assert_eq!(list.rows[1].name_mode, NameMode::Menu { open: true });
        assert_eq!(list.rows[0].name_mode, NameMode::Menu { open: false });

        focus.settle(&board);
        assert_eq!(focus.menu_open_for(), None);
        let list = build_property_list(&board, &card, editor(), &focus);
        assert_eq!(list.rows[1].name_mode, NameMode::Menu { open: false });
    }

    #[test]
    fn focus_waits_until_board_contains_property() {
        let mut focus = NewPropertyFocus::new();
        focus.focus("not-yet-synced");
        focus.settle(&board());
        assert_eq!(focus.menu_open_for(), Some("not-yet-synced"));
    }
}
