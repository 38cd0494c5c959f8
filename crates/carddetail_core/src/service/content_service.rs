//! Card content drop handling.
//!
//! # Responsibility
//! - Turn one drop gesture into a new content order.
//! - Hand changed orders to the injected mutator as one undo step.
//!
//! # Invariants
//! - No-op moves never reach the mutator.
//! - Mutation failures are logged and notified, never returned to the
//!   drop handler's caller.

use crate::layout::rearrange;
use crate::model::card::Card;
use crate::model::content_order::ContentOrder;
use crate::model::coordinate::{MoveIntent, MoveRequest, PlacedBlock};
use crate::service::mutator::{FlashMessage, Mutator, Notifier};
use log::{error, info};

/// Undo-step description for content moves.
pub const MOVE_CONTENT_DESCRIPTION: &str = "Move card content";
const MOVE_CONTENT_FAILED_MESSAGE: &str = "Could not move card content.";

/// Drop handler for card content blocks.
pub struct ContentService<M: Mutator, N: Notifier> {
    mutator: M,
    notifier: N,
}

impl<M: Mutator, N: Notifier> ContentService<M, N> {
    /// Creates a service from its collaborators.
    pub fn new(mutator: M, notifier: N) -> Self {
        Self { mutator, notifier }
    }

    pub fn mutator(&self) -> &M {
        &self.mutator
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Handles a drop of `source` onto `destination` inside `card`.
    ///
    /// Returns the new content order, or the current one when the move is
    /// a no-op.
    pub fn on_drop(
        &self,
        card: &Card,
        source: &PlacedBlock,
        destination: &PlacedBlock,
        intent: MoveIntent,
    ) -> ContentOrder {
        let current = &card.fields.content_order;
        let request = MoveRequest::new(source.clone(), destination.clone(), intent);
        if request.is_self_move() {
            return current.clone();
        }

        let next = rearrange(current, &request);
        if next == *current {
            info!(
                "event=content_move module=service status=noop card_id={} intent={}",
                card.id,
                intent.as_str()
            );
            return next;
        }

        let result = self
            .mutator
            .perform_as_undo_group(MOVE_CONTENT_DESCRIPTION, &mut || {
                self.mutator.change_card_content_order(
                    card.board_id.as_str(),
                    card.id.as_str(),
                    current,
                    &next,
                    MOVE_CONTENT_DESCRIPTION,
                )
            });

        match result {
            Ok(()) => info!(
                "event=content_move module=service status=ok card_id={} intent={} slots={}",
                card.id,
                intent.as_str(),
                next.len()
            ),
            Err(err) => {
                error!(
                    "event=content_move module=service status=error card_id={} intent={} error={}",
                    card.id,
                    intent.as_str(),
                    err
                );
                self.notifier
                    .flash(FlashMessage::high(MOVE_CONTENT_FAILED_MESSAGE));
            }
        }
        next
    }
}
