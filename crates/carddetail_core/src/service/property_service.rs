//! Property template use-case service.
//!
//! # Responsibility
//! - Gate type/name changes behind a confirmation when card data is at risk.
//! - Gate property deletion behind a confirmation.
//! - Append new property templates named after their type.
//!
//! # Invariants
//! - Unchanged requests never reach the mutator.
//! - Renames and zero-impact type changes apply without confirmation.
//! - Deletion always requires confirmation.

use crate::model::board::{Board, BoardView, PropertyTemplate, PropertyTemplateId};
use crate::model::card::Card;
use crate::model::property_type::PropertyType;
use crate::service::impact::{classify_change, PropertyChange};
use crate::service::mutator::{FlashMessage, MutationError, Mutator, Notifier};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PROPERTY_CHANGED_MESSAGE: &str = "Changed property successfully!";
const PROPERTY_CHANGE_FAILED_MESSAGE: &str = "Could not change property.";
const PROPERTY_DELETE_FAILED_MESSAGE: &str = "Could not delete property.";

/// Errors from property service operations.
#[derive(Debug)]
pub enum PropertyServiceError {
    /// Template id is not part of the board.
    PropertyNotFound(PropertyTemplateId),
    /// Mutation pipeline failure.
    Mutation(MutationError),
}

impl Display for PropertyServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PropertyNotFound(id) => write!(f, "property not found on board: {id}"),
            Self::Mutation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PropertyServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Mutation(err) => Some(err),
            Self::PropertyNotFound(_) => None,
        }
    }
}

impl From<MutationError> for PropertyServiceError {
    fn from(value: MutationError) -> Self {
        Self::Mutation(value)
    }
}

/// Text of a confirmation dialog, in the default language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationPrompt {
    pub heading: String,
    pub sub_text: String,
    pub confirm_button_text: String,
}

impl ConfirmationPrompt {
    fn property_type_change(
        template: &PropertyTemplate,
        new_type: PropertyType,
        affected_cards: usize,
    ) -> Self {
        Self {
            heading: "Confirm property type change".to_string(),
            sub_text: format!(
                "Are you sure you want to change property \"{}\" type from \"{}\" to \"{}\"? \
                 This will affect value(s) across {} card(s) in this board, and can result in data loss.",
                template.name,
                template.kind.display_name(),
                new_type.display_name(),
                affected_cards
            ),
            confirm_button_text: "Change property".to_string(),
        }
    }

    fn property_delete(template: &PropertyTemplate) -> Self {
        Self {
            heading: "Confirm delete property".to_string(),
            sub_text: format!(
                "Are you sure you want to delete the property \"{}\"? \
                 Deleting it will delete the property from all cards in this board.",
                template.name
            ),
            confirm_button_text: "Delete".to_string(),
        }
    }
}

/// A type change waiting for the user's confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPropertyChange {
    pub template: PropertyTemplate,
    pub new_type: PropertyType,
    pub new_name: String,
    pub affected_cards: usize,
    pub prompt: ConfirmationPrompt,
}

/// A deletion waiting for the user's confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPropertyDelete {
    pub template: PropertyTemplate,
    pub prompt: ConfirmationPrompt,
}

/// Result of requesting a type/name change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyChangeOutcome {
    /// Nothing differs from the current template.
    Unchanged,
    /// Applied without asking.
    Applied,
    /// Data is at risk; apply via [`PropertyService::confirm_change`].
    ConfirmationRequired(PendingPropertyChange),
}

/// Property template service facade.
pub struct PropertyService<M: Mutator, N: Notifier> {
    mutator: M,
    notifier: N,
}

impl<M: Mutator, N: Notifier> PropertyService<M, N> {
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

    /// Requests a type and/or name change for one property.
    ///
    /// # Errors
    /// - `PropertyNotFound` when `template` is not on `board`.
    /// - `Mutation` when an immediate apply fails.
    pub fn request_type_and_name_change(
        &self,
        board: &Board,
        cards: &[Card],
        template: &PropertyTemplate,
        new_type: PropertyType,
        new_name: &str,
    ) -> Result<PropertyChangeOutcome, PropertyServiceError> {
        ensure_on_board(board, template)?;

        let change = classify_change(cards, template, new_type, new_name);
        match change {
            PropertyChange::Unchanged => Ok(PropertyChangeOutcome::Unchanged),
            PropertyChange::TypeChange { affected_cards } if affected_cards > 0 => {
                info!(
                    "event=property_change module=service status=pending property_id={} affected_cards={}",
                    template.id, affected_cards
                );
                Ok(PropertyChangeOutcome::ConfirmationRequired(
                    PendingPropertyChange {
                        template: template.clone(),
                        new_type,
                        new_name: new_name.to_string(),
                        affected_cards,
                        prompt: ConfirmationPrompt::property_type_change(
                            template,
                            new_type,
                            affected_cards,
                        ),
                    },
                ))
            }
            PropertyChange::RenameOnly | PropertyChange::TypeChange { .. } => {
                let result = self.mutator.change_property_type_and_name(
                    board, cards, template, new_type, new_name,
                );
                if let Err(err) = result {
                    error!(
                        "event=property_change module=service status=error property_id={} confirmed=false error={}",
                        template.id, err
                    );
                    self.notifier
                        .flash(FlashMessage::high(PROPERTY_CHANGE_FAILED_MESSAGE));
                    return Err(err.into());
                }
                info!(
                    "event=property_change module=service status=ok property_id={} confirmed=false",
                    template.id
                );
                Ok(PropertyChangeOutcome::Applied)
            }
        }
    }

    /// Applies a change the user confirmed.
    ///
    /// The outcome is also surfaced through the notifier.
    pub fn confirm_change(
        &self,
        board: &Board,
        cards: &[Card],
        pending: &PendingPropertyChange,
    ) -> Result<(), PropertyServiceError> {
        let result = self.mutator.change_property_type_and_name(
            board,
            cards,
            &pending.template,
            pending.new_type,
            pending.new_name.as_str(),
        );
        match result {
            Ok(()) => {
                info!(
                    "event=property_change module=service status=ok property_id={} confirmed=true",
                    pending.template.id
                );
                self.notifier.flash(FlashMessage::high(PROPERTY_CHANGED_MESSAGE));
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=property_change module=service status=error property_id={} error={}",
                    pending.template.id, err
                );
                self.notifier
                    .flash(FlashMessage::high(PROPERTY_CHANGE_FAILED_MESSAGE));
                Err(err.into())
            }
        }
    }

    /// Prepares deletion of one property; deletion always asks first.
    pub fn request_delete(
        &self,
        board: &Board,
        template: &PropertyTemplate,
    ) -> Result<PendingPropertyDelete, PropertyServiceError> {
        ensure_on_board(board, template)?;
        Ok(PendingPropertyDelete {
            template: template.clone(),
            prompt: ConfirmationPrompt::property_delete(template),
        })
    }

    /// Deletes a property the user confirmed.
    pub fn confirm_delete(
        &self,
        board: &Board,
        views: &[BoardView],
        cards: &[Card],
        pending: &PendingPropertyDelete,
    ) -> Result<(), PropertyServiceError> {
        let property_id = pending.template.id.as_str();
        match self.mutator.delete_property(board, views, cards, property_id) {
            Ok(()) => {
                info!(
                    "event=property_delete module=service status=ok property_id={} cards={}",
                    property_id,
                    cards.len()
                );
                self.notifier.flash(FlashMessage::high(format!(
                    "Deleted {} successfully!",
                    pending.template.name
                )));
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=property_delete module=service status=error property_id={} error={}",
                    property_id, err
                );
                self.notifier
                    .flash(FlashMessage::high(PROPERTY_DELETE_FAILED_MESSAGE));
                Err(err.into())
            }
        }
    }

    /// Appends a new property of `kind`, named after the type.
    ///
    /// Returns the id the mutator assigned, so the caller can open that
    /// property's menu.
    pub fn add_property(
        &self,
        board: &Board,
        view: &BoardView,
        kind: PropertyType,
    ) -> Result<PropertyTemplateId, PropertyServiceError> {
        let template = PropertyTemplate::new(kind, kind.display_name());
        let template_id = self
            .mutator
            .insert_property_template(board, view, None, &template)?;
        info!(
            "event=property_add module=service status=ok property_id={} type={}",
            template_id, kind
        );
        Ok(template_id)
    }
}

fn ensure_on_board(board: &Board, template: &PropertyTemplate) -> Result<(), PropertyServiceError> {
    if board.has_property(template.id.as_str()) {
        return Ok(());
    }
    Err(PropertyServiceError::PropertyNotFound(template.id.clone()))
}
