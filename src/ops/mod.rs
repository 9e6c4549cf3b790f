// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations over the document tree.
//!
//! Every operation receives the whole document (or one of its elements),
//! runs a bounded synchronous walk, and mutates in place. Validation
//! failures are raised before any mutation; the store's batch boundary
//! handles rollback across multi-operation sequences.

use std::fmt;

use crate::model::{ElementId, IdError};

pub mod data_io;
pub mod decision;
pub mod registry;
pub mod visitor;

pub use data_io::{bind_data_slot, remove_data_slots, SlotTyping};
pub use decision::{bind_decision_model, unbind_decision_model, DecisionModelRef};
pub use registry::{
    upsert_error, upsert_item_definition, upsert_item_definition_for_data_type, upsert_message,
    upsert_process, upsert_signal,
};
pub use visitor::{visit_flow_elements_and_artifacts, visit_lanes, VisitControl, VisitedNode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    /// No element with the given id exists anywhere in the process tree.
    NotFound { element_id: ElementId },
    /// The element exists but is not of the kind the operation applies to.
    KindMismatch { element_id: ElementId },
    /// The slots of a binding are split across slot sets; raised before any
    /// mutation, so the document is left untouched.
    InconsistentBinding { element_id: ElementId },
    /// A slot name that cannot produce a valid derived slot id.
    InvalidSlotName { name: String, reason: IdError },
}

impl fmt::Display for MutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { element_id } => {
                write!(f, "element not found (id={element_id})")
            }
            Self::KindMismatch { element_id } => {
                write!(f, "operation does not apply to this element kind (id={element_id})")
            }
            Self::InconsistentBinding { element_id } => {
                write!(
                    f,
                    "binding slots are mapped in different slot sets (id={element_id})"
                )
            }
            Self::InvalidSlotName { name, reason } => {
                write!(f, "invalid slot name '{name}': {reason}")
            }
        }
    }
}

impl std::error::Error for MutationError {}
