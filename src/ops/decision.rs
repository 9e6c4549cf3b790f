// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Binding a business-rule task to an external decision model.
//!
//! The binding is a three-slot pattern (file path, namespace, model name)
//! written against the same slot set, so the removal precondition — all
//! three slots in one set — holds by construction after a bind.

use tracing::debug;

use crate::model::{
    ActivityKind, BusinessRuleImplementation, DataIoDirection, DataType, DefinitionId,
    Definitions, Element, ElementId,
};
use crate::query::binding::{
    decision_model_binding, DECISION_FILE_PATH_SLOT, DECISION_MODEL_NAME_SLOT,
    DECISION_NAMESPACE_SLOT,
};

use super::data_io::{bind_data_slot, purge_activity_slots, SlotTyping};
use super::registry::{upsert_item_definition_for_data_type, upsert_process};
use super::visitor::{visit_flow_elements_and_artifacts, VisitControl, VisitedNode};
use super::MutationError;

/// The resolved identity of an external decision model, as produced by the
/// resolution collaborator: a path relative to the open file plus the
/// model's namespace and display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionModelRef {
    pub path: String,
    pub namespace: String,
    pub model_name: String,
}

/// Wires the business-rule task `task_id` to `model`: upserts the string
/// item definition, switches the task implementation to the decision-model
/// kind, and binds the three well-known input slots against the same slot
/// set. Idempotent.
pub fn bind_decision_model(
    definitions: &mut Definitions,
    task_id: &ElementId,
    model: &DecisionModelRef,
) -> Result<(), MutationError> {
    let string_item = upsert_item_definition_for_data_type(definitions, DataType::String)
        .id()
        .clone();
    let process = upsert_process(definitions);

    let mut outcome = Err(MutationError::NotFound {
        element_id: task_id.clone(),
    });
    visit_flow_elements_and_artifacts(process, &mut |node| {
        let VisitedNode::Element(element) = node else {
            return VisitControl::Continue;
        };
        if element.id() != task_id {
            return VisitControl::Continue;
        }
        outcome = bind_on_element(element, &string_item, model);
        VisitControl::Stop
    });

    if outcome.is_ok() {
        debug!(task_id = %task_id, path = %model.path, "bound decision model");
    }
    outcome
}

fn bind_on_element(
    element: &mut Element,
    string_item: &DefinitionId,
    model: &DecisionModelRef,
) -> Result<(), MutationError> {
    let element_id = element.id().clone();
    {
        let Some(activity) = element.as_activity_mut() else {
            return Err(MutationError::KindMismatch { element_id });
        };
        let ActivityKind::BusinessRuleTask { implementation } = activity.kind_mut() else {
            return Err(MutationError::KindMismatch { element_id });
        };
        *implementation = BusinessRuleImplementation::Dmn;
    }

    let typing = SlotTyping {
        item_subject_ref: Some(string_item.clone()),
        dtype: Some(DataType::String.structure_ref().to_owned()),
    };

    bind_data_slot(
        element,
        DataIoDirection::Input,
        DECISION_FILE_PATH_SLOT,
        &model.path,
        &typing,
    )?;
    bind_data_slot(
        element,
        DataIoDirection::Input,
        DECISION_NAMESPACE_SLOT,
        &model.namespace,
        &typing,
    )?;
    bind_data_slot(
        element,
        DataIoDirection::Input,
        DECISION_MODEL_NAME_SLOT,
        &model.model_name,
        &typing,
    )?;
    Ok(())
}

/// Removes the decision-model binding of `task_id`: the three slots, their
/// set refs, and their associations, as one logical operation. A task with
/// no binding is an idempotent no-op; a binding whose slots are split
/// across slot sets fails with [`MutationError::InconsistentBinding`]
/// before anything is touched.
pub fn unbind_decision_model(
    definitions: &mut Definitions,
    task_id: &ElementId,
) -> Result<(), MutationError> {
    let process = upsert_process(definitions);

    let mut outcome = Err(MutationError::NotFound {
        element_id: task_id.clone(),
    });
    visit_flow_elements_and_artifacts(process, &mut |node| {
        let VisitedNode::Element(element) = node else {
            return VisitControl::Continue;
        };
        if element.id() != task_id {
            return VisitControl::Continue;
        }
        outcome = unbind_on_element(element);
        VisitControl::Stop
    });
    outcome
}

fn unbind_on_element(element: &mut Element) -> Result<(), MutationError> {
    let element_id = element.id().clone();
    let Some(activity) = element.as_activity_mut() else {
        return Err(MutationError::KindMismatch { element_id });
    };
    if !matches!(activity.kind(), ActivityKind::BusinessRuleTask { .. }) {
        return Err(MutationError::KindMismatch { element_id });
    }

    let Some(binding) = decision_model_binding(activity) else {
        return Ok(());
    };

    if !binding.same_slot_set() {
        return Err(MutationError::InconsistentBinding { element_id });
    }

    let ids = binding
        .slots()
        .iter()
        .filter_map(|slot| slot.slot_id().cloned())
        .collect::<Vec<_>>();
    debug!(task_id = %activity.id(), "removing decision model binding");

    purge_activity_slots(activity, DataIoDirection::Input, &ids);
    Ok(())
}
