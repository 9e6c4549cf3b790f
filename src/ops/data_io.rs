// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Generic data-slot binding.
//!
//! `bind_data_slot` builds or updates an element's slot declaration, its
//! membership in the first slot set, and its association/assignment wiring
//! as one coherent update. Invoking it twice with identical arguments
//! produces an identical tree.

use tracing::debug;

use crate::model::{
    Activity, Assignment, BaseId, DataAssociation, DataIoDirection, DataSlot, DefinitionId,
    Definitions, Element, ElementId, Expression, IoSpecification, SlotId, SlotSet,
};
use crate::query::binding::data_io_binding;

use super::registry::upsert_process;
use super::visitor::{visit_flow_elements_and_artifacts, VisitControl, VisitedNode};
use super::MutationError;

/// Optional typing written onto a slot when it is created or re-bound.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotTyping {
    pub item_subject_ref: Option<DefinitionId>,
    pub dtype: Option<String>,
}

/// Ensures, in order: the element's I/O surface, a slot named `name` (with
/// a deterministic derived id; an existing slot's id is never rewritten),
/// the slot's membership in the first slot set (created if absent), and an
/// association whose single assignment carries `value` on its literal side.
pub fn bind_data_slot(
    element: &mut Element,
    direction: DataIoDirection,
    name: &str,
    value: &str,
    typing: &SlotTyping,
) -> Result<SlotId, MutationError> {
    match element {
        Element::Activity(activity) => {
            let owner = activity.id().clone();
            let io = ensure_io_specification(activity.io_specification_mut(), &owner);
            let (slots, sets) = io.side_mut(direction);
            let slot_id = ensure_slot(slots, &owner, direction, name, typing)?;
            ensure_set_ref(sets, &owner, direction, &slot_id);
            ensure_association(activity.associations_mut(direction), direction, &slot_id, value);
            Ok(slot_id)
        }
        Element::SubProcess(sub) => {
            let owner = sub.id().clone();
            let io = ensure_io_specification(sub.io_specification_mut(), &owner);
            let (slots, sets) = io.side_mut(direction);
            let slot_id = ensure_slot(slots, &owner, direction, name, typing)?;
            ensure_set_ref(sets, &owner, direction, &slot_id);
            ensure_association(sub.associations_mut(direction), direction, &slot_id, value);
            Ok(slot_id)
        }
        Element::Event(event) => {
            let side_matches = match direction {
                DataIoDirection::Input => event.kind().is_throw(),
                DataIoDirection::Output => event.kind().is_catch(),
            };
            if !side_matches {
                return Err(MutationError::KindMismatch {
                    element_id: event.id().clone(),
                });
            }
            let owner = event.id().clone();
            let (slots, sets, associations) = event.side_mut(direction);
            let slot_id = ensure_slot(slots, &owner, direction, name, typing)?;
            ensure_set_ref(sets, &owner, direction, &slot_id);
            ensure_association(associations, direction, &slot_id, value);
            Ok(slot_id)
        }
        other => Err(MutationError::KindMismatch {
            element_id: other.id().clone(),
        }),
    }
}

/// Removes the named slots, their set refs, and their associations from the
/// element. Absent names are skipped; removal is by slot id in each
/// collection independently, so no deletion can invalidate another.
pub fn remove_data_slots(
    definitions: &mut Definitions,
    element_id: &ElementId,
    names: &[&str],
    direction: DataIoDirection,
) -> Result<(), MutationError> {
    let process = upsert_process(definitions);

    let mut outcome = Err(MutationError::NotFound {
        element_id: element_id.clone(),
    });
    visit_flow_elements_and_artifacts(process, &mut |node| {
        let VisitedNode::Element(element) = node else {
            return VisitControl::Continue;
        };
        if element.id() != element_id {
            return VisitControl::Continue;
        }
        outcome = remove_from_element(element, names, direction);
        VisitControl::Stop
    });
    outcome
}

fn remove_from_element(
    element: &mut Element,
    names: &[&str],
    direction: DataIoDirection,
) -> Result<(), MutationError> {
    let located = names
        .iter()
        .map(|name| data_io_binding(element, name, direction))
        .filter(|binding| binding.slot_id().is_some())
        .collect::<Vec<_>>();

    if located.is_empty() {
        return Ok(());
    }

    // All located slots must live in the same slot set; checked before any
    // mutation so a failure leaves the document untouched.
    let first_set_index = located[0].set_index();
    if located.iter().any(|b| b.set_index() != first_set_index) {
        return Err(MutationError::InconsistentBinding {
            element_id: element.id().clone(),
        });
    }

    let ids = located
        .iter()
        .filter_map(|binding| binding.slot_id().cloned())
        .collect::<Vec<_>>();
    debug!(element_id = %element.id(), removed = ids.len(), "removing data slots");

    match element {
        Element::Activity(activity) => purge_activity_slots(activity, direction, &ids),
        Element::SubProcess(sub) => {
            if let Some(io) = sub.io_specification_mut().as_mut() {
                let (slots, sets) = io.side_mut(direction);
                purge_slot_lists(slots, sets, &ids);
            }
            sub.associations_mut(direction)
                .retain(|association| !ids.contains(association.slot_ref()));
        }
        Element::Event(event) => {
            let (slots, sets, associations) = event.side_mut(direction);
            purge_slot_lists(slots, sets, &ids);
            associations.retain(|association| !ids.contains(association.slot_ref()));
        }
        _ => {}
    }
    Ok(())
}

pub(crate) fn purge_activity_slots(
    activity: &mut Activity,
    direction: DataIoDirection,
    ids: &[SlotId],
) {
    if let Some(io) = activity.io_specification_mut().as_mut() {
        let (slots, sets) = io.side_mut(direction);
        purge_slot_lists(slots, sets, ids);
    }
    activity
        .associations_mut(direction)
        .retain(|association| !ids.contains(association.slot_ref()));
}

fn purge_slot_lists(slots: &mut Vec<DataSlot>, sets: &mut Vec<SlotSet>, ids: &[SlotId]) {
    slots.retain(|slot| !ids.contains(slot.id()));
    for set in sets.iter_mut() {
        set.slot_refs_mut().retain(|slot_ref| !ids.contains(slot_ref));
    }
}

fn ensure_io_specification<'a>(
    io: &'a mut Option<IoSpecification>,
    owner: &ElementId,
) -> &'a mut IoSpecification {
    io.get_or_insert_with(|| IoSpecification::new(derived_base_id(owner.as_str(), "_ioSpec")))
}

fn ensure_slot(
    slots: &mut Vec<DataSlot>,
    owner: &ElementId,
    direction: DataIoDirection,
    name: &str,
    typing: &SlotTyping,
) -> Result<SlotId, MutationError> {
    if let Some(existing) = slots.iter_mut().find(|slot| slot.name() == Some(name)) {
        if typing.item_subject_ref.is_some() {
            existing.set_item_subject_ref(typing.item_subject_ref.clone());
        }
        if typing.dtype.is_some() {
            existing.set_dtype(typing.dtype.clone());
        }
        return Ok(existing.id().clone());
    }

    let slot_id = SlotId::new(format!(
        "{owner}_{name}{}",
        direction.slot_id_suffix()
    ))
    .map_err(|reason| MutationError::InvalidSlotName {
        name: name.to_owned(),
        reason,
    })?;

    let mut slot = DataSlot::new_with(slot_id.clone(), name);
    slot.set_item_subject_ref(typing.item_subject_ref.clone());
    slot.set_dtype(typing.dtype.clone());
    slots.push(slot);
    debug!(slot_id = %slot_id, "created data slot");
    Ok(slot_id)
}

fn ensure_set_ref(
    sets: &mut Vec<SlotSet>,
    owner: &ElementId,
    direction: DataIoDirection,
    slot_id: &SlotId,
) {
    if sets.is_empty() {
        let suffix = match direction {
            DataIoDirection::Input => "_inputSetX",
            DataIoDirection::Output => "_outputSetX",
        };
        sets.push(SlotSet::new(derived_base_id(owner.as_str(), suffix)));
    }

    let set = &mut sets[0];
    if !set.contains(slot_id) {
        set.slot_refs_mut().push(slot_id.clone());
    }
}

fn ensure_association(
    associations: &mut Vec<DataAssociation>,
    direction: DataIoDirection,
    slot_id: &SlotId,
    value: &str,
) {
    if let Some(existing) = associations
        .iter_mut()
        .find(|association| association.slot_ref() == slot_id)
    {
        if existing.assignments().is_empty() {
            let assignment = new_assignment(direction, slot_id, value);
            existing.assignments_mut().push(assignment);
        } else {
            let assignment = &mut existing.assignments_mut()[0];
            match direction {
                DataIoDirection::Input => assignment.from_mut().set_text(value),
                DataIoDirection::Output => assignment.to_mut().set_text(value),
            }
        }
        return;
    }

    let mut association = DataAssociation::new(
        derived_base_id(slot_id.as_str(), "Association"),
        slot_id.clone(),
    );
    association
        .assignments_mut()
        .push(new_assignment(direction, slot_id, value));
    associations.push(association);
}

fn new_assignment(direction: DataIoDirection, slot_id: &SlotId, value: &str) -> Assignment {
    let from_id = derived_base_id(slot_id.as_str(), "From");
    let to_id = derived_base_id(slot_id.as_str(), "To");

    let (from, to) = match direction {
        DataIoDirection::Input => (
            Expression::new(from_id, value),
            Expression::new(to_id, slot_id.as_str()),
        ),
        DataIoDirection::Output => (
            Expression::new(from_id, slot_id.as_str()),
            Expression::new(to_id, value),
        ),
    };

    Assignment::new(
        derived_base_id(slot_id.as_str(), "Assignment"),
        from,
        to,
    )
}

fn derived_base_id(owner: &str, suffix: &str) -> BaseId {
    BaseId::new(format!("{owner}{suffix}")).expect("derived from a validated id")
}
