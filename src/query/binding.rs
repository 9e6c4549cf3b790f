// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only reconstruction of slot bindings.
//!
//! A binding is never stored; it is rebuilt on demand by cross-referencing
//! the slot list, the slot sets, and the association list of one element.
//! Locating never mutates.

use crate::model::{
    Activity, ActivityKind, BusinessRuleImplementation, DataAssociation, DataIoDirection,
    DataSlot, Element, SlotId, SlotSet,
};

/// Well-known slot names of the decision-model binding triple.
pub const DECISION_FILE_PATH_SLOT: &str = "fileName";
pub const DECISION_NAMESPACE_SLOT: &str = "namespace";
pub const DECISION_MODEL_NAME_SLOT: &str = "model";

/// Where one named slot lives across the three parallel collections, plus
/// the literal value bound to it. Unresolved positions stay `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataIoBinding {
    direction: DataIoDirection,
    slot_id: Option<SlotId>,
    slot_index: Option<usize>,
    set_index: Option<usize>,
    set_ref_index: Option<usize>,
    association_index: Option<usize>,
    value: Option<String>,
}

impl DataIoBinding {
    fn unresolved(direction: DataIoDirection) -> Self {
        Self {
            direction,
            slot_id: None,
            slot_index: None,
            set_index: None,
            set_ref_index: None,
            association_index: None,
            value: None,
        }
    }

    pub fn direction(&self) -> DataIoDirection {
        self.direction
    }

    pub fn slot_id(&self) -> Option<&SlotId> {
        self.slot_id.as_ref()
    }

    pub fn slot_index(&self) -> Option<usize> {
        self.slot_index
    }

    pub fn set_index(&self) -> Option<usize> {
        self.set_index
    }

    pub fn set_ref_index(&self) -> Option<usize> {
        self.set_ref_index
    }

    pub fn association_index(&self) -> Option<usize> {
        self.association_index
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Locates the slot named `name` on the element's I/O surface for the given
/// direction. Elements without that surface yield an unresolved binding.
pub fn data_io_binding(element: &Element, name: &str, direction: DataIoDirection) -> DataIoBinding {
    let (slots, sets, associations): (&[DataSlot], &[SlotSet], &[DataAssociation]) = match element
    {
        Element::Activity(activity) => match activity.io_specification() {
            Some(io) => (
                io.slots(direction),
                io.sets(direction),
                activity.associations(direction),
            ),
            None => return DataIoBinding::unresolved(direction),
        },
        Element::SubProcess(sub) => match sub.io_specification() {
            Some(io) => (
                io.slots(direction),
                io.sets(direction),
                sub.associations(direction),
            ),
            None => return DataIoBinding::unresolved(direction),
        },
        Element::Event(event) => (
            event.slots(direction),
            event.sets(direction),
            event.associations(direction),
        ),
        _ => return DataIoBinding::unresolved(direction),
    };

    scan_binding(slots, sets, associations, name, direction)
}

fn scan_binding(
    slots: &[DataSlot],
    sets: &[SlotSet],
    associations: &[DataAssociation],
    name: &str,
    direction: DataIoDirection,
) -> DataIoBinding {
    let mut binding = DataIoBinding::unresolved(direction);

    for (index, slot) in slots.iter().enumerate() {
        if slot.name() == Some(name) {
            binding.slot_id = Some(slot.id().clone());
            binding.slot_index = Some(index);
        }
    }

    let Some(slot_id) = binding.slot_id.clone() else {
        return binding;
    };

    for (set_index, set) in sets.iter().enumerate() {
        for (ref_index, slot_ref) in set.slot_refs().iter().enumerate() {
            if *slot_ref == slot_id {
                binding.set_index = Some(set_index);
                binding.set_ref_index = Some(ref_index);
            }
        }
    }

    for (index, association) in associations.iter().enumerate() {
        if association.slot_ref() == &slot_id {
            binding.association_index = Some(index);
            binding.value = association.assignments().first().map(|assignment| {
                match direction {
                    DataIoDirection::Input => assignment.from().text().to_owned(),
                    DataIoDirection::Output => assignment.to().text().to_owned(),
                }
            });
        }
    }

    binding
}

/// The three-slot decision-model binding of a business-rule task, rebuilt
/// from the task's input surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionModelBinding {
    file_path: DataIoBinding,
    namespace: DataIoBinding,
    model_name: DataIoBinding,
}

impl DecisionModelBinding {
    pub fn file_path(&self) -> &DataIoBinding {
        &self.file_path
    }

    pub fn namespace(&self) -> &DataIoBinding {
        &self.namespace
    }

    pub fn model_name(&self) -> &DataIoBinding {
        &self.model_name
    }

    pub fn slots(&self) -> [&DataIoBinding; 3] {
        [&self.file_path, &self.namespace, &self.model_name]
    }

    /// Whether the three slots all resolved to the same slot set; the
    /// removal precondition.
    pub fn same_slot_set(&self) -> bool {
        self.file_path.set_index() == self.namespace.set_index()
            && self.namespace.set_index() == self.model_name.set_index()
    }
}

/// Rebuilds the decision-model binding of a business-rule task.
///
/// Returns `None` when the task's implementation is not the decision-model
/// kind, and when no slot of the triple exists — both are the ordinary
/// "nothing configured" state, not errors.
pub fn decision_model_binding(activity: &Activity) -> Option<DecisionModelBinding> {
    let ActivityKind::BusinessRuleTask { implementation } = activity.kind() else {
        return None;
    };
    if *implementation != BusinessRuleImplementation::Dmn {
        return None;
    }

    let locate = |name: &str| -> DataIoBinding {
        match activity.io_specification() {
            Some(io) => scan_binding(
                io.slots(DataIoDirection::Input),
                io.sets(DataIoDirection::Input),
                activity.associations(DataIoDirection::Input),
                name,
                DataIoDirection::Input,
            ),
            None => DataIoBinding::unresolved(DataIoDirection::Input),
        }
    };

    let binding = DecisionModelBinding {
        file_path: locate(DECISION_FILE_PATH_SLOT),
        namespace: locate(DECISION_NAMESPACE_SLOT),
        model_name: locate(DECISION_MODEL_NAME_SLOT),
    };

    if binding.slots().iter().all(|slot| slot.slot_id().is_none()) {
        return None;
    }
    Some(binding)
}

#[cfg(test)]
mod tests {
    use super::{data_io_binding, decision_model_binding};
    use crate::model::fixtures::{definitions_with_business_rule_task, eid};
    use crate::model::{ActivityKind, DataIoDirection, Element, Gateway, GatewayKind};
    use crate::ops::decision::{bind_decision_model, DecisionModelRef};

    fn model_ref() -> DecisionModelRef {
        DecisionModelRef {
            path: "pricing.dmn".to_owned(),
            namespace: "https://example.com/dmn/pricing".to_owned(),
            model_name: "pricing".to_owned(),
        }
    }

    #[test]
    fn binding_is_unresolved_without_an_io_surface() {
        let definitions = definitions_with_business_rule_task("brt");
        let element = &definitions.processes()[0].elements()[0];

        let binding = data_io_binding(element, "fileName", DataIoDirection::Input);
        assert_eq!(binding.slot_id(), None);
        assert_eq!(binding.value(), None);
    }

    #[test]
    fn binding_is_unresolved_for_elements_without_io() {
        let element = Element::Gateway(Gateway::new(eid("g1"), GatewayKind::Exclusive));

        let binding = data_io_binding(&element, "fileName", DataIoDirection::Input);
        assert_eq!(binding.slot_id(), None);
    }

    #[test]
    fn decision_binding_is_none_for_non_dmn_implementation() {
        let definitions = definitions_with_business_rule_task("brt");
        let activity = definitions.processes()[0].elements()[0]
            .as_activity()
            .expect("activity");

        assert!(decision_model_binding(activity).is_none());
    }

    #[test]
    fn decision_binding_resolves_after_bind() {
        let mut definitions = definitions_with_business_rule_task("brt");
        bind_decision_model(&mut definitions, &eid("brt"), &model_ref()).expect("bind");

        let activity = definitions.processes()[0].elements()[0]
            .as_activity()
            .expect("activity");
        let binding = decision_model_binding(activity).expect("binding");

        assert!(binding.same_slot_set());
        assert_eq!(binding.file_path().value(), Some("pricing.dmn"));
        assert_eq!(
            binding.namespace().value(),
            Some("https://example.com/dmn/pricing")
        );
        assert_eq!(binding.model_name().value(), Some("pricing"));
        assert_eq!(binding.file_path().slot_index(), Some(0));
        assert_eq!(binding.namespace().slot_index(), Some(1));
        assert_eq!(binding.model_name().slot_index(), Some(2));
    }

    #[test]
    fn decision_binding_is_none_when_implementation_is_dmn_but_nothing_is_bound() {
        let mut definitions = definitions_with_business_rule_task("brt");
        let activity = definitions.processes_mut()[0].elements_mut()[0]
            .as_activity_mut()
            .expect("activity");
        *activity.kind_mut() = ActivityKind::BusinessRuleTask {
            implementation: crate::model::BusinessRuleImplementation::Dmn,
        };

        assert!(decision_model_binding(activity).is_none());
    }
}
