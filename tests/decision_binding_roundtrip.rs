// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end drive of the decision-model binding through the store's
//! batch boundary, the way the editor issues it.

use proteus::model::{
    Activity, ActivityKind, BaseId, BusinessRuleImplementation, Definitions, Element, ElementId,
    Process, ProcessId,
};
use proteus::ops::decision::{bind_decision_model, unbind_decision_model, DecisionModelRef};
use proteus::ops::MutationError;
use proteus::query::binding::decision_model_binding;
use proteus::store::DocumentStore;

fn task_id() -> ElementId {
    ElementId::new("brt").expect("element id")
}

fn seed_definitions() -> Definitions {
    let mut definitions = Definitions::new(
        BaseId::new("defs").expect("base id"),
        "https://example.com/process",
    );
    let mut process = Process::new(ProcessId::new("p1").expect("process id"));
    process.elements_mut().push(Element::Activity(Activity::new(
        task_id(),
        ActivityKind::BusinessRuleTask {
            implementation: BusinessRuleImplementation::Drools,
        },
    )));
    definitions.processes_mut().push(process);
    definitions
}

fn model_ref() -> DecisionModelRef {
    DecisionModelRef {
        path: "a.dmn".to_owned(),
        namespace: "ns".to_owned(),
        model_name: "Model".to_owned(),
    }
}

#[test]
fn bind_locate_unbind_round_trip() {
    let mut store = DocumentStore::new(seed_definitions());

    store
        .batch(|definitions| bind_decision_model(definitions, &task_id(), &model_ref()))
        .expect("bind batch");
    assert_eq!(store.rev(), 1);

    {
        let activity = store.definitions().processes()[0].elements()[0]
            .as_activity()
            .expect("activity");
        let binding = decision_model_binding(activity).expect("binding");
        assert_eq!(binding.file_path().value(), Some("a.dmn"));
        assert_eq!(binding.namespace().value(), Some("ns"));
        assert_eq!(binding.model_name().value(), Some("Model"));
        assert!(binding.same_slot_set());
    }

    store
        .batch(|definitions| unbind_decision_model(definitions, &task_id()))
        .expect("unbind batch");
    assert_eq!(store.rev(), 2);

    let activity = store.definitions().processes()[0].elements()[0]
        .as_activity()
        .expect("activity");
    let io = activity.io_specification().expect("io specification");
    assert!(io.data_inputs().is_empty());
    assert!(io.input_sets().iter().all(|set| set.slot_refs().is_empty()));
    assert!(activity.data_input_associations().is_empty());
    assert!(decision_model_binding(activity).is_none());
}

#[test]
fn failing_batch_rolls_back_earlier_steps() {
    let mut store = DocumentStore::new(seed_definitions());
    let before = store.definitions().clone();

    let ghost = ElementId::new("ghost").expect("element id");
    let result = store.batch(|definitions| {
        bind_decision_model(definitions, &task_id(), &model_ref())?;
        bind_decision_model(definitions, &ghost, &model_ref())
    });

    assert!(matches!(result, Err(MutationError::NotFound { .. })));
    assert_eq!(store.definitions(), &before);
    assert_eq!(store.rev(), 0);
}
