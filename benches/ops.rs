// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use proteus::model::{
    Activity, ActivityKind, BaseId, BusinessRuleImplementation, DefinitionId, Definitions,
    Element, ElementId, Process, ProcessId,
};
use proteus::ops::decision::{bind_decision_model, unbind_decision_model, DecisionModelRef};
use proteus::ops::registry::upsert_message;
use proteus::ops::visitor::{visit_flow_elements_and_artifacts, VisitControl};

const TASKS: usize = 100;

fn seed_definitions() -> Definitions {
    let mut definitions = Definitions::new(
        BaseId::new("defs").expect("base id"),
        "https://example.com/process",
    );
    let mut process = Process::new(ProcessId::new("p1").expect("process id"));
    for i in 0..TASKS {
        process.elements_mut().push(Element::Activity(Activity::new(
            ElementId::new(format!("task{i}")).expect("element id"),
            ActivityKind::BusinessRuleTask {
                implementation: BusinessRuleImplementation::Drools,
            },
        )));
    }
    definitions.processes_mut().push(process);
    definitions
}

fn last_task_id() -> ElementId {
    ElementId::new(format!("task{}", TASKS - 1)).expect("element id")
}

fn model_ref() -> DecisionModelRef {
    DecisionModelRef {
        path: "a.dmn".to_owned(),
        namespace: "https://example.com/dmn/a".to_owned(),
        model_name: "Model".to_owned(),
    }
}

fn bench_bind(c: &mut Criterion) {
    let task_id = last_task_id();
    let model = model_ref();
    c.bench_function("bind_decision_model/100-tasks", |b| {
        b.iter_batched(
            seed_definitions,
            |mut definitions| {
                bind_decision_model(&mut definitions, &task_id, &model).expect("bind");
                definitions
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_unbind(c: &mut Criterion) {
    let task_id = last_task_id();
    let model = model_ref();
    let mut bound = seed_definitions();
    bind_decision_model(&mut bound, &task_id, &model).expect("bind");

    c.bench_function("unbind_decision_model/100-tasks", |b| {
        b.iter_batched(
            || bound.clone(),
            |mut definitions| {
                unbind_decision_model(&mut definitions, &task_id).expect("unbind");
                definitions
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_upsert_message(c: &mut Criterion) {
    let id = DefinitionId::new("M").expect("definition id");
    c.bench_function("upsert_message/fresh", |b| {
        b.iter_batched(
            seed_definitions,
            |mut definitions| {
                upsert_message(&mut definitions, &id, "OrderPlaced");
                definitions
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_full_walk(c: &mut Criterion) {
    c.bench_function("visit_flow_elements/100-tasks", |b| {
        b.iter_batched(
            seed_definitions,
            |mut definitions| {
                let mut visited = 0usize;
                visit_flow_elements_and_artifacts(&mut definitions.processes_mut()[0], &mut |_| {
                    visited += 1;
                    VisitControl::Continue
                });
                (definitions, visited)
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_bind,
    bench_unbind,
    bench_upsert_message,
    bench_full_walk
);
criterion_main!(benches);
