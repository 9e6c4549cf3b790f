// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::definitions::Definitions;
use super::ids::{BaseId, ElementId, ProcessId};
use super::process::{
    Activity, ActivityKind, BusinessRuleImplementation, Element, Event, EventKind, Gateway,
    GatewayKind, Lane, LaneSet, Process, SubProcess, SubProcessKind, TextAnnotation,
};

pub(crate) fn bid(value: &str) -> BaseId {
    BaseId::new(value).expect("base id")
}

pub(crate) fn eid(value: &str) -> ElementId {
    ElementId::new(value).expect("element id")
}

fn pid(value: &str) -> ProcessId {
    ProcessId::new(value).expect("process id")
}

pub(crate) fn empty_definitions() -> Definitions {
    Definitions::new(bid("defs"), "https://example.com/process")
}

/// One process holding a single business-rule task (drools implementation,
/// no I/O surface yet).
pub(crate) fn definitions_with_business_rule_task(task_id: &str) -> Definitions {
    let mut definitions = empty_definitions();

    let mut process = Process::new(pid("p1"));
    process.elements_mut().push(Element::Activity(Activity::new(
        eid(task_id),
        ActivityKind::BusinessRuleTask {
            implementation: BusinessRuleImplementation::Drools,
        },
    )));
    definitions.processes_mut().push(process);

    definitions
}

/// Ten flow elements across two nesting levels, plus one artifact:
///
/// ```text
/// start, t1, sub1[u1, u2, g1, end1], g2, t2, end
/// ```
pub(crate) fn nested_process() -> Process {
    let mut process = Process::new(pid("p1"));

    process
        .elements_mut()
        .push(Element::Event(Event::new(eid("start"), EventKind::Start)));
    process.elements_mut().push(Element::Activity(Activity::new(
        eid("t1"),
        ActivityKind::Task,
    )));

    let mut sub = SubProcess::new(eid("sub1"), SubProcessKind::Embedded);
    sub.elements_mut().push(Element::Activity(Activity::new(
        eid("u1"),
        ActivityKind::UserTask,
    )));
    sub.elements_mut().push(Element::Activity(Activity::new(
        eid("u2"),
        ActivityKind::UserTask,
    )));
    sub.elements_mut().push(Element::Gateway(Gateway::new(
        eid("g1"),
        GatewayKind::Exclusive,
    )));
    sub.elements_mut()
        .push(Element::Event(Event::new(eid("end1"), EventKind::End)));
    process.elements_mut().push(Element::SubProcess(sub));

    process.elements_mut().push(Element::Gateway(Gateway::new(
        eid("g2"),
        GatewayKind::Parallel,
    )));
    process.elements_mut().push(Element::Activity(Activity::new(
        eid("t2"),
        ActivityKind::ServiceTask,
    )));
    process
        .elements_mut()
        .push(Element::Event(Event::new(eid("end"), EventKind::End)));

    process
        .artifacts_mut()
        .push(super::process::Artifact::TextAnnotation(
            TextAnnotation::new(eid("note1"), "review"),
        ));

    process
}

/// Two top-level lanes; the second nests a child lane set with one lane.
pub(crate) fn process_with_lanes() -> Process {
    let mut process = Process::new(pid("p1"));

    let mut lane_set = LaneSet::new(bid("ls1"));
    lane_set.lanes_mut().push(Lane::new(eid("lane-a")));

    let mut lane_b = Lane::new(eid("lane-b"));
    let mut child_set = LaneSet::new(bid("ls2"));
    child_set.lanes_mut().push(Lane::new(eid("lane-b-1")));
    lane_b.set_child_lane_set(Some(child_set));
    lane_set.lanes_mut().push(lane_b);

    process.lane_sets_mut().push(lane_set);
    process
}
