// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Recursive walks over a process tree.
//!
//! Single-element lookups stop the walk at the first match instead of
//! scanning the rest of the tree; the control signal is explicit rather
//! than an easily-inverted boolean.

use tracing::trace;

use crate::model::{Artifact, Element, Lane, LaneSet, Process};

/// Returned by a visitor callback to continue or terminate the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitControl {
    Continue,
    Stop,
}

impl VisitControl {
    pub fn is_stop(self) -> bool {
        self == Self::Stop
    }
}

/// What a visitor callback currently points at: a flow element or an
/// artifact, both mutable in place.
#[derive(Debug)]
pub enum VisitedNode<'a> {
    Element(&'a mut Element),
    Artifact(&'a mut Artifact),
}

impl VisitedNode<'_> {
    pub fn id(&self) -> &crate::model::ElementId {
        match self {
            Self::Element(element) => element.id(),
            Self::Artifact(artifact) => artifact.id(),
        }
    }
}

/// Walks the process's element list in order, recursing into sub-process
/// children (elements, then artifacts) before continuing the sibling walk,
/// and finally walks the process-level artifact list. A `Stop` from the
/// callback terminates the whole walk immediately, at any depth.
pub fn visit_flow_elements_and_artifacts<F>(process: &mut Process, visit: &mut F) -> VisitControl
where
    F: FnMut(VisitedNode<'_>) -> VisitControl,
{
    trace!(process_id = %process.id(), "walking flow elements and artifacts");

    if walk_elements(process.elements_mut(), visit).is_stop() {
        return VisitControl::Stop;
    }
    walk_artifacts(process.artifacts_mut(), visit)
}

fn walk_elements<F>(elements: &mut [Element], visit: &mut F) -> VisitControl
where
    F: FnMut(VisitedNode<'_>) -> VisitControl,
{
    for element in elements {
        if visit(VisitedNode::Element(&mut *element)).is_stop() {
            return VisitControl::Stop;
        }
        if let Element::SubProcess(sub) = element {
            if walk_elements(sub.elements_mut(), visit).is_stop() {
                return VisitControl::Stop;
            }
            if walk_artifacts(sub.artifacts_mut(), visit).is_stop() {
                return VisitControl::Stop;
            }
        }
    }
    VisitControl::Continue
}

fn walk_artifacts<F>(artifacts: &mut [Artifact], visit: &mut F) -> VisitControl
where
    F: FnMut(VisitedNode<'_>) -> VisitControl,
{
    for artifact in artifacts {
        if visit(VisitedNode::Artifact(artifact)).is_stop() {
            return VisitControl::Stop;
        }
    }
    VisitControl::Continue
}

/// Walks every lane in every lane set, recursing into child lane sets.
/// Independent of the flow-element walk.
pub fn visit_lanes<F>(process: &mut Process, visit: &mut F) -> VisitControl
where
    F: FnMut(&mut Lane) -> VisitControl,
{
    trace!(process_id = %process.id(), "walking lanes");

    for lane_set in process.lane_sets_mut() {
        if walk_lane_set(lane_set, visit).is_stop() {
            return VisitControl::Stop;
        }
    }
    VisitControl::Continue
}

fn walk_lane_set<F>(lane_set: &mut LaneSet, visit: &mut F) -> VisitControl
where
    F: FnMut(&mut Lane) -> VisitControl,
{
    for lane in lane_set.lanes_mut() {
        if visit(lane).is_stop() {
            return VisitControl::Stop;
        }
        if let Some(child) = lane.child_lane_set_mut() {
            if walk_lane_set(child, visit).is_stop() {
                return VisitControl::Stop;
            }
        }
    }
    VisitControl::Continue
}
