// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::{BaseId, DefinitionId, ElementId, ProcessId};
use super::io_spec::{DataAssociation, DataIoDirection, DataSlot, IoSpecification, SlotSet};

/// One process inside the document. Flow elements, artifacts, and lane sets
/// are ordered lists; the tree below them is recursively nested through
/// sub-processes, not flat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    id: ProcessId,
    name: Option<String>,
    is_executable: bool,
    #[serde(rename = "flowElement")]
    elements: Vec<Element>,
    #[serde(rename = "artifact")]
    artifacts: Vec<Artifact>,
    #[serde(rename = "laneSet")]
    lane_sets: Vec<LaneSet>,
}

impl Process {
    pub fn new(id: ProcessId) -> Self {
        Self {
            id,
            name: None,
            is_executable: true,
            elements: Vec::new(),
            artifacts: Vec::new(),
            lane_sets: Vec::new(),
        }
    }

    pub fn id(&self) -> &ProcessId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name<T: Into<String>>(&mut self, name: Option<T>) {
        self.name = name.map(Into::into);
    }

    pub fn is_executable(&self) -> bool {
        self.is_executable
    }

    pub fn set_is_executable(&mut self, is_executable: bool) {
        self.is_executable = is_executable;
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut Vec<Element> {
        &mut self.elements
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn artifacts_mut(&mut self) -> &mut Vec<Artifact> {
        &mut self.artifacts
    }

    pub fn lane_sets(&self) -> &[LaneSet] {
        &self.lane_sets
    }

    pub fn lane_sets_mut(&mut self) -> &mut Vec<LaneSet> {
        &mut self.lane_sets
    }
}

/// A node in a process, discriminated by a tagged variant rather than a
/// free-form kind string so consumption sites match exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Element {
    Activity(Activity),
    SubProcess(SubProcess),
    Event(Event),
    Gateway(Gateway),
    SequenceFlow(SequenceFlow),
    DataObject(DataObject),
}

impl Element {
    pub fn id(&self) -> &ElementId {
        match self {
            Self::Activity(e) => e.id(),
            Self::SubProcess(e) => e.id(),
            Self::Event(e) => e.id(),
            Self::Gateway(e) => e.id(),
            Self::SequenceFlow(e) => e.id(),
            Self::DataObject(e) => e.id(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Activity(e) => e.name(),
            Self::SubProcess(e) => e.name(),
            Self::Event(e) => e.name(),
            Self::Gateway(e) => e.name(),
            Self::SequenceFlow(e) => e.name(),
            Self::DataObject(e) => e.name(),
        }
    }

    pub fn nature(&self) -> ElementNature {
        match self {
            Self::DataObject(_) => ElementNature::TopLevel,
            Self::Activity(_)
            | Self::SubProcess(_)
            | Self::Event(_)
            | Self::Gateway(_)
            | Self::SequenceFlow(_) => ElementNature::ProcessFlowElement,
        }
    }

    pub fn as_activity(&self) -> Option<&Activity> {
        match self {
            Self::Activity(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_activity_mut(&mut self) -> Option<&mut Activity> {
        match self {
            Self::Activity(e) => Some(e),
            _ => None,
        }
    }
}

/// Where a node lives structurally; used by add/remove plumbing to decide
/// which list owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementNature {
    TopLevel,
    ProcessFlowElement,
    Artifact,
}

/// Task-like flow element, including call activities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    id: ElementId,
    name: Option<String>,
    kind: ActivityKind,
    io_specification: Option<IoSpecification>,
    #[serde(rename = "dataInputAssociation")]
    data_input_associations: Vec<DataAssociation>,
    #[serde(rename = "dataOutputAssociation")]
    data_output_associations: Vec<DataAssociation>,
}

impl Activity {
    pub fn new(id: ElementId, kind: ActivityKind) -> Self {
        Self {
            id,
            name: None,
            kind,
            io_specification: None,
            data_input_associations: Vec::new(),
            data_output_associations: Vec::new(),
        }
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name<T: Into<String>>(&mut self, name: Option<T>) {
        self.name = name.map(Into::into);
    }

    pub fn kind(&self) -> &ActivityKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut ActivityKind {
        &mut self.kind
    }

    pub fn io_specification(&self) -> Option<&IoSpecification> {
        self.io_specification.as_ref()
    }

    pub fn io_specification_mut(&mut self) -> &mut Option<IoSpecification> {
        &mut self.io_specification
    }

    pub fn data_input_associations(&self) -> &[DataAssociation] {
        &self.data_input_associations
    }

    pub fn data_input_associations_mut(&mut self) -> &mut Vec<DataAssociation> {
        &mut self.data_input_associations
    }

    pub fn data_output_associations(&self) -> &[DataAssociation] {
        &self.data_output_associations
    }

    pub fn data_output_associations_mut(&mut self) -> &mut Vec<DataAssociation> {
        &mut self.data_output_associations
    }

    pub fn associations(&self, direction: DataIoDirection) -> &[DataAssociation] {
        match direction {
            DataIoDirection::Input => &self.data_input_associations,
            DataIoDirection::Output => &self.data_output_associations,
        }
    }

    pub fn associations_mut(&mut self, direction: DataIoDirection) -> &mut Vec<DataAssociation> {
        match direction {
            DataIoDirection::Input => &mut self.data_input_associations,
            DataIoDirection::Output => &mut self.data_output_associations,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityKind {
    Task,
    UserTask,
    ScriptTask,
    ServiceTask,
    BusinessRuleTask {
        implementation: BusinessRuleImplementation,
    },
    CallActivity {
        called_element: Option<String>,
    },
}

/// How a business-rule task is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BusinessRuleImplementation {
    Drools,
    Dmn,
}

impl BusinessRuleImplementation {
    pub fn as_uri(self) -> &'static str {
        match self {
            Self::Drools => "http://www.jboss.org/drools/rule",
            Self::Dmn => "http://www.jboss.org/drools/dmn",
        }
    }
}

/// A sub-process: a flow element that recursively owns its own nested
/// element/artifact lists, in addition to the usual activity I/O surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubProcess {
    id: ElementId,
    name: Option<String>,
    kind: SubProcessKind,
    io_specification: Option<IoSpecification>,
    #[serde(rename = "dataInputAssociation")]
    data_input_associations: Vec<DataAssociation>,
    #[serde(rename = "dataOutputAssociation")]
    data_output_associations: Vec<DataAssociation>,
    #[serde(rename = "flowElement")]
    elements: Vec<Element>,
    #[serde(rename = "artifact")]
    artifacts: Vec<Artifact>,
}

impl SubProcess {
    pub fn new(id: ElementId, kind: SubProcessKind) -> Self {
        Self {
            id,
            name: None,
            kind,
            io_specification: None,
            data_input_associations: Vec::new(),
            data_output_associations: Vec::new(),
            elements: Vec::new(),
            artifacts: Vec::new(),
        }
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name<T: Into<String>>(&mut self, name: Option<T>) {
        self.name = name.map(Into::into);
    }

    pub fn kind(&self) -> SubProcessKind {
        self.kind
    }

    pub fn io_specification(&self) -> Option<&IoSpecification> {
        self.io_specification.as_ref()
    }

    pub fn io_specification_mut(&mut self) -> &mut Option<IoSpecification> {
        &mut self.io_specification
    }

    pub fn data_input_associations(&self) -> &[DataAssociation] {
        &self.data_input_associations
    }

    pub fn data_input_associations_mut(&mut self) -> &mut Vec<DataAssociation> {
        &mut self.data_input_associations
    }

    pub fn data_output_associations(&self) -> &[DataAssociation] {
        &self.data_output_associations
    }

    pub fn data_output_associations_mut(&mut self) -> &mut Vec<DataAssociation> {
        &mut self.data_output_associations
    }

    pub fn associations(&self, direction: DataIoDirection) -> &[DataAssociation] {
        match direction {
            DataIoDirection::Input => &self.data_input_associations,
            DataIoDirection::Output => &self.data_output_associations,
        }
    }

    pub fn associations_mut(&mut self, direction: DataIoDirection) -> &mut Vec<DataAssociation> {
        match direction {
            DataIoDirection::Input => &mut self.data_input_associations,
            DataIoDirection::Output => &mut self.data_output_associations,
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut Vec<Element> {
        &mut self.elements
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn artifacts_mut(&mut self) -> &mut Vec<Artifact> {
        &mut self.artifacts
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubProcessKind {
    Embedded,
    AdHoc,
    Event,
}

/// An event node. In the dialect, events carry their slots directly instead
/// of wrapping them in an `ioSpecification`: throw-side events own data
/// inputs, catch-side events own data outputs. Both sides exist here; only
/// the side matching [`EventKind::is_throw`]/[`EventKind::is_catch`] is
/// meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    id: ElementId,
    name: Option<String>,
    kind: EventKind,
    #[serde(rename = "eventDefinition")]
    event_definitions: Vec<EventDefinition>,
    #[serde(rename = "dataInput")]
    data_inputs: Vec<DataSlot>,
    #[serde(rename = "inputSet")]
    input_sets: Vec<SlotSet>,
    #[serde(rename = "dataInputAssociation")]
    data_input_associations: Vec<DataAssociation>,
    #[serde(rename = "dataOutput")]
    data_outputs: Vec<DataSlot>,
    #[serde(rename = "outputSet")]
    output_sets: Vec<SlotSet>,
    #[serde(rename = "dataOutputAssociation")]
    data_output_associations: Vec<DataAssociation>,
}

impl Event {
    pub fn new(id: ElementId, kind: EventKind) -> Self {
        Self {
            id,
            name: None,
            kind,
            event_definitions: Vec::new(),
            data_inputs: Vec::new(),
            input_sets: Vec::new(),
            data_input_associations: Vec::new(),
            data_outputs: Vec::new(),
            output_sets: Vec::new(),
            data_output_associations: Vec::new(),
        }
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name<T: Into<String>>(&mut self, name: Option<T>) {
        self.name = name.map(Into::into);
    }

    pub fn kind(&self) -> &EventKind {
        &self.kind
    }

    pub fn event_definitions(&self) -> &[EventDefinition] {
        &self.event_definitions
    }

    pub fn event_definitions_mut(&mut self) -> &mut Vec<EventDefinition> {
        &mut self.event_definitions
    }

    pub fn slots(&self, direction: DataIoDirection) -> &[DataSlot] {
        match direction {
            DataIoDirection::Input => &self.data_inputs,
            DataIoDirection::Output => &self.data_outputs,
        }
    }

    pub fn sets(&self, direction: DataIoDirection) -> &[SlotSet] {
        match direction {
            DataIoDirection::Input => &self.input_sets,
            DataIoDirection::Output => &self.output_sets,
        }
    }

    pub fn associations(&self, direction: DataIoDirection) -> &[DataAssociation] {
        match direction {
            DataIoDirection::Input => &self.data_input_associations,
            DataIoDirection::Output => &self.data_output_associations,
        }
    }

    /// Mutable access to one side's slot, set, and association lists in a
    /// single borrow split.
    pub fn side_mut(
        &mut self,
        direction: DataIoDirection,
    ) -> (
        &mut Vec<DataSlot>,
        &mut Vec<SlotSet>,
        &mut Vec<DataAssociation>,
    ) {
        match direction {
            DataIoDirection::Input => (
                &mut self.data_inputs,
                &mut self.input_sets,
                &mut self.data_input_associations,
            ),
            DataIoDirection::Output => (
                &mut self.data_outputs,
                &mut self.output_sets,
                &mut self.data_output_associations,
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    Start,
    End,
    Boundary { attached_to: ElementId },
    IntermediateCatch,
    IntermediateThrow,
}

impl EventKind {
    /// Catch-side events produce data, so they own the output surface.
    pub fn is_catch(&self) -> bool {
        matches!(
            self,
            Self::Start | Self::Boundary { .. } | Self::IntermediateCatch
        )
    }

    /// Throw-side events consume data, so they own the input surface.
    pub fn is_throw(&self) -> bool {
        matches!(self, Self::End | Self::IntermediateThrow)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventDefinition {
    Message { message_ref: Option<DefinitionId> },
    Error { error_ref: Option<DefinitionId> },
    Signal { signal_ref: Option<DefinitionId> },
    Timer,
    Link { name: String },
    Terminate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gateway {
    id: ElementId,
    name: Option<String>,
    kind: GatewayKind,
}

impl Gateway {
    pub fn new(id: ElementId, kind: GatewayKind) -> Self {
        Self {
            id,
            name: None,
            kind,
        }
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name<T: Into<String>>(&mut self, name: Option<T>) {
        self.name = name.map(Into::into);
    }

    pub fn kind(&self) -> GatewayKind {
        self.kind
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GatewayKind {
    Exclusive,
    Parallel,
    Inclusive,
    EventBased,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceFlow {
    id: ElementId,
    name: Option<String>,
    source_ref: ElementId,
    target_ref: ElementId,
}

impl SequenceFlow {
    pub fn new(id: ElementId, source_ref: ElementId, target_ref: ElementId) -> Self {
        Self {
            id,
            name: None,
            source_ref,
            target_ref,
        }
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name<T: Into<String>>(&mut self, name: Option<T>) {
        self.name = name.map(Into::into);
    }

    pub fn source_ref(&self) -> &ElementId {
        &self.source_ref
    }

    pub fn target_ref(&self) -> &ElementId {
        &self.target_ref
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataObject {
    id: ElementId,
    name: Option<String>,
    item_subject_ref: Option<DefinitionId>,
}

impl DataObject {
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            name: None,
            item_subject_ref: None,
        }
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name<T: Into<String>>(&mut self, name: Option<T>) {
        self.name = name.map(Into::into);
    }

    pub fn item_subject_ref(&self) -> Option<&DefinitionId> {
        self.item_subject_ref.as_ref()
    }

    pub fn set_item_subject_ref(&mut self, item_subject_ref: Option<DefinitionId>) {
        self.item_subject_ref = item_subject_ref;
    }
}

/// Non-flow diagram content: associations, annotations, groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Artifact {
    Association(Association),
    TextAnnotation(TextAnnotation),
    Group(Group),
}

impl Artifact {
    pub fn id(&self) -> &ElementId {
        match self {
            Self::Association(a) => a.id(),
            Self::TextAnnotation(a) => a.id(),
            Self::Group(a) => a.id(),
        }
    }

    pub fn nature(&self) -> ElementNature {
        ElementNature::Artifact
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Association {
    id: ElementId,
    source_ref: ElementId,
    target_ref: ElementId,
}

impl Association {
    pub fn new(id: ElementId, source_ref: ElementId, target_ref: ElementId) -> Self {
        Self {
            id,
            source_ref,
            target_ref,
        }
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn source_ref(&self) -> &ElementId {
        &self.source_ref
    }

    pub fn target_ref(&self) -> &ElementId {
        &self.target_ref
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnnotation {
    id: ElementId,
    text: String,
}

impl TextAnnotation {
    pub fn new(id: ElementId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    id: ElementId,
    name: Option<String>,
}

impl Group {
    pub fn new(id: ElementId) -> Self {
        Self { id, name: None }
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name<T: Into<String>>(&mut self, name: Option<T>) {
        self.name = name.map(Into::into);
    }
}

/// A lane container. Lanes nest through `child_lane_set`, independently of
/// the flow-element tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneSet {
    id: BaseId,
    #[serde(rename = "lane")]
    lanes: Vec<Lane>,
}

impl LaneSet {
    pub fn new(id: BaseId) -> Self {
        Self {
            id,
            lanes: Vec::new(),
        }
    }

    pub fn id(&self) -> &BaseId {
        &self.id
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn lanes_mut(&mut self) -> &mut Vec<Lane> {
        &mut self.lanes
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lane {
    id: ElementId,
    name: Option<String>,
    #[serde(rename = "flowNodeRef")]
    flow_node_refs: Vec<ElementId>,
    child_lane_set: Option<Box<LaneSet>>,
}

impl Lane {
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            name: None,
            flow_node_refs: Vec::new(),
            child_lane_set: None,
        }
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name<T: Into<String>>(&mut self, name: Option<T>) {
        self.name = name.map(Into::into);
    }

    pub fn flow_node_refs(&self) -> &[ElementId] {
        &self.flow_node_refs
    }

    pub fn flow_node_refs_mut(&mut self) -> &mut Vec<ElementId> {
        &mut self.flow_node_refs
    }

    pub fn child_lane_set(&self) -> Option<&LaneSet> {
        self.child_lane_set.as_deref()
    }

    pub fn child_lane_set_mut(&mut self) -> Option<&mut LaneSet> {
        self.child_lane_set.as_deref_mut()
    }

    pub fn set_child_lane_set(&mut self, lane_set: Option<LaneSet>) {
        self.child_lane_set = lane_set.map(Box::new);
    }

    pub fn nature(&self) -> ElementNature {
        ElementNature::TopLevel
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Activity, ActivityKind, BusinessRuleImplementation, Element, ElementNature, Event,
        EventKind, Gateway, GatewayKind,
    };
    use crate::model::ids::ElementId;
    use crate::model::io_spec::DataIoDirection;

    fn eid(value: &str) -> ElementId {
        ElementId::new(value).expect("element id")
    }

    #[test]
    fn element_exposes_id_across_variants() {
        let task = Element::Activity(Activity::new(eid("t1"), ActivityKind::UserTask));
        let gateway = Element::Gateway(Gateway::new(eid("g1"), GatewayKind::Exclusive));

        assert_eq!(task.id(), &eid("t1"));
        assert_eq!(gateway.id(), &eid("g1"));
    }

    #[test]
    fn nature_classifies_data_objects_as_top_level() {
        let data_object =
            Element::DataObject(super::DataObject::new(eid("do1")));
        let task = Element::Activity(Activity::new(eid("t1"), ActivityKind::Task));

        assert_eq!(data_object.nature(), ElementNature::TopLevel);
        assert_eq!(task.nature(), ElementNature::ProcessFlowElement);
    }

    #[test]
    fn event_kind_sides_do_not_overlap() {
        let kinds = [
            EventKind::Start,
            EventKind::End,
            EventKind::Boundary {
                attached_to: eid("t1"),
            },
            EventKind::IntermediateCatch,
            EventKind::IntermediateThrow,
        ];

        for kind in kinds {
            assert_ne!(kind.is_catch(), kind.is_throw());
        }
    }

    #[test]
    fn event_side_mut_targets_the_requested_side() {
        let mut event = Event::new(eid("e1"), EventKind::IntermediateThrow);
        let (slots, sets, associations) = event.side_mut(DataIoDirection::Input);
        assert!(slots.is_empty());
        assert!(sets.is_empty());
        assert!(associations.is_empty());

        assert!(event.slots(DataIoDirection::Output).is_empty());
    }

    #[test]
    fn business_rule_implementation_uris_are_stable() {
        assert_eq!(
            BusinessRuleImplementation::Drools.as_uri(),
            "http://www.jboss.org/drools/rule"
        );
        assert_eq!(
            BusinessRuleImplementation::Dmn.as_uri(),
            "http://www.jboss.org/drools/dmn"
        );
    }
}
