// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::{BaseId, DefinitionId, SlotId};

/// Which side of an element's I/O surface an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataIoDirection {
    Input,
    Output,
}

impl DataIoDirection {
    /// Suffix appended to derived slot ids, matching the dialect's
    /// `_<owner>_<name>InputX` spelling.
    pub fn slot_id_suffix(self) -> &'static str {
        match self {
            Self::Input => "InputX",
            Self::Output => "OutputX",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
        }
    }
}

/// An element's declared set of typed input/output slots and their grouping
/// into sets. Serialized as `ioSpecification`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IoSpecification {
    id: BaseId,
    #[serde(rename = "dataInput")]
    data_inputs: Vec<DataSlot>,
    #[serde(rename = "dataOutput")]
    data_outputs: Vec<DataSlot>,
    #[serde(rename = "inputSet")]
    input_sets: Vec<SlotSet>,
    #[serde(rename = "outputSet")]
    output_sets: Vec<SlotSet>,
}

impl IoSpecification {
    pub fn new(id: BaseId) -> Self {
        Self {
            id,
            data_inputs: Vec::new(),
            data_outputs: Vec::new(),
            input_sets: Vec::new(),
            output_sets: Vec::new(),
        }
    }

    pub fn id(&self) -> &BaseId {
        &self.id
    }

    pub fn data_inputs(&self) -> &[DataSlot] {
        &self.data_inputs
    }

    pub fn data_inputs_mut(&mut self) -> &mut Vec<DataSlot> {
        &mut self.data_inputs
    }

    pub fn data_outputs(&self) -> &[DataSlot] {
        &self.data_outputs
    }

    pub fn data_outputs_mut(&mut self) -> &mut Vec<DataSlot> {
        &mut self.data_outputs
    }

    pub fn input_sets(&self) -> &[SlotSet] {
        &self.input_sets
    }

    pub fn input_sets_mut(&mut self) -> &mut Vec<SlotSet> {
        &mut self.input_sets
    }

    pub fn output_sets(&self) -> &[SlotSet] {
        &self.output_sets
    }

    pub fn output_sets_mut(&mut self) -> &mut Vec<SlotSet> {
        &mut self.output_sets
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

    /// Mutable access to one side's slot list and set list at once, for
    /// callers that keep both consistent in a single pass.
    pub fn side_mut(
        &mut self,
        direction: DataIoDirection,
    ) -> (&mut Vec<DataSlot>, &mut Vec<SlotSet>) {
        match direction {
            DataIoDirection::Input => (&mut self.data_inputs, &mut self.input_sets),
            DataIoDirection::Output => (&mut self.data_outputs, &mut self.output_sets),
        }
    }
}

/// A single typed input or output declaration (`dataInput` / `dataOutput`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSlot {
    id: SlotId,
    name: Option<String>,
    item_subject_ref: Option<DefinitionId>,
    /// Vendor typing hint (`drools:dtype`), passed through opaquely.
    dtype: Option<String>,
}

impl DataSlot {
    pub fn new(id: SlotId) -> Self {
        Self {
            id,
            name: None,
            item_subject_ref: None,
            dtype: None,
        }
    }

    pub fn new_with(id: SlotId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            item_subject_ref: None,
            dtype: None,
        }
    }

    pub fn id(&self) -> &SlotId {
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

    pub fn dtype(&self) -> Option<&str> {
        self.dtype.as_deref()
    }

    pub fn set_dtype<T: Into<String>>(&mut self, dtype: Option<T>) {
        self.dtype = dtype.map(Into::into);
    }
}

/// A named grouping of slot ids (`inputSet` / `outputSet`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotSet {
    id: BaseId,
    slot_refs: Vec<SlotId>,
}

impl SlotSet {
    pub fn new(id: BaseId) -> Self {
        Self {
            id,
            slot_refs: Vec::new(),
        }
    }

    pub fn id(&self) -> &BaseId {
        &self.id
    }

    pub fn slot_refs(&self) -> &[SlotId] {
        &self.slot_refs
    }

    pub fn slot_refs_mut(&mut self) -> &mut Vec<SlotId> {
        &mut self.slot_refs
    }

    pub fn contains(&self, slot_id: &SlotId) -> bool {
        self.slot_refs.iter().any(|r| r == slot_id)
    }
}

/// Directed wiring between a slot and a literal/expression value.
///
/// The slot end serializes as `targetRef` on input associations and as
/// `sourceRef` on output associations; which one applies is implied by the
/// owning list on the element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataAssociation {
    id: BaseId,
    slot_ref: SlotId,
    #[serde(rename = "assignment")]
    assignments: Vec<Assignment>,
}

impl DataAssociation {
    pub fn new(id: BaseId, slot_ref: SlotId) -> Self {
        Self {
            id,
            slot_ref,
            assignments: Vec::new(),
        }
    }

    pub fn id(&self) -> &BaseId {
        &self.id
    }

    pub fn slot_ref(&self) -> &SlotId {
        &self.slot_ref
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn assignments_mut(&mut self) -> &mut Vec<Assignment> {
        &mut self.assignments
    }
}

/// A `from`/`to` expression pair inside a data association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    id: BaseId,
    from: Expression,
    to: Expression,
}

impl Assignment {
    pub fn new(id: BaseId, from: Expression, to: Expression) -> Self {
        Self { id, from, to }
    }

    pub fn id(&self) -> &BaseId {
        &self.id
    }

    pub fn from(&self) -> &Expression {
        &self.from
    }

    pub fn from_mut(&mut self) -> &mut Expression {
        &mut self.from
    }

    pub fn to(&self) -> &Expression {
        &self.to
    }

    pub fn to_mut(&mut self) -> &mut Expression {
        &mut self.to
    }
}

/// A formal-expression literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expression {
    id: BaseId,
    text: String,
}

impl Expression {
    pub fn new(id: BaseId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    pub fn id(&self) -> &BaseId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

#[cfg(test)]
mod tests {
    use super::{DataIoDirection, DataSlot, IoSpecification, SlotSet};
    use crate::model::ids::{BaseId, SlotId};

    fn bid(value: &str) -> BaseId {
        BaseId::new(value).expect("base id")
    }

    fn sid(value: &str) -> SlotId {
        SlotId::new(value).expect("slot id")
    }

    #[test]
    fn io_specification_sides_are_independent() {
        let mut io = IoSpecification::new(bid("t1_ioSpec"));

        io.data_inputs_mut()
            .push(DataSlot::new_with(sid("t1_aInputX"), "a"));
        io.input_sets_mut().push(SlotSet::new(bid("t1_inputSetX")));

        assert_eq!(io.slots(DataIoDirection::Input).len(), 1);
        assert_eq!(io.sets(DataIoDirection::Input).len(), 1);
        assert!(io.slots(DataIoDirection::Output).is_empty());
        assert!(io.sets(DataIoDirection::Output).is_empty());

        let (slots, sets) = io.side_mut(DataIoDirection::Output);
        slots.push(DataSlot::new_with(sid("t1_bOutputX"), "b"));
        sets.push(SlotSet::new(bid("t1_outputSetX")));
        assert_eq!(io.data_outputs().len(), 1);
        assert_eq!(io.output_sets().len(), 1);
    }

    #[test]
    fn slot_set_contains_by_id() {
        let mut set = SlotSet::new(bid("s"));
        set.slot_refs_mut().push(sid("x"));

        assert!(set.contains(&sid("x")));
        assert!(!set.contains(&sid("y")));
    }

    #[test]
    fn io_specification_serializes_with_dialect_names() {
        let io = IoSpecification::new(bid("t1_ioSpec"));
        let json = serde_json::to_value(&io).expect("serialize");

        assert!(json.get("dataInput").is_some());
        assert!(json.get("dataOutput").is_some());
        assert!(json.get("inputSet").is_some());
        assert!(json.get("outputSet").is_some());
    }
}
