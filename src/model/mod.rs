// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The document tree.
//!
//! One `Definitions` per opened file, owned by the store and mutated in
//! place by the operations in [`crate::ops`].

pub mod definitions;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod io_spec;
pub mod process;

pub use definitions::{
    DataType, Definitions, ErrorDefinition, ItemDefinition, MessageDefinition, SharedDefinition,
    SignalDefinition,
};
pub use ids::{BaseId, DefinitionId, ElementId, Id, IdError, ProcessId, SlotId};
pub use io_spec::{
    Assignment, DataAssociation, DataIoDirection, DataSlot, Expression, IoSpecification, SlotSet,
};
pub use process::{
    Activity, ActivityKind, Artifact, Association, BusinessRuleImplementation, DataObject,
    Element, ElementNature, Event, EventDefinition, EventKind, Gateway, GatewayKind, Group, Lane,
    LaneSet, Process, SequenceFlow, SubProcess, SubProcessKind, TextAnnotation,
};
