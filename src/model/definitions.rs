// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::{BaseId, DefinitionId};
use super::process::Process;

/// The document root: one opened process-definition file.
///
/// `shared_definitions` keeps insertion order because that order is also the
/// serialization order; mutation operations place new entries
/// deterministically so that repeated operations on an unchanged document
/// produce byte-identical output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Definitions {
    id: BaseId,
    name: Option<String>,
    target_namespace: String,
    #[serde(rename = "rootElement")]
    shared_definitions: Vec<SharedDefinition>,
    #[serde(rename = "process")]
    processes: Vec<Process>,
}

impl Definitions {
    pub fn new(id: BaseId, target_namespace: impl Into<String>) -> Self {
        Self {
            id,
            name: None,
            target_namespace: target_namespace.into(),
            shared_definitions: Vec::new(),
            processes: Vec::new(),
        }
    }

    pub fn id(&self) -> &BaseId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name<T: Into<String>>(&mut self, name: Option<T>) {
        self.name = name.map(Into::into);
    }

    pub fn target_namespace(&self) -> &str {
        &self.target_namespace
    }

    pub fn shared_definitions(&self) -> &[SharedDefinition] {
        &self.shared_definitions
    }

    pub fn shared_definitions_mut(&mut self) -> &mut Vec<SharedDefinition> {
        &mut self.shared_definitions
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn processes_mut(&mut self) -> &mut Vec<Process> {
        &mut self.processes
    }
}

/// A top-level, potentially multiply-referenced declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SharedDefinition {
    ItemDefinition(ItemDefinition),
    Message(MessageDefinition),
    Error(ErrorDefinition),
    Signal(SignalDefinition),
}

impl SharedDefinition {
    pub fn id(&self) -> &DefinitionId {
        match self {
            Self::ItemDefinition(d) => d.id(),
            Self::Message(d) => d.id(),
            Self::Error(d) => d.id(),
            Self::Signal(d) => d.id(),
        }
    }

    pub fn is_item_definition(&self) -> bool {
        matches!(self, Self::ItemDefinition(_))
    }

    pub fn as_item_definition(&self) -> Option<&ItemDefinition> {
        match self {
            Self::ItemDefinition(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_item_definition_mut(&mut self) -> Option<&mut ItemDefinition> {
        match self {
            Self::ItemDefinition(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_message(&self) -> Option<&MessageDefinition> {
        match self {
            Self::Message(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_message_mut(&mut self) -> Option<&mut MessageDefinition> {
        match self {
            Self::Message(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&ErrorDefinition> {
        match self {
            Self::Error(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_error_mut(&mut self) -> Option<&mut ErrorDefinition> {
        match self {
            Self::Error(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_signal(&self) -> Option<&SignalDefinition> {
        match self {
            Self::Signal(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_signal_mut(&mut self) -> Option<&mut SignalDefinition> {
        match self {
            Self::Signal(d) => Some(d),
            _ => None,
        }
    }
}

/// Declares a data structure usable by slots and messages (`itemDefinition`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDefinition {
    id: DefinitionId,
    structure_ref: String,
}

impl ItemDefinition {
    pub fn new(id: DefinitionId, structure_ref: impl Into<String>) -> Self {
        Self {
            id,
            structure_ref: structure_ref.into(),
        }
    }

    pub fn id(&self) -> &DefinitionId {
        &self.id
    }

    pub fn set_id(&mut self, id: DefinitionId) {
        self.id = id;
    }

    pub fn structure_ref(&self) -> &str {
        &self.structure_ref
    }

    pub fn set_structure_ref(&mut self, structure_ref: impl Into<String>) {
        self.structure_ref = structure_ref.into();
    }
}

/// A `message` definition. `item_ref` is an opaque reference the engine
/// derives from the message name but never resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDefinition {
    id: DefinitionId,
    item_ref: String,
    name: String,
}

impl MessageDefinition {
    pub fn new(id: DefinitionId, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            item_ref: format!("{name}Type"),
            id,
            name,
        }
    }

    pub fn id(&self) -> &DefinitionId {
        &self.id
    }

    pub fn item_ref(&self) -> &str {
        &self.item_ref
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the message, keeping the derived `item_ref` in step.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.item_ref = format!("{}Type", self.name);
    }
}

/// An `error` definition. The error code mirrors the id, as written by the
/// editor this engine serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDefinition {
    id: DefinitionId,
    error_code: String,
}

impl ErrorDefinition {
    pub fn new(id: DefinitionId) -> Self {
        Self {
            error_code: id.as_str().to_owned(),
            id,
        }
    }

    pub fn id(&self) -> &DefinitionId {
        &self.id
    }

    /// Rewrites id and error code together; they are kept identical.
    pub fn set_id(&mut self, id: DefinitionId) {
        self.error_code = id.as_str().to_owned();
        self.id = id;
    }

    pub fn error_code(&self) -> &str {
        &self.error_code
    }
}

/// A `signal` definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalDefinition {
    id: DefinitionId,
    name: String,
}

impl SignalDefinition {
    pub fn new(id: DefinitionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> &DefinitionId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

/// Well-known data types offered by the editor's type selector, with their
/// dialect spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Boolean,
    Float,
    Integer,
    Object,
    String,
}

impl DataType {
    pub fn structure_ref(self) -> &'static str {
        match self {
            Self::Boolean => "java.lang.Boolean",
            Self::Float => "java.lang.Float",
            Self::Integer => "java.lang.Integer",
            Self::Object => "java.lang.Object",
            Self::String => "java.lang.String",
        }
    }

    /// Deterministic id for the item definition backing this data type.
    pub fn item_definition_id(self) -> DefinitionId {
        let id = match self {
            Self::Boolean => "_booleanItem",
            Self::Float => "_floatItem",
            Self::Integer => "_integerItem",
            Self::Object => "_objectItem",
            Self::String => "_stringItem",
        };
        DefinitionId::new(id).expect("static item definition id")
    }
}

#[cfg(test)]
mod tests {
    use super::{DataType, ErrorDefinition, MessageDefinition};
    use crate::model::ids::DefinitionId;

    fn did(value: &str) -> DefinitionId {
        DefinitionId::new(value).expect("definition id")
    }

    #[test]
    fn message_keeps_item_ref_derived_from_name() {
        let mut message = MessageDefinition::new(did("m1"), "OrderPlaced");
        assert_eq!(message.item_ref(), "OrderPlacedType");

        message.set_name("OrderCancelled");
        assert_eq!(message.name(), "OrderCancelled");
        assert_eq!(message.item_ref(), "OrderCancelledType");
    }

    #[test]
    fn error_code_mirrors_id() {
        let mut error = ErrorDefinition::new(did("payment-failed"));
        assert_eq!(error.error_code(), "payment-failed");

        error.set_id(did("payment-declined"));
        assert_eq!(error.id(), &did("payment-declined"));
        assert_eq!(error.error_code(), "payment-declined");
    }

    #[test]
    fn data_type_ids_are_stable() {
        for data_type in [
            DataType::Boolean,
            DataType::Float,
            DataType::Integer,
            DataType::Object,
            DataType::String,
        ] {
            assert_eq!(data_type.item_definition_id(), data_type.item_definition_id());
            assert!(data_type.structure_ref().starts_with("java.lang."));
        }
    }
}
