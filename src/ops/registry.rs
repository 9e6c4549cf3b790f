// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Find-or-create over the document's shared top-level definitions.
//!
//! These operations cannot fail: absence of a match always yields a
//! construction. Placement is deterministic because the list order is also
//! the serialization order — item definitions go to the head, everything
//! else lands immediately after the item-definition block.

use tracing::debug;

use crate::model::{
    DataType, DefinitionId, Definitions, ErrorDefinition, ItemDefinition, MessageDefinition,
    Process, ProcessId, SharedDefinition, SignalDefinition,
};

/// First process of the document, created with a default id if the document
/// has none yet.
pub fn upsert_process(definitions: &mut Definitions) -> &mut Process {
    if definitions.processes().is_empty() {
        debug!("creating default process");
        definitions
            .processes_mut()
            .push(Process::new(
                ProcessId::new("_defaultProcess").expect("static process id"),
            ));
    }
    &mut definitions.processes_mut()[0]
}

/// Finds an item definition by `old_id` and rewrites its id/structure in
/// place; constructs one at the head of the shared-definition list
/// otherwise.
///
/// The in-place id rewrite does not cascade to elements referencing the old
/// id; callers renaming a multiply-referenced definition own that walk.
pub fn upsert_item_definition<'a>(
    definitions: &'a mut Definitions,
    old_id: &DefinitionId,
    new_id: Option<DefinitionId>,
    structure_ref: Option<&str>,
) -> &'a mut ItemDefinition {
    let position = definitions
        .shared_definitions()
        .iter()
        .position(|entry| matches!(entry.as_item_definition(), Some(d) if d.id() == old_id));

    let index = match position {
        Some(index) => {
            let existing = definitions.shared_definitions_mut()[index]
                .as_item_definition_mut()
                .expect("position matched an item definition");
            if let Some(new_id) = new_id {
                existing.set_id(new_id);
            }
            if let Some(structure_ref) = structure_ref {
                existing.set_structure_ref(structure_ref);
            }
            index
        }
        None => {
            let id = new_id.unwrap_or_else(|| old_id.clone());
            debug!(id = %id, "inserting item definition");
            definitions.shared_definitions_mut().insert(
                0,
                SharedDefinition::ItemDefinition(ItemDefinition::new(
                    id,
                    structure_ref.unwrap_or_default(),
                )),
            );
            0
        }
    };

    definitions.shared_definitions_mut()[index]
        .as_item_definition_mut()
        .expect("index points at an item definition")
}

/// Finds an item definition by the semantic data-type name; constructs one
/// with the type's deterministic id otherwise.
pub fn upsert_item_definition_for_data_type(
    definitions: &mut Definitions,
    data_type: DataType,
) -> &mut ItemDefinition {
    let position = definitions.shared_definitions().iter().position(|entry| {
        matches!(entry.as_item_definition(), Some(d) if d.structure_ref() == data_type.structure_ref())
    });

    let index = match position {
        Some(index) => index,
        None => {
            debug!(structure_ref = data_type.structure_ref(), "inserting item definition");
            definitions.shared_definitions_mut().insert(
                0,
                SharedDefinition::ItemDefinition(ItemDefinition::new(
                    data_type.item_definition_id(),
                    data_type.structure_ref(),
                )),
            );
            0
        }
    };

    definitions.shared_definitions_mut()[index]
        .as_item_definition_mut()
        .expect("index points at an item definition")
}

/// Finds a message by id and rewrites its name (and derived item ref);
/// constructs one after the item-definition block otherwise.
pub fn upsert_message<'a>(
    definitions: &'a mut Definitions,
    id: &DefinitionId,
    name: &str,
) -> &'a mut MessageDefinition {
    let position = definitions
        .shared_definitions()
        .iter()
        .position(|entry| matches!(entry.as_message(), Some(m) if m.id() == id));

    let index = match position {
        Some(index) => {
            let existing = definitions.shared_definitions_mut()[index]
                .as_message_mut()
                .expect("position matched a message");
            existing.set_name(name);
            index
        }
        None => {
            let index = item_definition_block_len(definitions);
            debug!(id = %id, name, "inserting message");
            definitions.shared_definitions_mut().insert(
                index,
                SharedDefinition::Message(MessageDefinition::new(id.clone(), name)),
            );
            index
        }
    };

    definitions.shared_definitions_mut()[index]
        .as_message_mut()
        .expect("index points at a message")
}

/// Finds an error by `old_id` and rewrites its id (the error code follows);
/// constructs one after the item-definition block otherwise.
pub fn upsert_error<'a>(
    definitions: &'a mut Definitions,
    old_id: &DefinitionId,
    new_id: Option<DefinitionId>,
) -> &'a mut ErrorDefinition {
    let effective_id = new_id.unwrap_or_else(|| old_id.clone());

    let position = definitions
        .shared_definitions()
        .iter()
        .position(|entry| matches!(entry.as_error(), Some(e) if e.id() == old_id));

    let index = match position {
        Some(index) => {
            let existing = definitions.shared_definitions_mut()[index]
                .as_error_mut()
                .expect("position matched an error");
            existing.set_id(effective_id);
            index
        }
        None => {
            let index = item_definition_block_len(definitions);
            debug!(id = %effective_id, "inserting error");
            definitions.shared_definitions_mut().insert(
                index,
                SharedDefinition::Error(ErrorDefinition::new(effective_id)),
            );
            index
        }
    };

    definitions.shared_definitions_mut()[index]
        .as_error_mut()
        .expect("index points at an error")
}

/// Finds a signal by id and rewrites its name; constructs one after the
/// item-definition block otherwise.
pub fn upsert_signal<'a>(
    definitions: &'a mut Definitions,
    id: &DefinitionId,
    name: &str,
) -> &'a mut SignalDefinition {
    let position = definitions
        .shared_definitions()
        .iter()
        .position(|entry| matches!(entry.as_signal(), Some(s) if s.id() == id));

    let index = match position {
        Some(index) => {
            let existing = definitions.shared_definitions_mut()[index]
                .as_signal_mut()
                .expect("position matched a signal");
            existing.set_name(name);
            index
        }
        None => {
            let index = item_definition_block_len(definitions);
            debug!(id = %id, name, "inserting signal");
            definitions.shared_definitions_mut().insert(
                index,
                SharedDefinition::Signal(SignalDefinition::new(id.clone(), name)),
            );
            index
        }
    };

    definitions.shared_definitions_mut()[index]
        .as_signal_mut()
        .expect("index points at a signal")
}

fn item_definition_block_len(definitions: &Definitions) -> usize {
    definitions
        .shared_definitions()
        .iter()
        .filter(|entry| entry.is_item_definition())
        .count()
}
