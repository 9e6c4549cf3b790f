// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Proteus — document mutation engine for BPMN-style process models.
//!
//! The editor UI, XML marshalling, and diagram layout live elsewhere; this
//! crate owns the in-memory tree of one process-definition file and the
//! operations that rewrite it while preserving cross-referential integrity.

pub mod model;
pub mod ops;
pub mod query;
pub mod store;
