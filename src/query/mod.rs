// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only lookups over the document tree.

pub mod binding;

pub use binding::{
    data_io_binding, decision_model_binding, DataIoBinding, DecisionModelBinding,
    DECISION_FILE_PATH_SLOT, DECISION_MODEL_NAME_SLOT, DECISION_NAMESPACE_SLOT,
};
