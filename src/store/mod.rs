// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Document ownership and the batch boundary.
//!
//! The store owns one document for the lifetime of the opened file. All
//! mutation runs inside [`DocumentStore::batch`], which snapshots the tree
//! first: a batch that fails mid-way is rolled back wholesale, so observers
//! never see a partially-applied sequence of operations.

use std::fmt;

use tracing::debug;

use crate::model::Definitions;

type Observer = Box<dyn Fn(&Definitions, u64)>;

pub struct DocumentStore {
    definitions: Definitions,
    rev: u64,
    observers: Vec<Observer>,
}

impl fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentStore")
            .field("definitions", &self.definitions)
            .field("rev", &self.rev)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl DocumentStore {
    pub fn new(definitions: Definitions) -> Self {
        Self {
            definitions,
            rev: 0,
            observers: Vec::new(),
        }
    }

    pub fn definitions(&self) -> &Definitions {
        &self.definitions
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn into_definitions(self) -> Definitions {
        self.definitions
    }

    /// Registers an observer invoked after every committed batch with the
    /// document and its new revision.
    pub fn subscribe(&mut self, observer: impl Fn(&Definitions, u64) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Runs `f` against the owned document. On `Ok` the revision is bumped
    /// and observers are notified; on `Err` the pre-batch snapshot is
    /// restored and nothing is reported.
    pub fn batch<T, E>(
        &mut self,
        f: impl FnOnce(&mut Definitions) -> Result<T, E>,
    ) -> Result<T, E> {
        let snapshot = self.definitions.clone();

        match f(&mut self.definitions) {
            Ok(value) => {
                self.rev = self.rev.saturating_add(1);
                debug!(rev = self.rev, "batch committed");
                for observer in &self.observers {
                    observer(&self.definitions, self.rev);
                }
                Ok(value)
            }
            Err(error) => {
                self.definitions = snapshot;
                debug!("batch rolled back");
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::DocumentStore;
    use crate::model::fixtures::{definitions_with_business_rule_task, eid};
    use crate::ops::decision::{bind_decision_model, DecisionModelRef};
    use crate::ops::MutationError;

    fn model_ref() -> DecisionModelRef {
        DecisionModelRef {
            path: "a.dmn".to_owned(),
            namespace: "ns".to_owned(),
            model_name: "Model".to_owned(),
        }
    }

    #[test]
    fn committed_batch_bumps_rev_and_notifies() {
        let mut store = DocumentStore::new(definitions_with_business_rule_task("brt"));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |_, rev| sink.borrow_mut().push(rev));

        store
            .batch(|definitions| bind_decision_model(definitions, &eid("brt"), &model_ref()))
            .expect("batch");

        assert_eq!(store.rev(), 1);
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn failed_batch_is_rolled_back_wholesale() {
        let mut store = DocumentStore::new(definitions_with_business_rule_task("brt"));
        let before = store.definitions().clone();

        let missing = eid("no-such-task");
        let result = store.batch(|definitions| {
            // First step succeeds, second fails; neither must stick.
            bind_decision_model(definitions, &eid("brt"), &model_ref())?;
            bind_decision_model(definitions, &missing, &model_ref())
        });

        assert!(matches!(result, Err(MutationError::NotFound { .. })));
        assert_eq!(store.definitions(), &before);
        assert_eq!(store.rev(), 0);
    }

    #[test]
    fn failed_batch_does_not_notify_observers() {
        let mut store = DocumentStore::new(definitions_with_business_rule_task("brt"));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |_, rev| sink.borrow_mut().push(rev));

        let result: Result<(), MutationError> = store.batch(|definitions| {
            bind_decision_model(definitions, &eid("absent"), &model_ref())
        });

        assert!(result.is_err());
        assert!(seen.borrow().is_empty());
    }
}
