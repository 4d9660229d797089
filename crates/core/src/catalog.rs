//! Typed, validated collection of experiments keyed by id.

use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::{Experiment, ExperimentId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("duplicate experiment id in catalog: {id}")]
    DuplicateId { id: ExperimentId },
}

/// Read-only mapping from [`ExperimentId`] to [`Experiment`].
///
/// Built once at load time; duplicate ids are rejected, and experiments with
/// empty step lists are unrepresentable by construction. Iteration order is
/// deterministic (sorted by id).
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    experiments: BTreeMap<ExperimentId, Experiment>,
}

impl Catalog {
    /// Builds a catalog from a list of experiments.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two experiments share an id.
    pub fn new(experiments: Vec<Experiment>) -> Result<Self, CatalogError> {
        let mut map = BTreeMap::new();
        for experiment in experiments {
            let id = experiment.id().clone();
            if map.insert(id.clone(), experiment).is_some() {
                return Err(CatalogError::DuplicateId { id });
            }
        }
        Ok(Self { experiments: map })
    }

    #[must_use]
    pub fn get(&self, id: &ExperimentId) -> Option<&Experiment> {
        self.experiments.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &ExperimentId) -> bool {
        self.experiments.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.experiments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }

    /// Iterates over experiments in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Experiment> {
        self.experiments.values()
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, ExperimentMeta, SafetyLevel, Step};

    fn experiment(id: &str) -> Experiment {
        Experiment::new(
            ExperimentId::new(id).unwrap(),
            "Demo",
            "desc",
            ExperimentMeta::new(Difficulty::Beginner, "10 min", SafetyLevel::Low, "Demo"),
            vec![],
            vec![],
            vec![Step::new(0, "Only step", "desc", vec!["go".into()], vec![], "done", vec![])
                .unwrap()],
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn catalog_rejects_duplicate_ids() {
        let err = Catalog::new(vec![experiment("demo"), experiment("demo")]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateId {
                id: ExperimentId::new("demo").unwrap()
            }
        );
    }

    #[test]
    fn catalog_looks_up_by_id() {
        let catalog = Catalog::new(vec![experiment("alpha"), experiment("beta")]).unwrap();
        let id = ExperimentId::new("alpha").unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains(&id));
        assert_eq!(catalog.get(&id).unwrap().id(), &id);
        assert!(catalog.get(&ExperimentId::new("gamma").unwrap()).is_none());
    }

    #[test]
    fn catalog_iterates_in_id_order() {
        let catalog = Catalog::new(vec![experiment("beta"), experiment("alpha")]).unwrap();
        let ids: Vec<&str> = catalog.iter().map(|e| e.id().as_str()).collect();
        assert_eq!(ids, vec!["alpha", "beta"]);
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::new(vec![]).unwrap();
        assert!(catalog.is_empty());
    }
}
