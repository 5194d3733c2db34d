// ABOUTME: In-memory athlete repository owning the population behind a swappable snapshot
// ABOUTME: Lazily generates on first access and replaces the collection with one atomic swap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

// RwLock poisoning is converted to AppError::internal for propagation

//! # Athlete Repository
//!
//! Owns the athlete collection for the process lifetime. Readers take an
//! `Arc` snapshot and work on it without holding the lock, so a
//! regeneration never exposes a half-built collection: the new population
//! is built off to the side and swapped in under a short write lock.
//! The first population is built while holding the write lock, so racing
//! first readers share one generation.
//!
//! ## Thread Safety
//!
//! One writer at a time, many concurrent readers. Every successful swap
//! bumps a generation counter that callers may use to invalidate anything
//! they derived from an older snapshot.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockWriteGuard};

use injury_core::errors::{AppError, AppResult};
use injury_core::models::Athlete;
use tracing::{debug, info};

use crate::generator::PopulationGenerator;

/// Shared, immutable view of the population
pub type Snapshot = Arc<Vec<Athlete>>;

/// Repository owning the athlete population
#[derive(Debug)]
pub struct AthleteRepository {
    generator: PopulationGenerator,
    athletes: RwLock<Option<Snapshot>>,
    generation: AtomicU64,
}

impl AthleteRepository {
    /// Empty repository that generates its population on first access
    #[must_use]
    pub const fn new(generator: PopulationGenerator) -> Self {
        Self {
            generator,
            athletes: RwLock::new(None),
            generation: AtomicU64::new(0),
        }
    }

    /// Repository preloaded with `athletes`
    #[must_use]
    pub fn with_athletes(generator: PopulationGenerator, athletes: Vec<Athlete>) -> Self {
        Self {
            generator,
            athletes: RwLock::new(Some(Arc::new(athletes))),
            generation: AtomicU64::new(1),
        }
    }

    /// Number of swaps performed so far; zero until the first population exists
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Current population, generating it when absent or empty
    ///
    /// # Errors
    ///
    /// Returns an internal error if the lock is poisoned, or the
    /// generator's error if a first population cannot be built.
    pub fn snapshot(&self) -> AppResult<Snapshot> {
        if let Some(current) = self.current()?.filter(|c| !c.is_empty()) {
            return Ok(current);
        }
        self.initialize()
    }

    /// Look up one athlete by ID
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no athlete has this ID.
    pub fn get(&self, athlete_id: &str) -> AppResult<Athlete> {
        self.snapshot()?
            .iter()
            .find(|athlete| athlete.id == athlete_id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Athlete", athlete_id))
    }

    /// Athletes matching `predicate`, in collection order
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::snapshot`].
    pub fn filter<F>(&self, predicate: F) -> AppResult<Vec<Athlete>>
    where
        F: Fn(&Athlete) -> bool,
    {
        Ok(self
            .snapshot()?
            .iter()
            .filter(|athlete| predicate(athlete))
            .cloned()
            .collect())
    }

    /// Number of athletes in the current population
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::snapshot`].
    pub fn count(&self) -> AppResult<usize> {
        Ok(self.snapshot()?.len())
    }

    /// Swap in a complete new population, returning the new generation number
    ///
    /// # Errors
    ///
    /// Returns an internal error if the lock is poisoned.
    pub fn replace(&self, athletes: Vec<Athlete>) -> AppResult<u64> {
        let size = athletes.len();
        let generation = self.swap(Arc::new(athletes))?;
        info!(size, generation, "Athlete collection swapped");
        Ok(generation)
    }

    /// Build a fresh population from the generator and swap it in,
    /// returning the generation number of this swap
    ///
    /// # Errors
    ///
    /// Returns the generator's error, or an internal error if the lock is
    /// poisoned.
    pub fn regenerate(&self) -> AppResult<u64> {
        let snapshot = Arc::new(self.generator.generate()?);
        let size = snapshot.len();
        let generation = self.swap(snapshot)?;
        info!(size, generation, "Athlete collection regenerated");
        Ok(generation)
    }

    /// First-access path: generate under the write lock unless another
    /// caller got there first
    fn initialize(&self) -> AppResult<Snapshot> {
        let mut slot = self.write_guard()?;
        if let Some(current) = slot.as_ref().filter(|c| !c.is_empty()) {
            return Ok(Arc::clone(current));
        }

        debug!("population absent or empty, generating");
        let snapshot = Arc::new(self.generator.generate()?);
        *slot = Some(Arc::clone(&snapshot));
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        drop(slot);

        info!(size = snapshot.len(), generation, "Athlete collection generated");
        Ok(snapshot)
    }

    /// Install `next`; the generation is bumped while the lock is held
    fn swap(&self, next: Snapshot) -> AppResult<u64> {
        let mut slot = self.write_guard()?;
        *slot = Some(next);
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        drop(slot);
        Ok(generation)
    }

    fn write_guard(&self) -> AppResult<RwLockWriteGuard<'_, Option<Snapshot>>> {
        self.athletes
            .write()
            .map_err(|_| AppError::internal("RwLock poisoned: athlete collection"))
    }

    fn current(&self) -> AppResult<Option<Snapshot>> {
        Ok(self
            .athletes
            .read()
            .map_err(|_| AppError::internal("RwLock poisoned: athlete collection"))?
            .clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PopulationConfig;
    use injury_core::errors::ErrorCode;
    use std::sync::Barrier;
    use std::thread;

    fn small_generator() -> PopulationGenerator {
        PopulationGenerator::new(PopulationConfig {
            seed: 42,
            size: 30,
            injured_probability: 0.35,
        })
    }

    #[test]
    fn test_lazy_generation_on_first_access() {
        let repo = AthleteRepository::new(small_generator());
        assert_eq!(repo.generation(), 0);
        let snapshot = repo.snapshot().unwrap();
        assert_eq!(snapshot.len(), 30);
        assert_eq!(repo.generation(), 1);

        // Second access reuses the same collection
        let again = repo.snapshot().unwrap();
        assert!(Arc::ptr_eq(&snapshot, &again));
        assert_eq!(repo.generation(), 1);
    }

    #[test]
    fn test_concurrent_first_access_generates_once() {
        let repo = &AthleteRepository::new(small_generator());
        let barrier = &Barrier::new(6);
        let snapshots: Vec<Snapshot> = thread::scope(|scope| {
            let handles: Vec<_> = (0..6)
                .map(|_| {
                    scope.spawn(move || {
                        barrier.wait();
                        repo.snapshot().unwrap()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(repo.generation(), 1);
        assert!(snapshots.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }

    #[test]
    fn test_regenerate_returns_its_generation() {
        let repo = AthleteRepository::new(small_generator());
        repo.snapshot().unwrap();
        assert_eq!(repo.regenerate().unwrap(), 2);
        assert_eq!(repo.regenerate().unwrap(), 3);
    }

    #[test]
    fn test_get_and_not_found() {
        let repo = AthleteRepository::new(small_generator());
        assert_eq!(repo.get("PLY00007").unwrap().id, "PLY00007");

        let err = repo.get("PLY99999").unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
    }

    #[test]
    fn test_replace_swaps_without_touching_old_snapshots() {
        let repo = AthleteRepository::new(small_generator());
        let before = repo.snapshot().unwrap();
        let replacement: Vec<Athlete> = before.iter().take(5).cloned().collect();

        let generation = repo.replace(replacement).unwrap();
        assert_eq!(generation, 2);
        assert_eq!(repo.count().unwrap(), 5);
        assert_eq!(before.len(), 30);
    }

    #[test]
    fn test_empty_collection_is_regenerated() {
        let repo = AthleteRepository::with_athletes(small_generator(), Vec::new());
        assert_eq!(repo.count().unwrap(), 30);
        assert_eq!(repo.generation(), 2);
    }

    #[test]
    fn test_filter_keeps_collection_order() {
        let repo = AthleteRepository::new(small_generator());
        let injured = repo.filter(Athlete::is_injured).unwrap();
        assert!(injured.iter().all(Athlete::is_injured));
        assert!(injured.windows(2).all(|pair| pair[0].id < pair[1].id));
    }
}
