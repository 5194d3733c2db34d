// ABOUTME: Integration tests for the shared athlete repository
// ABOUTME: Covers lazy generation, snapshot isolation across swaps and concurrent readers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::{Arc, Barrier};
use std::thread;

use injury_insight::generator::PopulationGenerator;
use injury_insight::repository::AthleteRepository;
use injury_insight::ErrorCode;

use common::{population, population_config};

fn repository(seed: u64, size: usize) -> AthleteRepository {
    common::init_test_logging();
    AthleteRepository::new(PopulationGenerator::new(population_config(seed, size)))
}

#[test]
fn test_lazy_population_matches_direct_generation() {
    let repo = repository(42, 200);
    assert_eq!(repo.generation(), 0);

    let snapshot = repo.snapshot().unwrap();
    assert_eq!(*snapshot, population(42, 200));
    assert_eq!(repo.generation(), 1);
}

#[test]
fn test_get_unknown_athlete_is_not_found() {
    let repo = repository(42, 50);
    let err = repo.get("PLY99999").unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.resource_id.as_deref(), Some("PLY99999"));
}

#[test]
fn test_reader_snapshot_survives_swap() {
    let repo = repository(42, 80);
    let before = repo.snapshot().unwrap();

    let generation = repo.replace(population(9, 30)).unwrap();
    assert_eq!(generation, 2);

    assert_eq!(before.len(), 80);
    assert_eq!(repo.count().unwrap(), 30);
    assert_eq!(repo.get("PLY00030").unwrap().id, "PLY00030");
    assert!(repo.get("PLY00031").is_err());
}

#[test]
fn test_racing_first_readers_share_one_generation() {
    const READERS: usize = 8;

    for _ in 0..20 {
        let repo = Arc::new(repository(42, 40));
        let barrier = Arc::new(Barrier::new(READERS));

        let readers: Vec<_> = (0..READERS)
            .map(|_| {
                let repo = Arc::clone(&repo);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    repo.snapshot().unwrap()
                })
            })
            .collect();
        let snapshots: Vec<_> = readers.into_iter().map(|r| r.join().unwrap()).collect();

        assert_eq!(repo.generation(), 1);
        assert!(snapshots.iter().all(|s| Arc::ptr_eq(s, &snapshots[0])));
    }
}

#[test]
fn test_regenerate_reports_own_generation() {
    let repo = repository(42, 20);
    repo.snapshot().unwrap();
    assert_eq!(repo.regenerate().unwrap(), 2);
    assert_eq!(repo.replace(population(3, 10)).unwrap(), 3);
    assert_eq!(repo.generation(), 3);
}

#[test]
fn test_concurrent_readers_see_complete_collections() {
    let repo = Arc::new(repository(42, 120));
    repo.snapshot().unwrap();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let repo = Arc::clone(&repo);
            thread::spawn(move || {
                (0..20)
                    .map(|_| repo.snapshot().unwrap().len())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    repo.replace(population(5, 60)).unwrap();

    for reader in readers {
        for len in reader.join().unwrap() {
            assert!(len == 120 || len == 60, "partial collection of {len}");
        }
    }
}
