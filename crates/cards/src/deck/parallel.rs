// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel deck sampling.
use rand::prelude::*;
use std::thread;

use super::{Card, Deck};
use crate::{Error, Result};

impl Deck {
    /// Calls the given closure from `num_tasks` parallel tasks generating
    /// `samples_per_task` samples of size k.
    ///
    /// The closure takes an usize that is the task identifier (0..num_tasks)
    /// and a slice of k distinct cards. Each task draws from its own random
    /// generator seeded with `seed` and the task identifier, so that the
    /// samples seen by a task are the same across runs.
    ///
    /// Panics if `num_tasks` or `samples_per_task` is zero.
    pub fn par_sample<F>(
        &self,
        num_tasks: usize,
        samples_per_task: usize,
        k: usize,
        seed: u64,
        f: F,
    ) -> Result<()>
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!(num_tasks > 0);
        assert!(samples_per_task > 0);

        if k > self.cards.len() {
            return Err(Error::DeckExhausted {
                requested: k,
                remaining: self.cards.len(),
            });
        }

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let f = &f;
                s.spawn(move || {
                    let mut cards = self.cards.clone();
                    let mut rng = SmallRng::seed_from_u64(task_seed(seed, task_id));

                    for _ in 0..samples_per_task {
                        let (sample, _) = cards.partial_shuffle(&mut rng, k);
                        f(task_id, sample);
                    }
                });
            }
        });

        Ok(())
    }
}

/// Spreads task ids so that adjacent tasks don't get adjacent seeds.
fn task_seed(seed: u64, task_id: usize) -> u64 {
    seed ^ (task_id as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
