// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel equity estimate.
use parking_lot::Mutex;

use super::{Equity, EquityResult};
use crate::Result;

impl Equity {
    /// Estimates the equity from `num_tasks` parallel tasks running
    /// `trials_per_task` trials each.
    ///
    /// Each task has its own random generator seeded from `seed`, the result
    /// is the same for the same seed and number of tasks.
    ///
    /// Panics if `num_tasks` or `trials_per_task` is zero.
    pub fn par_estimate(
        &self,
        num_tasks: usize,
        trials_per_task: u32,
        seed: u64,
    ) -> Result<EquityResult> {
        // Per task results to avoid contention.
        let task_results = (0..num_tasks)
            .map(|_| Mutex::new(EquityResult::default()))
            .collect::<Vec<_>>();

        self.deck.par_sample(
            num_tasks,
            trials_per_task as usize,
            self.sample_size(),
            seed,
            |task_id, sample| {
                let outcome = self.showdown(sample);
                task_results[task_id].lock().record(outcome);
            },
        )?;

        let result = task_results
            .into_iter()
            .map(Mutex::into_inner)
            .fold(EquityResult::default(), |mut acc, r| {
                acc.merge(&r);
                acc
            });

        self.log_result(&result);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_cards;
    use rand::{SeedableRng, rngs::SmallRng};

    fn equity(hole: &str, board: &str) -> Equity {
        Equity::new(&parse_cards(hole).unwrap(), &parse_cards(board).unwrap()).unwrap()
    }

    #[test]
    fn par_estimate() {
        let res = equity("AS AH", "").par_estimate(4, 2_000, 42).unwrap();
        assert_eq!(res.trials(), 8_000);
        assert!(res.equity() > 0.8, "{}", res.equity());
    }

    #[test]
    fn par_estimate_is_seeded() {
        let eq = equity("9C 8C", "7C 6D 2H");
        assert_eq!(
            eq.par_estimate(3, 300, 7).unwrap(),
            eq.par_estimate(3, 300, 7).unwrap()
        );
    }

    #[test]
    fn par_estimate_matches_sequential() {
        let eq = equity("QH QS", "AD 7C 2S");
        let par = eq.par_estimate(4, 5_000, 1).unwrap().equity();
        let seq = eq
            .estimate(20_000, &mut SmallRng::seed_from_u64(2))
            .unwrap()
            .equity();
        assert!((par - seq).abs() < 0.03, "{par} {seq}");
    }
}
