// Waffle Hint
// Copyright (C) 2023  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use super::candidate::{self, ScoredMove};
use super::error::{Error, Result};
use super::target_index::TargetIndex;
use std::hash::Hash;
use std::ops::{Deref, DerefMut};
use std::time::{Duration, Instant};

/// Swaps two positions of the state and swaps them back again when
/// dropped, so that whichever way the search leaves a branch the
/// state is the same as when it entered it.
struct SwapGuard<'a, T> {
    state: &'a mut [T],
    a: usize,
    b: usize,
}

impl<'a, T> SwapGuard<'a, T> {
    fn new(state: &'a mut [T], a: usize, b: usize) -> SwapGuard<'a, T> {
        state.swap(a, b);
        SwapGuard { state, a, b }
    }
}

impl<'a, T> Drop for SwapGuard<'a, T> {
    fn drop(&mut self) {
        self.state.swap(self.a, self.b);
    }
}

impl<'a, T> Deref for SwapGuard<'a, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.state
    }
}

impl<'a, T> DerefMut for SwapGuard<'a, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.state
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of states examined, including the starting state
    pub nodes: u64,
    pub elapsed: Duration,
    /// Whether at least one branch was abandoned because the time
    /// ran out
    pub timed_out: bool,
}

struct Search<'a, T> {
    target: &'a [T],
    index: &'a TargetIndex<T>,
    max_swaps: usize,
    max_time: Duration,
    start_time: Instant,
    path: Vec<ScoredMove<T>>,
    nodes: u64,
    timed_out: bool,
}

impl<'a, T> Search<'a, T>
where
    T: Hash + Clone + Eq
{
    fn new(
        target: &'a [T],
        index: &'a TargetIndex<T>,
        max_swaps: usize,
        max_time: Duration,
    ) -> Search<'a, T> {
        Search {
            target,
            index,
            max_swaps,
            max_time,
            start_time: Instant::now(),
            path: Vec::new(),
            nodes: 0,
            timed_out: false,
        }
    }

    // Returns true if a solution was found, in which case it is left
    // in self.path. The state is always restored before returning.
    fn run(&mut self, state: &mut [T]) -> bool {
        self.nodes += 1;

        if *state == *self.target {
            return true;
        }

        if self.path.len() >= self.max_swaps {
            return false;
        }

        if self.start_time.elapsed() >= self.max_time {
            self.timed_out = true;
            return false;
        }

        for m in candidate::candidate_moves(state, self.target, self.index) {
            let mut state = SwapGuard::new(&mut *state, m.source, m.dest);

            self.path.push(m);

            if self.run(&mut state) {
                return true;
            }

            self.path.pop();
        }

        false
    }

    fn stats(&self) -> SearchStats {
        SearchStats {
            nodes: self.nodes,
            elapsed: self.start_time.elapsed(),
            timed_out: self.timed_out,
        }
    }
}

/// Finds swaps to turn a puzzle into its target. The target index is
/// built once and shared by every search made with the solver.
#[derive(Debug, Clone)]
pub struct Solver<T> {
    puzzle: Vec<T>,
    target: Vec<T>,
    index: TargetIndex<T>,
}

impl<T> Solver<T>
where
    T: Hash + Clone + Ord
{
    /// Fails with [`Error::MultisetMismatch`] unless the target is a
    /// rearrangement of the puzzle.
    pub fn new(puzzle: &[T], target: &[T]) -> Result<Solver<T>> {
        let mut puzzle_letters = puzzle.to_owned();
        let mut target_letters = target.to_owned();

        puzzle_letters.sort_unstable();
        target_letters.sort_unstable();

        if puzzle_letters != target_letters {
            return Err(Error::MultisetMismatch);
        }

        Ok(Solver {
            puzzle: puzzle.to_owned(),
            target: target.to_owned(),
            index: TargetIndex::new(target),
        })
    }

    pub fn puzzle(&self) -> &[T] {
        &self.puzzle
    }

    pub fn target(&self) -> &[T] {
        &self.target
    }

    /// Searches depth-first for at most `max_swaps` swaps that solve
    /// the puzzle, giving up once `max_time` has elapsed. The first
    /// solution found is returned, which isn’t necessarily the
    /// shortest one.
    pub fn solve(
        &self,
        max_swaps: usize,
        max_time: Duration,
    ) -> Option<Vec<ScoredMove<T>>> {
        self.solve_with_stats(max_swaps, max_time).0
    }

    pub fn solve_with_stats(
        &self,
        max_swaps: usize,
        max_time: Duration,
    ) -> (Option<Vec<ScoredMove<T>>>, SearchStats) {
        let mut state = self.puzzle.clone();
        let mut search = Search::new(
            &self.target,
            &self.index,
            max_swaps,
            max_time,
        );

        let found = search.run(&mut state);
        let stats = search.stats();

        log::debug!(
            "visited {} nodes in {:?}{}",
            stats.nodes,
            stats.elapsed,
            if stats.timed_out { " (timed out)" } else { "" },
        );

        let solution = found.then_some(search.path);

        (solution, stats)
    }
}

pub fn solve<T>(
    puzzle: &[T],
    target: &[T],
    max_swaps: usize,
    max_time: Duration,
) -> Result<Option<Vec<ScoredMove<T>>>>
where
    T: Hash + Clone + Ord
{
    Ok(Solver::new(puzzle, target)?.solve(max_swaps, max_time))
}

/// Applies the swaps in order to a copy of `start`.
pub fn apply_moves<T: Clone>(start: &[T], moves: &[ScoredMove<T>]) -> Vec<T> {
    let mut state = start.to_owned();

    for m in moves {
        state.swap(m.source, m.dest);
    }

    state
}
