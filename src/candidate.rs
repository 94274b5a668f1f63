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

use super::target_index::TargetIndex;
use serde::Serialize;
use std::fmt;
use std::hash::Hash;

/// A swap of two positions along with whether it puts the right
/// letter in both of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredMove<T> {
    /// The incorrect position the move was generated for
    pub source: usize,
    pub dest: usize,
    pub double_productive: bool,
    /// The letter that was at `source` before the swap
    pub moved: T,
    /// The letter that was at `dest` before the swap
    pub displaced: T,
}

impl<T> ScoredMove<T> {
    pub fn positions(&self) -> (usize, usize) {
        (self.source, self.dest)
    }
}

impl<T> fmt::Display for ScoredMove<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Swap {} with {}", self.source, self.dest)
    }
}

/// Picks a swap partner for the letter at `pos`, which must not
/// already be in its target position. Every target slot for the
/// letter is considered. A slot that would also receive its own
/// letter back from `pos` wins immediately, otherwise the last slot
/// that isn’t already correct is used. Returns `None` if every slot
/// for the letter is already filled correctly.
pub fn best_move<T>(
    pos: usize,
    arrangement: &[T],
    target: &[T],
    index: &TargetIndex<T>,
) -> Option<ScoredMove<T>>
where
    T: Hash + Clone + Eq
{
    debug_assert!(arrangement[pos] != target[pos]);

    let letter = &arrangement[pos];
    let mut fallback = None;

    for &other in index.lookup(letter) {
        // Don’t disturb a slot that already has the right letter
        if arrangement[other] == target[other] {
            continue;
        }

        if arrangement[other] == target[pos] {
            return Some(ScoredMove {
                source: pos,
                dest: other,
                double_productive: true,
                moved: letter.clone(),
                displaced: arrangement[other].clone(),
            });
        }

        fallback = Some(other);
    }

    fallback.map(|other| ScoredMove {
        source: pos,
        dest: other,
        double_productive: false,
        moved: letter.clone(),
        displaced: arrangement[other].clone(),
    })
}

/// Generates the moves to try from `arrangement`, one per incorrect
/// position. Moves that fix both of their positions come first,
/// otherwise the moves are in order of position.
pub fn candidate_moves<T>(
    arrangement: &[T],
    target: &[T],
    index: &TargetIndex<T>,
) -> Vec<ScoredMove<T>>
where
    T: Hash + Clone + Eq
{
    let mut moves = (0..arrangement.len())
        .filter(|&pos| arrangement[pos] != target[pos])
        .filter_map(|pos| best_move(pos, arrangement, target, index))
        .collect::<Vec<_>>();

    // sort_by_key is stable so the position order is kept within
    // each group
    moves.sort_by_key(|m| !m.double_productive);

    moves
}
