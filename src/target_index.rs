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

use std::collections::HashMap;
use std::hash::Hash;

/// Where each letter belongs in the target arrangement. The positions
/// for each letter are kept in ascending order.
#[derive(Debug, Clone)]
pub struct TargetIndex<T> {
    positions: HashMap<T, Vec<usize>>,
}

impl<T> TargetIndex<T>
where
    T: Hash + Clone + Eq
{
    pub fn new(target: &[T]) -> TargetIndex<T> {
        let mut positions = HashMap::<T, Vec<usize>>::new();

        for (i, letter) in target.iter().enumerate() {
            positions.entry(letter.clone()).or_default().push(i);
        }

        TargetIndex { positions }
    }

    /// Returns the target positions of `letter`, or an empty slice if
    /// the letter doesn’t appear in the target at all.
    pub fn lookup(&self, letter: &T) -> &[usize] {
        self.positions.get(letter).map(Vec::as_slice).unwrap_or(&[])
    }
}
