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

use rand::Rng;

/// Makes a puzzle out of `target` by making `n_swaps` random swaps.
/// Each swap only uses positions that weren’t involved in an earlier
/// swap, so every swap takes two letters away from their slots.
/// Stops early if there aren’t enough untouched positions left.
pub fn scramble<T, R>(target: &[T], n_swaps: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized
{
    let mut puzzle = target.to_owned();
    let mut untouched = (0..target.len()).collect::<Vec<usize>>();

    for _ in 0..n_swaps {
        let n_positions = untouched.len();

        if n_positions < 2 {
            break;
        }

        let a = rng.gen_range(0..n_positions - 1);
        let b = rng.gen_range(a + 1..n_positions);

        // Remove b first so that a’s index is still valid
        let b_pos = untouched.swap_remove(b);
        let a_pos = untouched.swap_remove(a);

        puzzle.swap(a_pos, b_pos);
    }

    puzzle
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn same_letters() {
        let target = "ABCDEFGHIJKLMNOPQRSTU".chars().collect::<Vec<char>>();
        let mut rng = StdRng::seed_from_u64(42);

        for n_swaps in 0..=10 {
            let puzzle = scramble(&target, n_swaps, &mut rng);

            let mut sorted = puzzle.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, target);

            // All of the letters are different so every swap moves
            // two letters out of place
            let n_wrong = puzzle.iter()
                .zip(target.iter())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(n_wrong, n_swaps * 2);
        }
    }

    #[test]
    fn too_many_swaps() {
        let target = ['A', 'B', 'C', 'D', 'E'];
        let mut rng = StdRng::seed_from_u64(7);

        let puzzle = scramble(&target, 10, &mut rng);

        let n_wrong = puzzle.iter()
            .zip(target.iter())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(n_wrong, 4);
    }

    #[test]
    fn tiny() {
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(scramble::<char, _>(&[], 3, &mut rng), Vec::<char>::new());
        assert_eq!(scramble(&['A'], 3, &mut rng), vec!['A']);
        assert_eq!(scramble(&['A', 'B'], 3, &mut rng), vec!['B', 'A']);
    }
}
