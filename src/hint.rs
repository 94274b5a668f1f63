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

use super::candidate::ScoredMove;
use std::fmt::Write;

pub fn render<T>(moves: &[ScoredMove<T>]) -> String {
    let mut buf = String::new();

    for (i, m) in moves.iter().enumerate() {
        if i > 0 {
            buf.push('\n');
        }
        // Writing to a String can’t fail
        let _ = write!(buf, "{}", m);
    }

    buf
}

pub fn summary<T>(moves: &[ScoredMove<T>]) -> String {
    match moves.len() {
        0 => "Already solved!".to_string(),
        1 => "Solution in 1 swap!".to_string(),
        n => format!("Solution in {} swaps!", n),
    }
}
