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


//! Finds a short sequence of swaps that turns a scrambled waffle
//! puzzle into its solution.

pub mod candidate;
pub mod cipher;
pub mod config;
pub mod error;
pub mod hint;
pub mod scramble;
pub mod swap_solver;
pub mod target_index;

pub use candidate::ScoredMove;
pub use config::SolveOptions;
pub use error::{Error, Result};
pub use swap_solver::{solve, Solver};
