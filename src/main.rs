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

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use waffle_hint::cipher::{self, Request};
use waffle_hint::{config, hint, scramble, SolveOptions, Solver};

#[derive(Parser)]
#[command(version, about = "Hints for waffle letter puzzles")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find swaps that turn the puzzle letters into the target
    Solve {
        puzzle: String,
        target: String,

        /// Maximum number of swaps [default: 10]
        #[arg(long)]
        max_swaps: Option<usize>,

        /// Give up after this many seconds [default: 20]
        #[arg(long, value_parser = config::parse_seconds)]
        max_time: Option<Duration>,

        /// JSON file with the search limits
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the swaps as JSON
        #[arg(long)]
        json: bool,
    },

    /// Make a puzzle by randomly swapping letters of the target
    Scramble {
        target: String,

        #[arg(long, default_value_t = 10)]
        swaps: usize,
    },

    /// Encode a five-letter word or decode a ten-digit code
    Code {
        text: String,
    },
}

fn solve_options(
    max_swaps: Option<usize>,
    max_time: Option<Duration>,
    config: Option<PathBuf>,
) -> Result<SolveOptions, waffle_hint::Error> {
    let mut options = match config {
        Some(path) => SolveOptions::load(path)?,
        None => SolveOptions::default(),
    };

    if let Some(max_swaps) = max_swaps {
        options.max_swaps = max_swaps;
    }
    if let Some(max_time) = max_time {
        options.max_time = max_time;
    }

    Ok(options)
}

fn run_solve(
    puzzle: &str,
    target: &str,
    options: &SolveOptions,
    json: bool,
) -> ExitCode {
    let puzzle = puzzle.chars().collect::<Vec<char>>();
    let target = target.chars().collect::<Vec<char>>();

    let solver = match Solver::new(&puzzle, &target) {
        Ok(solver) => solver,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    log::info!(
        "searching for up to {} swaps for {:?}",
        options.max_swaps,
        options.max_time,
    );

    let moves = solver.solve(options.max_swaps, options.max_time);

    if json {
        match serde_json::to_string(&moves) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            },
        }
    } else {
        match moves {
            Some(moves) => {
                println!("{}", hint::summary(&moves));

                if !moves.is_empty() {
                    println!("{}", hint::render(&moves));
                }
            },
            None => println!("No solution :("),
        }
    }

    ExitCode::SUCCESS
}

fn run_code(text: &str) -> ExitCode {
    let result = match cipher::classify(text) {
        Request::Encode(word) => cipher::encode(word),
        Request::Decode(digits) => cipher::decode(digits),
        Request::Unknown => {
            eprintln!(
                "Send a {} letter word to be encoded, or a {} digit \
                 number to be decoded.",
                cipher::WORD_LENGTH,
                cipher::CODE_LENGTH,
            );
            return ExitCode::FAILURE;
        },
    };

    match result {
        Ok(s) => {
            log::debug!("“{}” -> “{}”", text, s);
            println!("{}", s);
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        },
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn")
    ).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Solve { puzzle, target, max_swaps, max_time, config, json } => {
            match solve_options(max_swaps, max_time, config) {
                Ok(options) => run_solve(&puzzle, &target, &options, json),
                Err(e) => {
                    eprintln!("{}", e);
                    ExitCode::FAILURE
                },
            }
        },
        Command::Scramble { target, swaps } => {
            let target = target.chars().collect::<Vec<char>>();
            let puzzle = scramble::scramble(
                &target,
                swaps,
                &mut rand::thread_rng(),
            );

            println!("{}", puzzle.into_iter().collect::<String>());

            ExitCode::SUCCESS
        },
        Command::Code { text } => run_code(&text),
    }
}
