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

use super::error::{ConfigError, Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_MAX_SWAPS: usize = 10;
pub const DEFAULT_MAX_TIME: Duration = Duration::from_secs(20);

/// Limits for a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOptions {
    pub max_swaps: usize,
    pub max_time: Duration,
}

// How the options are written in a JSON file. The time is in seconds.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct OptionsFile {
    max_swaps: Option<usize>,
    max_time: Option<f64>,
}

impl Default for SolveOptions {
    fn default() -> SolveOptions {
        SolveOptions {
            max_swaps: DEFAULT_MAX_SWAPS,
            max_time: DEFAULT_MAX_TIME,
        }
    }
}

impl SolveOptions {
    /// Parses the options from JSON. Missing fields get the default
    /// values.
    pub fn from_json(json: &str) -> std::result::Result<SolveOptions, ConfigError> {
        let file = serde_json::from_str::<OptionsFile>(json)?;
        let defaults = SolveOptions::default();

        let max_time = match file.max_time {
            Some(seconds) => parse_seconds_f64(seconds)
                .map_err(ConfigError::InvalidTime)?,
            None => defaults.max_time,
        };

        Ok(SolveOptions {
            max_swaps: file.max_swaps.unwrap_or(defaults.max_swaps),
            max_time,
        })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<SolveOptions> {
        let path = path.as_ref();

        std::fs::read_to_string(path)
            .map_err(ConfigError::from)
            .and_then(|json| SolveOptions::from_json(&json))
            .map_err(|source| Error::Config {
                path: path.to_owned(),
                source,
            })
    }
}

fn parse_seconds_f64(seconds: f64) -> std::result::Result<Duration, String> {
    Duration::try_from_secs_f64(seconds)
        .map_err(|_| format!("invalid number of seconds: {}", seconds))
}

/// Parses a number of seconds such as “20” or “0.5”. This is used as
/// a value parser for the command line.
pub fn parse_seconds(s: &str) -> std::result::Result<Duration, String> {
    let seconds = s.trim()
        .parse::<f64>()
        .map_err(|e| format!("{}: {}", s, e))?;

    parse_seconds_f64(seconds)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let options = SolveOptions::default();

        assert_eq!(options.max_swaps, 10);
        assert_eq!(options.max_time, Duration::from_secs(20));

        assert_eq!(SolveOptions::from_json("{}").unwrap(), options);
    }

    #[test]
    fn json() {
        let options = SolveOptions::from_json(
            r#"{ "max_swaps": 15, "max_time": 2.5 }"#
        ).unwrap();

        assert_eq!(options.max_swaps, 15);
        assert_eq!(options.max_time, Duration::from_millis(2500));

        let options = SolveOptions::from_json(r#"{ "max_time": 1 }"#)
            .unwrap();

        assert_eq!(options.max_swaps, 10);
        assert_eq!(options.max_time, Duration::from_secs(1));
    }

    #[test]
    fn bad_json() {
        assert!(matches!(
            SolveOptions::from_json(r#"{ "max_swops": 15 }"#),
            Err(ConfigError::Json(_)),
        ));
        assert!(matches!(
            SolveOptions::from_json(r#"{ "max_swaps": -1 }"#),
            Err(ConfigError::Json(_)),
        ));
        assert!(matches!(
            SolveOptions::from_json(r#"{ "max_time": -1 }"#),
            Err(ConfigError::InvalidTime(_)),
        ));
    }

    #[test]
    fn missing_file() {
        let err = SolveOptions::load("/nonexistent/waffle-hint.json")
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Config { source: ConfigError::Io(_), .. },
        ));
        assert!(err.to_string().starts_with("/nonexistent/waffle-hint.json: "));
    }

    #[test]
    fn seconds() {
        assert_eq!(parse_seconds("20"), Ok(Duration::from_secs(20)));
        assert_eq!(parse_seconds(" 0.25 "), Ok(Duration::from_millis(250)));
        assert_eq!(parse_seconds("0"), Ok(Duration::ZERO));
        assert!(parse_seconds("soon").is_err());
        assert!(parse_seconds("-3").is_err());
    }
}
