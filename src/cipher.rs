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

//! A small letter cipher that turns a five-letter word into a ten
//! digit number so that it can be shared without giving the word
//! away at a glance.

use super::error::{Error, Result};

pub const WORD_LENGTH: usize = 5;
pub const CODE_LENGTH: usize = WORD_LENGTH * 2;

static KEY: [(char, &'static str); 26] = [
    ('A', "36"),
    ('B', "61"),
    ('C', "82"),
    ('D', "41"),
    ('E', "97"),
    ('F', "18"),
    ('G', "42"),
    ('H', "35"),
    ('I', "40"),
    ('J', "38"),
    ('K', "21"),
    ('L', "87"),
    ('M', "83"),
    ('N', "34"),
    ('O', "37"),
    ('P', "51"),
    ('Q', "53"),
    ('R', "72"),
    ('S', "52"),
    ('T', "29"),
    ('U', "60"),
    ('V', "55"),
    ('W', "28"),
    ('X', "10"),
    ('Y', "56"),
    ('Z', "70"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request<'a> {
    Encode(&'a str),
    Decode(&'a str),
    Unknown,
}

/// Guesses what to do with a piece of text: ten digits are a code to
/// decode and five letters are a word to encode.
pub fn classify(text: &str) -> Request<'_> {
    let n_chars = text.chars().count();

    if n_chars == CODE_LENGTH && text.chars().all(|ch| ch.is_ascii_digit()) {
        Request::Decode(text)
    } else if n_chars == WORD_LENGTH && text.chars().all(char::is_alphabetic) {
        Request::Encode(text)
    } else {
        Request::Unknown
    }
}

pub fn encode(word: &str) -> Result<String> {
    word.chars()
        .map(|ch| {
            let upper = ch.to_ascii_uppercase();

            KEY.iter()
                .find(|&&(letter, _)| letter == upper)
                .map(|&(_, code)| code)
                .ok_or(Error::UnencodableLetter(ch))
        })
        .collect()
}

pub fn decode(digits: &str) -> Result<String> {
    let digits = digits.chars().collect::<Vec<char>>();

    if digits.len() % 2 != 0 {
        return Err(Error::OddCodeLength(digits.len()));
    }

    digits.chunks(2)
        .map(|pair| {
            let pair = pair.iter().collect::<String>();

            KEY.iter()
                .find(|&&(_, code)| code == pair)
                .map(|&(letter, _)| letter)
                .ok_or(Error::UnknownCode(pair))
        })
        .collect()
}
