// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs::read_to_string;
use std::io::Read;
use std::io::stdin;

use cardstyle_core::TinyRng;
use cardstyle_core::format_raw_text;

use crate::error::Fallible;

/// Format cards read from `input`, or standard input if `None`, and print the
/// fenced result to standard output.
pub fn format_cards(input: Option<String>, seed: Option<u64>) -> Fallible<()> {
    let raw = read_input(input)?;
    println!("{}", format_text(&raw, seed));
    Ok(())
}

fn read_input(input: Option<String>) -> Fallible<String> {
    match input {
        Some(path) => Ok(read_to_string(path)?),
        None => {
            let mut raw = String::new();
            stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

fn format_text(raw: &str, seed: Option<u64>) -> String {
    match seed {
        Some(seed) => format_raw_text(raw, &mut TinyRng::from_seed(seed)),
        None => format_raw_text(raw, &mut rand::thread_rng()),
    }
}
