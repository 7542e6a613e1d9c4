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

//! Cloze deletion renumbering.
//!
//! A card is read as a "first sentence" followed, optionally, by a remainder
//! after the first `<br><br>`. Cloze markers (`{{cN::content}}`) in the first
//! sentence are unwrapped so that it reads as plain text. Markers in the
//! remainder keep their wrapper, but their index is shifted down by the
//! number of markers that were unwrapped, never going below 1.
//!
//! Matching is non-greedy and does not understand nesting: a marker whose
//! content itself contains `{{` or `}}` is matched from its opening braces to
//! the first `}}` that follows.

use std::sync::LazyLock;

use regex::Captures;
use regex::Regex;

/// Separates a card's first sentence from the rest of it.
pub const PARAGRAPH_BREAK: &str = "<br><br>";

static CLOZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{c([0-9]+)::(.*?)\}\}").expect("invalid cloze pattern")
});

/// Unwrap every cloze marker in `text`, keeping only its content.
///
/// Returns the unwrapped text and the number of markers removed.
pub fn strip_cloze(text: &str) -> (String, u64) {
    let mut count: u64 = 0;
    let stripped = CLOZE_RE.replace_all(text, |caps: &Captures| {
        count += 1;
        caps[2].to_string()
    });
    (stripped.into_owned(), count)
}

/// Shift the index of every cloze marker in `text` down by `k`, clamping at 1.
pub fn shift_cloze(text: &str, k: u64) -> String {
    CLOZE_RE
        .replace_all(text, |caps: &Captures| match caps[1].parse::<u64>() {
            Ok(n) => {
                let n = n.saturating_sub(k).max(1);
                format!("{{{{c{}::{}}}}}", n, &caps[2])
            }
            // Index too large to represent: leave the marker alone.
            Err(_) => caps[0].to_string(),
        })
        .into_owned()
}

/// Unwrap the first sentence's cloze markers and renumber the rest.
pub fn renumber_cloze(card: &str) -> String {
    match card.split_once(PARAGRAPH_BREAK) {
        Some((first, rest)) => {
            let (first, k) = strip_cloze(first);
            let rest = shift_cloze(rest, k);
            log::trace!("Unwrapped {k} cloze marker(s) from first sentence");
            format!("{first}{PARAGRAPH_BREAK}{rest}")
        }
        None => strip_cloze(card).0,
    }
}
