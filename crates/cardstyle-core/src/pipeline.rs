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

use crate::cloze::renumber_cloze;
use crate::markup::convert_markdown_bold;
use crate::rng::Picker;
use crate::style::random_style;
use crate::style::wrap_card;
use crate::whitespace::normalize_whitespace;

/// Cards in raw input are separated by a blank line.
pub const CARD_SEPARATOR: &str = "\n\n";

const FENCE: &str = "```";

/// Split raw input into cards, dropping blank segments.
pub fn split_cards(raw: &str) -> Vec<&str> {
    raw.split(CARD_SEPARATOR)
        .filter(|card| !card.trim().is_empty())
        .collect()
}

/// Run a single card through the whole pipeline.
pub fn process_card(card: &str, picker: &mut dyn Picker) -> String {
    let card = normalize_whitespace(card);
    let card = convert_markdown_bold(&card);
    let card = renumber_cloze(&card);
    let style = random_style(picker);
    wrap_card(&card, &style).into_string()
}

/// Process every card and put each one on its own line.
pub fn enforce_single_line_cards(raw: &str, picker: &mut dyn Picker) -> String {
    let cards: Vec<String> = split_cards(raw)
        .into_iter()
        .map(|card| process_card(card, &mut *picker))
        .collect();
    log::debug!("Processed {} card(s)", cards.len());
    cards.join("\n")
}

/// Fence text as a Markdown code block.
pub fn wrap_code_block(text: &str) -> String {
    format!("{FENCE}\n{text}\n{FENCE}")
}

/// The full transformation, from raw input to fenced output.
pub fn format_raw_text(raw: &str, picker: &mut dyn Picker) -> String {
    wrap_code_block(&enforce_single_line_cards(raw, picker))
}
