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

//! cardstyle-core: the flashcard formatting pipeline.
//!
//! Each card goes through four stages:
//! - whitespace normalization
//! - Markdown bold to HTML
//! - cloze renumbering
//! - wrapping in a randomly styled `span`

pub mod cloze;
pub mod markup;
pub mod pipeline;
pub mod rng;
pub mod style;
pub mod whitespace;

// Re-exports for convenience
pub use pipeline::{format_raw_text, process_card};
pub use rng::{Picker, TinyRng};
pub use style::{COLORS, FONTS, Style};
