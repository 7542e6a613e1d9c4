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

use std::sync::LazyLock;

use regex::Regex;

/// `**...**`, non-greedy: each opening pair closes at the nearest following
/// pair, scanning left to right.
static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("invalid bold pattern"));

/// Convert Markdown bold (`**bold**`) to HTML (`<b>bold</b>`).
///
/// Unmatched delimiters are left as they are.
pub fn convert_markdown_bold(text: &str) -> String {
    BOLD_RE.replace_all(text, "<b>$1</b>").into_owned()
}
