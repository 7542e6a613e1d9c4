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

/// Collapse a card onto one line: every `\n` becomes a space, then the
/// result is trimmed.
pub fn normalize_whitespace(card: &str) -> String {
    card.replace('\n', " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_is_trimmed() {
        assert_eq!(normalize_whitespace("  foo bar \t"), "foo bar");
    }

    #[test]
    fn test_line_breaks_become_spaces() {
        assert_eq!(normalize_whitespace("foo\nbar\nbaz"), "foo bar baz");
    }

    #[test]
    fn test_each_break_is_one_space() {
        assert_eq!(normalize_whitespace("foo\n\nbar"), "foo  bar");
    }

    #[test]
    fn test_leading_and_trailing_breaks() {
        assert_eq!(normalize_whitespace("\nfoo\n"), "foo");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace("\n\n"), "");
    }
}
