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

use std::fmt::Display;
use std::fmt::Formatter;

use maud::Markup;
use maud::PreEscaped;
use maud::html;

use crate::rng::Picker;
use crate::rng::choose;

/// Text and shadow colors.
pub const COLORS: [&str; 8] = [
    "#ff00ff", // neon pink
    "#00ff00", // neon green
    "#ffcc00", // bright yellow
    "#00ffff", // cyan
    "#ff4500", // neon orange
    "#ff1493", // deep pink
    "#39ff14", // electric green
    "#ff5e00", // bright orange
];

/// Values for the `font-family` property.
pub const FONTS: [&str; 7] = [
    "'Comic Sans MS'",
    "cursive",
    "'Courier New', monospace",
    "'Verdana', sans-serif",
    "'Arial Black', sans-serif",
    "'Georgia', serif",
    "'Times New Roman', serif",
];

/// The inline style of one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Style {
    pub color: &'static str,
    pub font: &'static str,
    pub shadow: &'static str,
}

/// Draw a style. The shadow color is drawn independently of the text color,
/// so the two may coincide.
pub fn random_style(picker: &mut dyn Picker) -> Style {
    let color = *choose(picker, &COLORS);
    let font = *choose(picker, &FONTS);
    let shadow = *choose(picker, &COLORS);
    Style {
        color,
        font,
        shadow,
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "color: {}; font-family: {}; text-shadow: 2px 2px 4px {};",
            self.color, self.font, self.shadow
        )
    }
}

/// Wrap already-rendered card HTML in a styled `span`.
pub fn wrap_card(card: &str, style: &Style) -> Markup {
    html! {
        span style=(style.to_string()) { (PreEscaped(card)) }
    }
}
