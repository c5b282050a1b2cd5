// Copyright 2024 The Druid Authors.
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

//! Theme keys and initial values.
//!
//! Every key has a built-in default; widgets fall back to it when the key
//! is missing from the [`Env`], so calling [`add_to_env`] is only needed
//! to override values.

#![allow(missing_docs)]

use druid::{Color, Env, Key};

pub const ROW_BACKGROUND_COLOR: Key<Color> =
    Key::new("org.linebender.druid-menu-button.theme.row_background_color");
pub const ROW_HOVER_COLOR: Key<Color> =
    Key::new("org.linebender.druid-menu-button.theme.row_hover_color");
pub const ROW_PRESSED_COLOR: Key<Color> =
    Key::new("org.linebender.druid-menu-button.theme.row_pressed_color");
pub const ROW_BORDER_COLOR: Key<Color> =
    Key::new("org.linebender.druid-menu-button.theme.row_border_color");
pub const ROW_TEXT_COLOR: Key<Color> =
    Key::new("org.linebender.druid-menu-button.theme.row_text_color");

/// The inset between a row's edge and its content.
pub const ROW_MARGIN: Key<f64> = Key::new("org.linebender.druid-menu-button.theme.row_margin");
/// The gap reserved between a row's icon and its label.
pub const ROW_INTERVAL: Key<f64> = Key::new("org.linebender.druid-menu-button.theme.row_interval");

pub const BUTTON_BACKGROUND_COLOR: Key<Color> =
    Key::new("org.linebender.druid-menu-button.theme.button_background_color");
pub const BUTTON_HOVER_COLOR: Key<Color> =
    Key::new("org.linebender.druid-menu-button.theme.button_hover_color");
pub const BUTTON_PRESSED_COLOR: Key<Color> =
    Key::new("org.linebender.druid-menu-button.theme.button_pressed_color");
pub const BUTTON_BORDER_COLOR: Key<Color> =
    Key::new("org.linebender.druid-menu-button.theme.button_border_color");

pub const POP_SEPARATOR_COLOR: Key<Color> =
    Key::new("org.linebender.druid-menu-button.theme.pop_separator_color");
pub const POP_ARROW_COLOR: Key<Color> =
    Key::new("org.linebender.druid-menu-button.theme.pop_arrow_color");
pub const POP_ARROW_WIDTH: Key<f64> =
    Key::new("org.linebender.druid-menu-button.theme.pop_arrow_width");

const DEFAULT_ROW_BACKGROUND: Color = Color::rgb8(0xfd, 0xfd, 0xfd);
const DEFAULT_ROW_HOVER: Color = Color::rgb8(0xe0, 0xee, 0xf9);
const DEFAULT_ROW_PRESSED: Color = Color::rgb8(0xcc, 0xe4, 0xf7);
const DEFAULT_GRAY: Color = Color::rgb8(0xa0, 0xa0, 0xa4);
const DEFAULT_TEXT: Color = Color::BLACK;
const DEFAULT_MARGIN: f64 = 2.0;
const DEFAULT_INTERVAL: f64 = 2.0;
const DEFAULT_BUTTON_BACKGROUND: Color = Color::rgb8(0xf0, 0xf0, 0xf0);
const DEFAULT_ARROW_WIDTH: f64 = 2.0;

/// Adds every key of this module to `env`, with its default value.
pub fn add_to_env(env: Env) -> Env {
    env.adding(ROW_BACKGROUND_COLOR, DEFAULT_ROW_BACKGROUND)
        .adding(ROW_HOVER_COLOR, DEFAULT_ROW_HOVER)
        .adding(ROW_PRESSED_COLOR, DEFAULT_ROW_PRESSED)
        .adding(ROW_BORDER_COLOR, DEFAULT_GRAY)
        .adding(ROW_TEXT_COLOR, DEFAULT_TEXT)
        .adding(ROW_MARGIN, DEFAULT_MARGIN)
        .adding(ROW_INTERVAL, DEFAULT_INTERVAL)
        .adding(BUTTON_BACKGROUND_COLOR, DEFAULT_BUTTON_BACKGROUND)
        .adding(BUTTON_HOVER_COLOR, DEFAULT_ROW_HOVER)
        .adding(BUTTON_PRESSED_COLOR, DEFAULT_ROW_PRESSED)
        .adding(BUTTON_BORDER_COLOR, DEFAULT_GRAY)
        .adding(POP_SEPARATOR_COLOR, DEFAULT_GRAY)
        .adding(POP_ARROW_COLOR, DEFAULT_TEXT)
        .adding(POP_ARROW_WIDTH, DEFAULT_ARROW_WIDTH)
}

/// Row colors and metrics resolved from an [`Env`].
#[derive(Debug, Clone)]
pub(crate) struct RowStyle {
    pub background: Color,
    pub hover: Color,
    pub pressed: Color,
    pub border: Color,
    pub text: Color,
    pub margin: f64,
    pub interval: f64,
}

impl RowStyle {
    pub fn from_env(env: &Env) -> RowStyle {
        RowStyle {
            background: env
                .try_get(ROW_BACKGROUND_COLOR)
                .unwrap_or(DEFAULT_ROW_BACKGROUND),
            hover: env.try_get(ROW_HOVER_COLOR).unwrap_or(DEFAULT_ROW_HOVER),
            pressed: env.try_get(ROW_PRESSED_COLOR).unwrap_or(DEFAULT_ROW_PRESSED),
            border: env.try_get(ROW_BORDER_COLOR).unwrap_or(DEFAULT_GRAY),
            text: env.try_get(ROW_TEXT_COLOR).unwrap_or(DEFAULT_TEXT),
            margin: env.try_get(ROW_MARGIN).unwrap_or(DEFAULT_MARGIN),
            interval: env.try_get(ROW_INTERVAL).unwrap_or(DEFAULT_INTERVAL),
        }
    }
}

/// Primary surface and pop area colors resolved from an [`Env`].
#[derive(Debug, Clone)]
pub(crate) struct ButtonStyle {
    pub background: Color,
    pub hover: Color,
    pub pressed: Color,
    pub border: Color,
    pub separator: Color,
    pub arrow: Color,
    pub arrow_width: f64,
}

impl ButtonStyle {
    pub fn from_env(env: &Env) -> ButtonStyle {
        ButtonStyle {
            background: env
                .try_get(BUTTON_BACKGROUND_COLOR)
                .unwrap_or(DEFAULT_BUTTON_BACKGROUND),
            hover: env.try_get(BUTTON_HOVER_COLOR).unwrap_or(DEFAULT_ROW_HOVER),
            pressed: env
                .try_get(BUTTON_PRESSED_COLOR)
                .unwrap_or(DEFAULT_ROW_PRESSED),
            border: env.try_get(BUTTON_BORDER_COLOR).unwrap_or(DEFAULT_GRAY),
            separator: env.try_get(POP_SEPARATOR_COLOR).unwrap_or(DEFAULT_GRAY),
            arrow: env.try_get(POP_ARROW_COLOR).unwrap_or(DEFAULT_TEXT),
            arrow_width: env.try_get(POP_ARROW_WIDTH).unwrap_or(DEFAULT_ARROW_WIDTH),
        }
    }
}
