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

//! A tool button with a dropdown of iconized items, for [druid].
//!
//! [`MenuButton`] shows the current item of a list on its face. Clicking the
//! face reports that item; clicking its pop area (or right-clicking anywhere
//! on it) opens a dropdown of [`MenuRow`]s to report or switch to another
//! item. Reports arrive as [`ITEM_CHOSEN`] notifications and through an
//! optional callback.
//!
//! Colors and metrics are read from the [`Env`]; see the [`theme`] module.
//!
//! [druid]: https://github.com/linebender/druid
//! [`Env`]: druid::Env

#![deny(rustdoc::broken_intra_doc_links, unsafe_code)]
#![warn(missing_docs)]

pub mod commands;
pub mod geometry;
pub mod menu_state;
pub mod theme;
pub mod widget;

#[cfg(test)]
mod tests;

pub use commands::{ITEM_CHOSEN, SET_CURRENT_INDEX};
pub use geometry::{DisplayMode, ItemLayout, PopAreaStyle};
pub use menu_state::{MenuState, PrimaryAction, RowOutcome};
pub use widget::{MenuButton, MenuRow};

use druid::{FontDescriptor, FontFamily};

/// The font rows and buttons use until one is set.
pub(crate) fn default_font() -> FontDescriptor {
    FontDescriptor::new(FontFamily::SYSTEM_UI).with_size(13.0)
}
