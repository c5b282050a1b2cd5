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

//! Selectors exchanged between the menu button, its dropdown and the host.

use druid::{Selector, WindowId};

/// Notification submitted by the menu button when an item is chosen.
///
/// The payload is the index of the chosen item. It is sent both when a
/// dropdown row is clicked (unless suppressed by the switching policy) and
/// when the primary surface is clicked outside the pop area.
pub const ITEM_CHOSEN: Selector<usize> = Selector::new("druid-menu-button.item-chosen");

/// Command a host can target at a menu button to change its current item.
///
/// Behaves exactly like [`MenuButton::set_current_item_index`].
///
/// [`MenuButton::set_current_item_index`]: crate::widget::MenuButton::set_current_item_index
pub const SET_CURRENT_INDEX: Selector<usize> =
    Selector::new("druid-menu-button.set-current-index");

/// A row was clicked.
///
/// Rows submit this as a notification; the dropdown forwards it as a
/// command to the button that opened it.
pub(crate) const ROW_CLICKED: Selector<usize> = Selector::new("druid-menu-button.row-clicked");

/// The dropdown window with this id went away.
pub(crate) const MENU_DISMISSED: Selector<WindowId> =
    Selector::new("druid-menu-button.menu-dismissed");
