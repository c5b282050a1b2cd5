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

//! Selection and configuration state of a menu button.
//!
//! [`MenuState`] holds everything a [`MenuButton`] knows apart from its
//! pointer state and its open dropdown window, and decides what a click
//! means. The widget only translates those decisions into druid calls.
//!
//! [`MenuButton`]: crate::widget::MenuButton

use druid::{ArcStr, FontDescriptor, ImageBuf, Point, Size};
use tracing::{debug, warn};

use crate::geometry::{DisplayMode, PopAreaStyle};
use crate::widget::item_face::ItemFace;
use crate::widget::MenuRow;

/// What a completed primary click on the button's surface asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    /// The click landed in the pop area: show the dropdown.
    OpenMenu,
    /// Report the current item.
    Choose(usize),
    /// There is no current item to report.
    Ignore,
}

/// The consequences of a click on a dropdown row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowOutcome {
    /// The index to report to the host, if any.
    pub emit: Option<usize>,
    /// Whether the current item changed.
    pub switched: bool,
}

/// The state behind a menu button.
#[derive(Clone)]
pub struct MenuState {
    items: Vec<MenuRow>,
    current: Option<usize>,
    face: ItemFace,
    click_to_switch: bool,
    click_to_switch_emits: bool,
    pop_area_visible: bool,
    pop_area_icon: Option<ImageBuf>,
    pop_area_style: PopAreaStyle,
    display_mode: DisplayMode,
    icon_size: Size,
}

impl Default for MenuState {
    fn default() -> Self {
        MenuState::new()
    }
}

impl MenuState {
    /// An empty state with the default configuration.
    pub fn new() -> MenuState {
        MenuState {
            items: Vec::new(),
            current: None,
            face: ItemFace::new(None, ArcStr::from(""), crate::default_font()),
            click_to_switch: false,
            click_to_switch_emits: true,
            pop_area_visible: false,
            pop_area_icon: None,
            pop_area_style: PopAreaStyle::default(),
            display_mode: DisplayMode::default(),
            icon_size: Size::new(32.0, 32.0),
        }
    }

    /// Replace the dropdown contents.
    ///
    /// `icons` and `labels` are paired up by position. If their lengths
    /// differ nothing changes. Otherwise each new row takes the button's
    /// current font and display mode, and the first item (if any) becomes
    /// current.
    pub fn set_list<S>(
        &mut self,
        icons: impl IntoIterator<Item = ImageBuf>,
        labels: impl IntoIterator<Item = S>,
    ) where
        S: Into<ArcStr>,
    {
        let icons: Vec<ImageBuf> = icons.into_iter().collect();
        let labels: Vec<ArcStr> = labels.into_iter().map(Into::into).collect();
        if icons.len() != labels.len() {
            warn!(
                "ignoring menu list with {} icons and {} labels",
                icons.len(),
                labels.len()
            );
            return;
        }

        let font = self.face.font().clone();
        let mode = self.display_mode;
        self.items = icons
            .into_iter()
            .zip(labels)
            .enumerate()
            .map(|(index, (icon, label))| {
                let mut row = MenuRow::new(index, icon, label);
                row.set_font(font.clone());
                row.set_display_mode(mode);
                row
            })
            .collect();
        debug!("menu list replaced with {} items", self.items.len());

        self.current = None;
        if self.items.is_empty() {
            self.face.set_icon(None);
            self.face.set_label(ArcStr::from(""));
        } else {
            self.set_current_item_index(0);
        }
    }

    /// Make the item at `index` current and mirror it on the primary surface.
    ///
    /// Returns `true` if anything changed. Selecting the current item again
    /// is a no-op, and an index past the end of the list is rejected.
    pub fn set_current_item_index(&mut self, index: usize) -> bool {
        if self.current == Some(index) {
            return false;
        }
        let item = match self.items.get(index) {
            Some(item) => item,
            None => {
                warn!(
                    "ignoring menu index {} for a list of {} items",
                    index,
                    self.items.len()
                );
                return false;
            }
        };
        let icon = item.icon().cloned();
        let label = item.label().clone();
        self.face.set_icon(icon);
        self.face.set_label(label);
        self.current = Some(index);
        debug!("current menu item is now {}", index);
        true
    }

    /// Apply the switching policy to a click on row `index`.
    pub fn row_clicked(&mut self, index: usize) -> RowOutcome {
        if index >= self.items.len() {
            warn!("ignoring click on stale menu row {}", index);
            return RowOutcome {
                emit: None,
                switched: false,
            };
        }
        let emit = if self.click_to_switch && !self.click_to_switch_emits {
            None
        } else {
            Some(index)
        };
        let switched = self.click_to_switch && self.set_current_item_index(index);
        RowOutcome { emit, switched }
    }

    /// Decide what a primary click released at `pos` on a surface of `size` does.
    pub fn primary_click(&self, pos: Point, size: Size) -> PrimaryAction {
        if self.pop_area_visible && self.pop_area_style.area(size).contains(pos) {
            return PrimaryAction::OpenMenu;
        }
        match self.current {
            Some(index) => PrimaryAction::Choose(index),
            None => PrimaryAction::Ignore,
        }
    }

    /// Prepare the rows for a dropdown whose rows are `row_size` each.
    ///
    /// The stored rows are resized and take the button's current display
    /// mode; the returned rows are copies for the dropdown window.
    pub fn dropdown_rows(&mut self, row_size: Size) -> Vec<MenuRow> {
        let mode = self.display_mode;
        for row in &mut self.items {
            row.set_fixed_size(row_size);
            row.set_display_mode(mode);
        }
        self.items.clone()
    }

    /// The rows, in menu order.
    pub fn items(&self) -> &[MenuRow] {
        &self.items
    }

    /// The number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The index of the current item, if the list is not empty.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// The current item's row.
    pub fn current_item(&self) -> Option<&MenuRow> {
        self.current.and_then(|index| self.items.get(index))
    }

    /// The icon shown on the primary surface.
    pub fn displayed_icon(&self) -> Option<&ImageBuf> {
        self.face.icon()
    }

    /// The label shown on the primary surface.
    pub fn displayed_label(&self) -> &ArcStr {
        self.face.label()
    }

    pub(crate) fn face(&self) -> &ItemFace {
        &self.face
    }

    pub(crate) fn face_mut(&mut self) -> &mut ItemFace {
        &mut self.face
    }

    /// Whether a row click makes that row current.
    pub fn click_to_switch(&self) -> bool {
        self.click_to_switch
    }

    /// Set whether a row click makes that row current.
    pub fn set_click_to_switch(&mut self, enable: bool) {
        self.click_to_switch = enable;
    }

    /// Whether a switching row click is still reported.
    pub fn click_to_switch_with_emit(&self) -> bool {
        self.click_to_switch_emits
    }

    /// Set whether a switching row click is still reported.
    pub fn set_click_to_switch_with_emit(&mut self, enable: bool) {
        self.click_to_switch_emits = enable;
    }

    /// Whether the pop area is drawn and hit tested.
    pub fn pop_area_visible(&self) -> bool {
        self.pop_area_visible
    }

    /// Show or hide the pop area.
    pub fn set_pop_area_visible(&mut self, visible: bool) {
        self.pop_area_visible = visible;
    }

    /// The glyph drawn in the pop area, if not the default arrow.
    pub fn pop_area_icon(&self) -> Option<&ImageBuf> {
        self.pop_area_icon.as_ref()
    }

    /// Set the dropdown glyph. An empty image restores the drawn arrow.
    pub fn set_pop_area_icon(&mut self, icon: ImageBuf) {
        self.pop_area_icon = if icon.width() == 0 || icon.height() == 0 {
            None
        } else {
            Some(icon)
        };
    }

    /// Where the pop area sits.
    pub fn pop_area_style(&self) -> PopAreaStyle {
        self.pop_area_style
    }

    /// Move the pop area.
    pub fn set_pop_area_style(&mut self, style: PopAreaStyle) {
        self.pop_area_style = style;
    }

    /// How icon and label are arranged.
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Set the button's display mode.
    ///
    /// Existing rows pick it up the next time the dropdown is shown.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
    }

    /// The font of the primary label.
    pub fn font(&self) -> &FontDescriptor {
        self.face.font()
    }

    /// Set the button's font. Rows created afterwards copy it.
    pub fn set_font(&mut self, font: FontDescriptor) {
        self.face.set_font(font);
    }

    /// The largest size the primary icon is drawn at.
    pub fn icon_size(&self) -> Size {
        self.icon_size
    }

    /// Set the largest size the primary icon is drawn at.
    pub fn set_icon_size(&mut self, size: Size) {
        self.icon_size = size;
    }
}
