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

//! A single entry of a menu button's dropdown.

use druid::widget::prelude::*;
use druid::{ArcStr, FontDescriptor, ImageBuf, MouseButton};
use tracing::trace;

use super::item_face::ItemFace;
use crate::commands::ROW_CLICKED;
use crate::geometry::DisplayMode;
use crate::theme::RowStyle;

/// One clickable row of the dropdown: an icon, a label and a display mode.
///
/// A row fills itself with a flat color that depends on its pointer state
/// (pressed, then hovered, then idle), draws a one pixel border and lays out
/// its content according to its [`DisplayMode`].
///
/// When a primary-button press on the row is released, the row submits a
/// notification carrying its index. The release does not have to happen
/// inside the row.
///
/// The setters do not request a repaint; a row is configured by its owner
/// before it is placed in a window.
#[derive(Clone)]
pub struct MenuRow {
    index: usize,
    face: ItemFace,
    display_mode: DisplayMode,
    size: Size,
    pressed: bool,
    hovered: bool,
}

impl MenuRow {
    /// Create a row for the item at `index`.
    pub fn new(index: usize, icon: ImageBuf, label: impl Into<ArcStr>) -> MenuRow {
        MenuRow {
            index,
            face: ItemFace::new(Some(icon), label.into(), crate::default_font()),
            display_mode: DisplayMode::default(),
            size: Size::ZERO,
            pressed: false,
            hovered: false,
        }
    }

    /// The position of this row in its menu.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The row's icon, if it has a non-empty one.
    pub fn icon(&self) -> Option<&ImageBuf> {
        self.face.icon()
    }

    /// Set the icon. An empty image unsets it.
    pub fn set_icon(&mut self, icon: ImageBuf) {
        self.face.set_icon(Some(icon));
    }

    /// The row's label.
    pub fn label(&self) -> &ArcStr {
        self.face.label()
    }

    /// Set the label.
    pub fn set_label(&mut self, label: impl Into<ArcStr>) {
        self.face.set_label(label.into());
    }

    /// The label's font.
    pub fn font(&self) -> &FontDescriptor {
        self.face.font()
    }

    /// Set the label's font.
    pub fn set_font(&mut self, font: FontDescriptor) {
        self.face.set_font(font);
    }

    /// How icon and label are arranged.
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Set how icon and label are arranged.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
    }

    /// The size the row lays itself out at.
    pub fn fixed_size(&self) -> Size {
        self.size
    }

    /// Set the size the row lays itself out at.
    pub fn set_fixed_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Whether the left button went down on this row and has not been released.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether the pointer is over this row.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Records a pointer press. Returns `true` if the row is now pressed.
    pub(crate) fn press(&mut self, button: MouseButton) -> bool {
        if button.is_left() {
            self.pressed = true;
        }
        self.pressed
    }

    /// Records a pointer release. Returns `true` if this completes a click.
    pub(crate) fn release(&mut self, button: MouseButton) -> bool {
        if button.is_left() && self.pressed {
            self.pressed = false;
            true
        } else {
            false
        }
    }

    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }
}

impl<T: Data> Widget<T> for MenuRow {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, _data: &mut T, _env: &Env) {
        match event {
            Event::MouseDown(mouse) => {
                if self.press(mouse.button) {
                    ctx.set_active(true);
                    ctx.request_paint();
                }
            }
            Event::MouseUp(mouse) => {
                if self.release(mouse.button) {
                    ctx.set_active(false);
                    ctx.request_paint();
                    trace!("menu row {} clicked", self.index);
                    ctx.submit_notification(ROW_CLICKED.with(self.index));
                }
            }
            _ => (),
        }
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, _data: &T, _env: &Env) {
        if let LifeCycle::HotChanged(hot) = event {
            self.set_hovered(*hot);
            ctx.request_paint();
        }
    }

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &T, _data: &T, _env: &Env) {}

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, _data: &T, env: &Env) -> Size {
        bc.debug_check("MenuRow");
        let style = RowStyle::from_env(env);
        self.face.rebuild(ctx.text(), style.text, env);
        bc.constrain(self.size)
    }

    fn paint(&mut self, ctx: &mut PaintCtx, _data: &T, env: &Env) {
        let style = RowStyle::from_env(env);
        self.face.rebuild(ctx.text(), style.text.clone(), env);

        let bounds = ctx.size().to_rect();
        let background = if self.pressed {
            &style.pressed
        } else if self.hovered {
            &style.hover
        } else {
            &style.background
        };
        ctx.fill(bounds, background);
        ctx.stroke(bounds.inset(-0.5), &style.border, 1.0);

        let content = bounds.inset(-style.margin);
        let layout = self
            .face
            .layout(self.display_mode, content, style.interval, None);
        self.face.paint(ctx, layout);
    }
}
