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

//! The root widget of a dropdown window.

use druid::commands::CLOSE_WINDOW;
use druid::widget::prelude::*;
use druid::widget::Flex;
use tracing::trace;

use super::MenuRow;
use crate::commands::{MENU_DISMISSED, ROW_CLICKED};

/// A column of [`MenuRow`]s shown in its own window.
///
/// Row clicks are forwarded to `owner`, after which the window closes
/// itself. Whenever the window goes away the owner is told, so it can
/// forget about the open menu.
pub(crate) struct Dropdown<T> {
    owner: WidgetId,
    rows: Flex<T>,
}

impl<T: Data> Dropdown<T> {
    pub fn new(owner: WidgetId, rows: Vec<MenuRow>) -> Dropdown<T> {
        let rows = rows
            .into_iter()
            .fold(Flex::column(), |column, row| column.with_child(row));
        Dropdown { owner, rows }
    }

    /// The window size needed to show `count` rows of `row_size` each.
    pub fn size_for(row_size: Size, count: usize) -> Size {
        Size::new(row_size.width, row_size.height * count as f64)
    }
}

impl<T: Data> Widget<T> for Dropdown<T> {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        match event {
            Event::Notification(note) => {
                if let Some(&index) = note.get(ROW_CLICKED) {
                    trace!("dropdown forwarding click on row {}", index);
                    ctx.submit_command(ROW_CLICKED.with(index).to(self.owner));
                    ctx.submit_command(CLOSE_WINDOW.to(ctx.window_id()));
                    ctx.set_handled();
                }
            }
            Event::WindowDisconnected => {
                trace!("dropdown window {:?} disconnected", ctx.window_id());
                ctx.submit_command(MENU_DISMISSED.with(ctx.window_id()).to(self.owner));
            }
            _ => self.rows.event(ctx, event, data, env),
        }
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &T, env: &Env) {
        self.rows.lifecycle(ctx, event, data, env)
    }

    fn update(&mut self, ctx: &mut UpdateCtx, old_data: &T, data: &T, env: &Env) {
        self.rows.update(ctx, old_data, data, env)
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &T, env: &Env) -> Size {
        bc.debug_check("Dropdown");
        self.rows.layout(ctx, bc, data, env)
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &T, env: &Env) {
        self.rows.paint(ctx, data, env)
    }
}
