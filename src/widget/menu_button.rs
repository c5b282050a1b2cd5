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

//! A tool button with a dropdown of iconized items.

use druid::commands::CLOSE_WINDOW;
use druid::piet::InterpolationMode;
use druid::widget::prelude::*;
use druid::{ArcStr, FontDescriptor, ImageBuf, Vec2, WindowConfig, WindowId, WindowLevel};
use tracing::{debug, trace};

use super::dropdown::Dropdown;
use super::MenuRow;
use crate::commands::{ITEM_CHOSEN, MENU_DISMISSED, ROW_CLICKED, SET_CURRENT_INDEX};
use crate::geometry::{chevron, pop_icon_rect, DisplayMode, PopAreaStyle};
use crate::menu_state::{MenuState, PrimaryAction};
use crate::theme::{ButtonStyle, RowStyle};

const DEFAULT_SIZE: Size = Size::new(96.0, 72.0);

/// A button showing the current item of a list, with a dropdown to pick
/// another one.
///
/// The primary surface draws the current item's icon and label. Clicking
/// it reports the current item with an [`ITEM_CHOSEN`] notification (and
/// the [`on_item_chosen`] callback, if set). When the pop area is visible,
/// a click inside it opens the dropdown instead; a secondary click anywhere
/// on the button always opens it.
///
/// Clicking a row in the dropdown closes it and, depending on
/// [`click_to_switch`] and [`click_to_switch_with_emit`], reports the row
/// and/or makes it the current item.
///
/// While the dropdown is open the button does not report clicks; pressing
/// it closes the dropdown.
///
/// The button learns that its dropdown went away when the dropdown window
/// is disconnected, which druid only does for windows closed through
/// [`CLOSE_WINDOW`]. If the platform closes the dropdown some other way,
/// the button still considers it open, and the next press on the button
/// only dismisses it.
///
/// The button ignores its data; `T` only has to match its surroundings.
///
/// # Examples
///
/// ```no_run
/// use druid::{ImageBuf, Widget};
/// use druid_menu_button::{MenuButton, PopAreaStyle};
///
/// fn build(icons: Vec<ImageBuf>) -> impl Widget<()> {
///     MenuButton::new()
///         .with_list(icons, vec!["Import GIF", "Import CSV", "Import PDF"])
///         .click_to_switch(true)
///         .with_pop_area_visible(true)
///         .with_pop_area_style(PopAreaStyle::CornerBottomRight)
///         .on_item_chosen(|_ctx, _data, _env, index| println!("chose {}", index))
/// }
/// ```
///
/// [`on_item_chosen`]: MenuButton::on_item_chosen
/// [`click_to_switch`]: MenuButton::click_to_switch
/// [`click_to_switch_with_emit`]: MenuButton::click_to_switch_with_emit
/// [`CLOSE_WINDOW`]: druid::commands::CLOSE_WINDOW
pub struct MenuButton<T> {
    state: MenuState,
    size: Size,
    open_menu: Option<WindowId>,
    on_item_chosen: Option<Box<dyn Fn(&mut EventCtx, &mut T, &Env, usize)>>,
}

impl<T: Data> MenuButton<T> {
    /// Create an empty menu button.
    pub fn new() -> MenuButton<T> {
        MenuButton {
            state: MenuState::new(),
            size: DEFAULT_SIZE,
            open_menu: None,
            on_item_chosen: None,
        }
    }

    /// Builder-style method for [`set_list`].
    ///
    /// [`set_list`]: MenuButton::set_list
    pub fn with_list<S: Into<ArcStr>>(
        mut self,
        icons: impl IntoIterator<Item = ImageBuf>,
        labels: impl IntoIterator<Item = S>,
    ) -> Self {
        self.set_list(icons, labels);
        self
    }

    /// Builder-style method for setting the display mode.
    pub fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.set_display_mode(mode);
        self
    }

    /// Builder-style method for setting the font.
    ///
    /// Call this before [`with_list`], rows copy the font when they are made.
    ///
    /// [`with_list`]: MenuButton::with_list
    pub fn with_font(mut self, font: FontDescriptor) -> Self {
        self.set_font(font);
        self
    }

    /// Builder-style method for setting the largest size of the primary icon.
    pub fn with_icon_size(mut self, size: impl Into<Size>) -> Self {
        self.set_icon_size(size.into());
        self
    }

    /// Builder-style method for setting the size of the button and its rows.
    pub fn with_fixed_size(mut self, size: impl Into<Size>) -> Self {
        self.size = size.into();
        self
    }

    /// Builder-style method for [`set_click_to_switch`].
    ///
    /// [`set_click_to_switch`]: MenuButton::set_click_to_switch
    pub fn click_to_switch(mut self, enable: bool) -> Self {
        self.set_click_to_switch(enable);
        self
    }

    /// Builder-style method for [`set_click_to_switch_with_emit`].
    ///
    /// [`set_click_to_switch_with_emit`]: MenuButton::set_click_to_switch_with_emit
    pub fn click_to_switch_with_emit(mut self, enable: bool) -> Self {
        self.set_click_to_switch_with_emit(enable);
        self
    }

    /// Builder-style method for showing the pop area.
    pub fn with_pop_area_visible(mut self, visible: bool) -> Self {
        self.set_pop_area_visible(visible);
        self
    }

    /// Builder-style method for setting the pop area glyph.
    pub fn with_pop_area_icon(mut self, icon: ImageBuf) -> Self {
        self.set_pop_area_icon(icon);
        self
    }

    /// Builder-style method for placing the pop area.
    pub fn with_pop_area_style(mut self, style: PopAreaStyle) -> Self {
        self.set_pop_area_style(style);
        self
    }

    /// Provide a closure to be called with the index of each chosen item.
    ///
    /// This is called in addition to the [`ITEM_CHOSEN`] notification.
    pub fn on_item_chosen(
        mut self,
        f: impl Fn(&mut EventCtx, &mut T, &Env, usize) + 'static,
    ) -> Self {
        self.on_item_chosen = Some(Box::new(f));
        self
    }

    /// Replace the dropdown contents with one row per icon and label.
    ///
    /// If `icons` and `labels` differ in length the call is ignored.
    /// Otherwise the first item becomes current.
    pub fn set_list<S: Into<ArcStr>>(
        &mut self,
        icons: impl IntoIterator<Item = ImageBuf>,
        labels: impl IntoIterator<Item = S>,
    ) {
        self.state.set_list(icons, labels);
    }

    /// Make the item at `index` current.
    ///
    /// Returns `false` if `index` is already current or out of range.
    pub fn set_current_item_index(&mut self, index: usize) -> bool {
        self.state.set_current_item_index(index)
    }

    /// Whether clicking a row makes it the current item.
    pub fn set_click_to_switch(&mut self, enable: bool) {
        self.state.set_click_to_switch(enable);
    }

    /// Whether a row click that switches the current item is still reported.
    ///
    /// Has no effect unless click-to-switch is enabled.
    pub fn set_click_to_switch_with_emit(&mut self, enable: bool) {
        self.state.set_click_to_switch_with_emit(enable);
    }

    /// Show or hide the pop area.
    pub fn set_pop_area_visible(&mut self, visible: bool) {
        self.state.set_pop_area_visible(visible);
    }

    /// Draw `icon` in the pop area instead of the default arrow.
    pub fn set_pop_area_icon(&mut self, icon: ImageBuf) {
        self.state.set_pop_area_icon(icon);
    }

    /// Place the pop area.
    pub fn set_pop_area_style(&mut self, style: PopAreaStyle) {
        self.state.set_pop_area_style(style);
    }

    /// Set how icons and labels are arranged, on the button and its rows.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.state.set_display_mode(mode);
    }

    /// Set the font. Rows made by later calls to [`set_list`] copy it.
    ///
    /// [`set_list`]: MenuButton::set_list
    pub fn set_font(&mut self, font: FontDescriptor) {
        self.state.set_font(font);
    }

    /// Set the largest size the primary icon is drawn at.
    pub fn set_icon_size(&mut self, size: Size) {
        self.state.set_icon_size(size);
    }

    /// The selection and configuration of this button.
    pub fn state(&self) -> &MenuState {
        &self.state
    }

    /// The index of the current item.
    pub fn current_index(&self) -> Option<usize> {
        self.state.current_index()
    }

    /// The current item's row.
    pub fn current_item(&self) -> Option<&MenuRow> {
        self.state.current_item()
    }

    /// All rows, in menu order.
    pub fn items(&self) -> &[MenuRow] {
        self.state.items()
    }

    /// Whether a dropdown opened by this button is showing.
    pub fn is_menu_open(&self) -> bool {
        self.open_menu.is_some()
    }

    fn choose(&self, ctx: &mut EventCtx, data: &mut T, env: &Env, index: usize) {
        debug!("menu item {} chosen", index);
        ctx.submit_notification(ITEM_CHOSEN.with(index));
        if let Some(f) = &self.on_item_chosen {
            f(ctx, data, env, index);
        }
    }

    fn show_menu(&mut self, ctx: &mut EventCtx, data: &T, env: &Env) {
        if self.state.is_empty() {
            trace!("not opening an empty menu");
            return;
        }
        let row_size = ctx.size();
        let rows = self.state.dropdown_rows(row_size);
        let window_size = Dropdown::<T>::size_for(row_size, rows.len());
        // child windows are positioned relative to their parent window
        let position = ctx.window_origin() + Vec2::new(0.0, row_size.height);

        let config = WindowConfig::default()
            .show_titlebar(false)
            .resizable(false)
            .window_size(window_size)
            .set_level(WindowLevel::DropDown(ctx.window().clone()))
            .set_position(position);
        let dropdown = Dropdown::new(ctx.widget_id(), rows);
        let window = ctx.new_sub_window(config, dropdown, data.clone(), env.clone());
        trace!("opened menu window {:?}", window);
        self.open_menu = Some(window);
    }

    fn close_menu(&mut self, ctx: &mut EventCtx) {
        if let Some(window) = self.open_menu.take() {
            trace!("closing menu window {:?}", window);
            ctx.submit_command(CLOSE_WINDOW.to(window));
        }
    }

    /// Clear the pressed look and take focus back from the dropdown.
    fn reset_after_menu(&mut self, ctx: &mut EventCtx) {
        ctx.set_active(false);
        ctx.request_focus();
        ctx.request_paint();
    }
}

impl<T: Data> Default for MenuButton<T> {
    fn default() -> Self {
        MenuButton::new()
    }
}

impl<T: Data> Widget<T> for MenuButton<T> {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        match event {
            Event::MouseDown(_) if self.open_menu.is_some() => {
                self.close_menu(ctx);
                self.reset_after_menu(ctx);
            }
            Event::MouseDown(mouse) => {
                if mouse.button.is_right() {
                    self.show_menu(ctx, data, env);
                } else if mouse.button.is_left() {
                    ctx.set_active(true);
                    ctx.request_paint();
                }
            }
            Event::MouseUp(mouse) if mouse.button.is_left() => {
                if ctx.is_active() {
                    ctx.set_active(false);
                    ctx.request_paint();
                    match self.state.primary_click(mouse.pos, ctx.size()) {
                        PrimaryAction::OpenMenu => self.show_menu(ctx, data, env),
                        PrimaryAction::Choose(index) => self.choose(ctx, data, env, index),
                        PrimaryAction::Ignore => (),
                    }
                }
            }
            Event::Command(cmd) => {
                if let Some(&index) = cmd.get(ROW_CLICKED) {
                    self.open_menu = None;
                    let outcome = self.state.row_clicked(index);
                    if let Some(index) = outcome.emit {
                        self.choose(ctx, data, env, index);
                    }
                    self.reset_after_menu(ctx);
                    ctx.set_handled();
                } else if let Some(&window) = cmd.get(MENU_DISMISSED) {
                    if self.open_menu == Some(window) {
                        trace!("menu window {:?} dismissed", window);
                        self.open_menu = None;
                        self.reset_after_menu(ctx);
                    }
                    ctx.set_handled();
                } else if let Some(&index) = cmd.get(SET_CURRENT_INDEX) {
                    if self.state.set_current_item_index(index) {
                        ctx.request_paint();
                    }
                    ctx.set_handled();
                }
            }
            _ => (),
        }
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, _data: &T, _env: &Env) {
        match event {
            LifeCycle::HotChanged(_) => ctx.request_paint(),
            LifeCycle::BuildFocusChain => ctx.register_for_focus(),
            _ => (),
        }
    }

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &T, _data: &T, _env: &Env) {}

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, _data: &T, env: &Env) -> Size {
        bc.debug_check("MenuButton");
        let text_color = RowStyle::from_env(env).text;
        self.state.face_mut().rebuild(ctx.text(), text_color, env);
        bc.constrain(self.size)
    }

    fn paint(&mut self, ctx: &mut PaintCtx, _data: &T, env: &Env) {
        let row_style = RowStyle::from_env(env);
        let style = ButtonStyle::from_env(env);
        let size = ctx.size();
        let bounds = size.to_rect();

        let background = if ctx.is_active() || self.open_menu.is_some() {
            &style.pressed
        } else if ctx.is_hot() {
            &style.hover
        } else {
            &style.background
        };
        ctx.fill(bounds, background);
        ctx.stroke(bounds.inset(-0.5), &style.border, 1.0);

        let mode = self.state.display_mode();
        let icon_size = self.state.icon_size();
        let content = bounds.inset(-row_style.margin);
        self.state
            .face_mut()
            .rebuild(ctx.text(), row_style.text.clone(), env);
        let layout = self
            .state
            .face()
            .layout(mode, content, row_style.interval, Some(icon_size));
        self.state.face_mut().paint(ctx, layout);

        if !self.state.pop_area_visible() {
            return;
        }
        let pop_style = self.state.pop_area_style();
        let area = pop_style.area(size);
        if let Some(line) = pop_style.separator(size) {
            ctx.stroke(line, &style.separator, 1.0);
        }
        match self.state.pop_area_icon() {
            Some(icon) => {
                let dest = pop_icon_rect(icon.size(), area);
                let image = icon.to_image(ctx.render_ctx);
                ctx.draw_image(&image, dest, InterpolationMode::Bilinear);
            }
            None => {
                for arm in chevron(area).iter() {
                    ctx.stroke(*arm, &style.arrow, style.arrow_width);
                }
            }
        }
    }
}
