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

//! An "Import" tool button with one row per file format.
//!
//! Click the button to repeat the last import, or the corner arrow (or a
//! right click) to pick another format.

use druid::piet::ImageFormat;
use druid::widget::{Controller, Flex, Label};
use druid::{
    AppLauncher, Data, Env, Event, EventCtx, ImageBuf, Lens, Widget, WidgetExt, WindowDesc,
};
use druid_menu_button::{theme, DisplayMode, MenuButton, PopAreaStyle, ITEM_CHOSEN};
use tracing::info;

const LABELS: [&str; 3] = ["Import GIF", "Import CSV", "Import PDF"];
const COLORS: [[u8; 3]; 3] = [[0x2e, 0x8b, 0x57], [0x46, 0x82, 0xb4], [0xb2, 0x22, 0x22]];

#[derive(Clone, Data, Lens)]
struct ImportState {
    last_import: String,
}

pub fn main() {
    let main_window = WindowDesc::new(build_root_widget())
        .title("Menu button")
        .window_size((320.0, 240.0));

    AppLauncher::with_window(main_window)
        .log_to_console()
        .configure_env(|env, _| {
            *env = theme::add_to_env(env.clone());
        })
        .launch(ImportState {
            last_import: "Nothing imported yet".into(),
        })
        .expect("Failed to launch application");
}

/// A filled square with a lighter frame, standing in for a real icon.
fn make_icon(rgb: [u8; 3]) -> ImageBuf {
    const SIDE: usize = 48;
    let mut pixels = Vec::with_capacity(SIDE * SIDE * 4);
    for y in 0..SIDE {
        for x in 0..SIDE {
            let edge = x < 4 || y < 4 || x >= SIDE - 4 || y >= SIDE - 4;
            let [r, g, b] = if edge { [0xee; 3] } else { rgb };
            pixels.extend_from_slice(&[r, g, b, 0xff]);
        }
    }
    ImageBuf::from_raw(pixels, ImageFormat::RgbaSeparate, SIDE, SIDE)
}

/// Logs every choice a descendant button reports.
struct LogChoices;

impl<W: Widget<ImportState>> Controller<ImportState, W> for LogChoices {
    fn event(
        &mut self,
        child: &mut W,
        ctx: &mut EventCtx,
        event: &Event,
        data: &mut ImportState,
        env: &Env,
    ) {
        match event {
            Event::Notification(note) if note.is(ITEM_CHOSEN) => {
                if let Some(&index) = note.get(ITEM_CHOSEN) {
                    info!("import format {} ({}) chosen", index, LABELS[index]);
                }
                ctx.set_handled();
            }
            _ => child.event(ctx, event, data, env),
        }
    }
}

fn build_root_widget() -> impl Widget<ImportState> {
    let icons = COLORS.iter().copied().map(make_icon);
    let button = MenuButton::new()
        .with_display_mode(DisplayMode::TextUnderIcon)
        .with_icon_size((42.0, 42.0))
        .with_list(icons, LABELS.iter().copied())
        .click_to_switch(true)
        .click_to_switch_with_emit(true)
        .with_pop_area_visible(true)
        .with_pop_area_style(PopAreaStyle::CornerBottomRight)
        .on_item_chosen(|_ctx, data: &mut ImportState, _env, index| {
            data.last_import = format!("Last action: {}", LABELS[index]);
        });

    Flex::column()
        .with_child(button)
        .with_spacer(16.0)
        .with_child(Label::dynamic(|data: &ImportState, _| {
            data.last_import.clone()
        }))
        .controller(LogChoices)
        .center()
}
