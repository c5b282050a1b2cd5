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

//! The icon and label pair shared by rows and the primary surface.

use druid::piet::{InterpolationMode, PietImage, PietText};
use druid::{
    ArcStr, Color, Env, FontDescriptor, ImageBuf, PaintCtx, Rect, RenderContext, Size, TextLayout,
};

use crate::geometry::{centered_origin, DisplayMode, ItemLayout};

/// An icon, a label, and the font the label is drawn with.
///
/// The label's [`TextLayout`] and the icon's device image are cached; the
/// text layout is rebuilt lazily from `layout` or `paint`.
pub(crate) struct ItemFace {
    icon: Option<ImageBuf>,
    label: ArcStr,
    font: FontDescriptor,
    text: TextLayout<ArcStr>,
    paint_icon: Option<PietImage>,
}

impl ItemFace {
    pub fn new(icon: Option<ImageBuf>, label: ArcStr, font: FontDescriptor) -> ItemFace {
        let mut text = TextLayout::from_text(label.clone());
        text.set_font(font.clone());
        ItemFace {
            icon: icon.and_then(non_empty),
            label,
            font,
            text,
            paint_icon: None,
        }
    }

    pub fn icon(&self) -> Option<&ImageBuf> {
        self.icon.as_ref()
    }

    pub fn set_icon(&mut self, icon: Option<ImageBuf>) {
        self.icon = icon.and_then(non_empty);
        self.paint_icon = None;
    }

    pub fn label(&self) -> &ArcStr {
        &self.label
    }

    pub fn set_label(&mut self, label: ArcStr) {
        self.text.set_text(label.clone());
        self.label = label;
    }

    pub fn font(&self) -> &FontDescriptor {
        &self.font
    }

    pub fn set_font(&mut self, font: FontDescriptor) {
        self.text.set_font(font.clone());
        self.font = font;
    }

    /// Rebuilds the label layout, if anything changed.
    pub fn rebuild(&mut self, factory: &mut PietText, color: Color, env: &Env) {
        self.text.set_text_color(color);
        self.text.rebuild_if_needed(factory, env);
    }

    /// The measured label size; `None` for an empty label.
    pub fn text_size(&self) -> Option<Size> {
        if self.label.is_empty() {
            None
        } else {
            Some(self.text.size())
        }
    }

    pub fn layout(
        &self,
        mode: DisplayMode,
        content: Rect,
        interval: f64,
        max_icon: Option<Size>,
    ) -> ItemLayout {
        mode.layout(
            content,
            self.icon.as_ref().map(ImageBuf::size),
            self.text_size(),
            interval,
            max_icon,
        )
    }

    pub fn paint(&mut self, ctx: &mut PaintCtx, layout: ItemLayout) {
        if let (Some(dest), Some(icon)) = (layout.icon, self.icon.as_ref()) {
            let image = self
                .paint_icon
                .get_or_insert_with(|| icon.to_image(ctx.render_ctx));
            ctx.draw_image(image, dest, InterpolationMode::Bilinear);
        }
        if let Some(region) = layout.text {
            let text = &self.text;
            ctx.with_save(|ctx| {
                ctx.clip(region);
                text.draw(ctx, centered_origin(text.size(), region));
            });
        }
    }
}

impl Clone for ItemFace {
    fn clone(&self) -> Self {
        ItemFace::new(self.icon.clone(), self.label.clone(), self.font.clone())
    }
}

fn non_empty(icon: ImageBuf) -> Option<ImageBuf> {
    if icon.width() == 0 || icon.height() == 0 {
        None
    } else {
        Some(icon)
    }
}
