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

//! Rectangle arithmetic for rows and the pop area.
//!
//! Nothing in here touches a render context, so the layout of a row or of
//! the pop area can be computed (and tested) without a window.

use druid::kurbo::Line;
use druid::{Data, Point, Rect, Size};

/// Which parts of an item are shown, and how they are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Data)]
pub enum DisplayMode {
    /// Only the icon, scaled to fill the content area.
    IconOnly,
    /// Only the label, centered.
    TextOnly,
    /// Icon on the leading side, label on the trailing side.
    TextBesideIcon,
    /// Icon on top, label underneath.
    TextUnderIcon,
}

impl Default for DisplayMode {
    fn default() -> Self {
        DisplayMode::TextUnderIcon
    }
}

/// The regions an item's icon and label are drawn into.
///
/// `icon` is the final, aspect-preserving destination of the image; `text`
/// is the region the label is centered in. Either is `None` when the mode
/// or a missing asset leaves nothing to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemLayout {
    /// Where the icon is drawn.
    pub icon: Option<Rect>,
    /// The region the label is centered in.
    pub text: Option<Rect>,
}

impl DisplayMode {
    /// Lays out an item inside `content`.
    ///
    /// `icon` is the natural size of the icon and `text` the measured size of
    /// the label; pass `None` for a missing icon or an empty label. `interval`
    /// is the gap reserved next to the label. The icon is additionally kept
    /// within `max_icon`, if given.
    pub fn layout(
        self,
        content: Rect,
        icon: Option<Size>,
        text: Option<Size>,
        interval: f64,
        max_icon: Option<Size>,
    ) -> ItemLayout {
        let place_icon = |region: Rect| icon.map(|src| fit_within(src, region, max_icon));
        match self {
            DisplayMode::IconOnly => ItemLayout {
                icon: place_icon(content),
                text: None,
            },
            DisplayMode::TextOnly => ItemLayout {
                icon: None,
                text: text.map(|_| content),
            },
            DisplayMode::TextBesideIcon => {
                let reserved = text.map(|t| t.width + interval).unwrap_or(0.0);
                let side = (content.width() - reserved)
                    .min(content.height())
                    .max(0.0);
                let split = (content.x0 + side).min(content.x1);
                let icon_region = Rect::new(content.x0, content.y0, split, content.y1);
                let text_region = Rect::new(split, content.y0, content.x1, content.y1);
                ItemLayout {
                    icon: place_icon(icon_region),
                    text: text.map(|_| text_region),
                }
            }
            DisplayMode::TextUnderIcon => {
                let reserved = text.map(|t| t.height + interval).unwrap_or(0.0);
                let split = (content.y1 - reserved).max(content.y0);
                let icon_region = Rect::new(content.x0, content.y0, content.x1, split);
                let text_region = Rect::new(content.x0, split, content.x1, content.y1);
                ItemLayout {
                    icon: place_icon(icon_region),
                    text: text.map(|_| text_region),
                }
            }
        }
    }
}

/// Scales `src` to fit `bounds`, preserving its aspect ratio, and centers it.
///
/// Images are scaled up as well as down. A degenerate source or target
/// yields an empty rect at the center of `bounds`.
pub fn fit_centered(src: Size, bounds: Rect) -> Rect {
    let center = bounds.center();
    if src.width <= 0.0 || src.height <= 0.0 || bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return Rect::from_center_size(center, Size::ZERO);
    }
    let scale = (bounds.width() / src.width).min(bounds.height() / src.height);
    Rect::from_center_size(center, Size::new(src.width * scale, src.height * scale))
}

/// Like [`fit_centered`], but the result is never larger than `max`.
pub fn fit_within(src: Size, bounds: Rect, max: Option<Size>) -> Rect {
    match max {
        Some(max) => {
            let limited = Size::new(bounds.width().min(max.width), bounds.height().min(max.height));
            fit_centered(src, Rect::from_center_size(bounds.center(), limited))
        }
        None => fit_centered(src, bounds),
    }
}

/// The origin that centers a block of `size` inside `region`.
pub fn centered_origin(size: Size, region: Rect) -> Point {
    region.center() - size.to_vec2() / 2.0
}

/// Where the dropdown trigger sits on the primary surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Data)]
pub enum PopAreaStyle {
    /// A full-height strip along the trailing edge.
    CenterRight,
    /// A full-height strip along the leading edge.
    CenterLeft,
    /// A small region in the bottom trailing corner.
    CornerBottomRight,
    /// A small region in the bottom leading corner.
    CornerBottomLeft,
}

impl Default for PopAreaStyle {
    fn default() -> Self {
        PopAreaStyle::CenterRight
    }
}

/// Distance of the separator's ends from the top and bottom edges.
const SEPARATOR_INSET: f64 = 5.0;

impl PopAreaStyle {
    /// The pop area of a button of the given `size`.
    pub fn area(self, size: Size) -> Rect {
        let bounds = size.to_rect();
        let sep = size.width * 7.0 / 8.0;
        let strip = size.width - sep;
        // the corner regions are as tall as two thirds of their width
        let top = size.height - (strip / 3.0) * 2.0;
        match self {
            PopAreaStyle::CenterRight => Rect::new(sep, 0.0, bounds.x1, bounds.y1),
            PopAreaStyle::CenterLeft => Rect::new(0.0, 0.0, strip, bounds.y1),
            PopAreaStyle::CornerBottomRight => Rect::new(sep, top, bounds.x1, bounds.y1),
            PopAreaStyle::CornerBottomLeft => Rect::new(0.0, top, strip, bounds.y1),
        }
    }

    /// The vertical line between the pop area and the rest of the button.
    ///
    /// Corner styles have no separator.
    pub fn separator(self, size: Size) -> Option<Line> {
        let area = self.area(size);
        let x = match self {
            PopAreaStyle::CenterRight => area.x0,
            PopAreaStyle::CenterLeft => area.x1,
            PopAreaStyle::CornerBottomRight | PopAreaStyle::CornerBottomLeft => return None,
        };
        Some(Line::new(
            (x, SEPARATOR_INSET),
            (x, (size.height - SEPARATOR_INSET).max(SEPARATOR_INSET)),
        ))
    }
}

/// The two strokes of the default downward arrow drawn inside `area`.
///
/// The arms start at one and two thirds of the width on the horizontal
/// center line and meet below it, half a third lower.
pub fn chevron(area: Rect) -> [Line; 2] {
    let third = area.width() / 3.0;
    let mid_y = area.center().y;
    let left = Point::new(area.x0 + third, mid_y);
    let right = Point::new(area.x0 + third * 2.0, mid_y);
    let tip = Point::new(area.x0 + area.width() / 2.0, mid_y + third / 2.0);
    [Line::new(left, tip), Line::new(right, tip)]
}

/// Destination of a custom pop area icon: the middle third of `area`.
pub fn pop_icon_rect(icon: Size, area: Rect) -> Rect {
    let third = area.width() / 3.0;
    fit_centered(icon, Rect::new(area.x0 + third, area.y0, area.x1 - third, area.y1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    const CONTENT: Rect = Rect::new(2.0, 2.0, 118.0, 78.0);
    const ICON: Size = Size::new(64.0, 32.0);
    const TEXT: Size = Size::new(40.0, 14.0);

    fn aspect(size: Size) -> f64 {
        size.width / size.height
    }

    fn assert_no_overlap(layout: ItemLayout) {
        if let (Some(icon), Some(text)) = (layout.icon, layout.text) {
            assert!(icon.intersect(text).area() <= 1e-9, "{:?} overlaps {:?}", icon, text);
        }
    }

    #[test]
    fn every_mode_keeps_icon_aspect() {
        for mode in &[
            DisplayMode::IconOnly,
            DisplayMode::TextOnly,
            DisplayMode::TextBesideIcon,
            DisplayMode::TextUnderIcon,
        ] {
            let layout = mode.layout(CONTENT, Some(ICON), Some(TEXT), 2.0, None);
            if let Some(icon) = layout.icon {
                assert_approx_eq!(f64, aspect(icon.size()), aspect(ICON), epsilon = 1e-9);
                assert!(CONTENT.union(icon) == CONTENT, "{:?} escapes content", mode);
            }
            assert_no_overlap(layout);
        }
    }

    #[test]
    fn icon_only_fills_content() {
        let layout = DisplayMode::IconOnly.layout(CONTENT, Some(ICON), Some(TEXT), 2.0, None);
        let icon = layout.icon.unwrap();
        assert_approx_eq!(f64, icon.width(), CONTENT.width());
        assert_approx_eq!(f64, icon.center().y, CONTENT.center().y);
        assert_eq!(layout.text, None);
    }

    #[test]
    fn text_beside_icon_reserves_label_width() {
        let layout = DisplayMode::TextBesideIcon.layout(CONTENT, Some(ICON), Some(TEXT), 2.0, None);
        let text = layout.text.unwrap();
        let side = (CONTENT.width() - TEXT.width - 2.0).min(CONTENT.height());
        assert_approx_eq!(f64, text.x0, CONTENT.x0 + side);
        assert_approx_eq!(f64, text.x1, CONTENT.x1);
        assert!(layout.icon.unwrap().x1 <= text.x0 + 1e-9);
    }

    #[test]
    fn text_beside_icon_with_wide_label_squeezes_icon() {
        let wide = Size::new(110.0, 14.0);
        let layout = DisplayMode::TextBesideIcon.layout(CONTENT, Some(ICON), Some(wide), 2.0, None);
        let icon = layout.icon.unwrap();
        assert_approx_eq!(f64, icon.width(), CONTENT.width() - 112.0);
        assert_no_overlap(layout);
    }

    #[test]
    fn text_under_icon_reserves_label_height() {
        let layout = DisplayMode::TextUnderIcon.layout(CONTENT, Some(ICON), Some(TEXT), 2.0, None);
        let text = layout.text.unwrap();
        assert_approx_eq!(f64, text.height(), TEXT.height + 2.0);
        assert_approx_eq!(f64, text.y1, CONTENT.y1);
        assert!(layout.icon.unwrap().y1 <= text.y0 + 1e-9);
    }

    #[test]
    fn missing_assets_are_skipped() {
        let layout = DisplayMode::TextBesideIcon.layout(CONTENT, None, Some(TEXT), 2.0, None);
        assert_eq!(layout.icon, None);
        assert!(layout.text.is_some());

        let layout = DisplayMode::TextUnderIcon.layout(CONTENT, Some(ICON), None, 2.0, None);
        assert!(layout.text.is_none());
        assert_approx_eq!(f64, layout.icon.unwrap().width(), CONTENT.width());

        let layout = DisplayMode::TextOnly.layout(CONTENT, Some(ICON), None, 2.0, None);
        assert_eq!(layout, ItemLayout { icon: None, text: None });
    }

    #[test]
    fn max_icon_limits_scaling() {
        let max = Size::new(16.0, 16.0);
        let layout = DisplayMode::IconOnly.layout(CONTENT, Some(ICON), None, 2.0, Some(max));
        let icon = layout.icon.unwrap();
        assert_approx_eq!(f64, icon.width(), 16.0);
        assert_approx_eq!(f64, icon.height(), 8.0);
        assert_eq!(icon.center(), CONTENT.center());
    }

    #[test]
    fn degenerate_sizes_do_not_panic() {
        let empty = fit_centered(Size::ZERO, CONTENT);
        assert_eq!(empty.size(), Size::ZERO);
        let layout =
            DisplayMode::TextBesideIcon.layout(Rect::ZERO, Some(ICON), Some(TEXT), 2.0, None);
        assert_eq!(layout.icon.unwrap().size(), Size::ZERO);
    }

    #[test]
    fn pop_areas() {
        let size = Size::new(96.0, 72.0);
        assert_eq!(
            PopAreaStyle::CenterRight.area(size),
            Rect::new(84.0, 0.0, 96.0, 72.0)
        );
        assert_eq!(
            PopAreaStyle::CenterLeft.area(size),
            Rect::new(0.0, 0.0, 12.0, 72.0)
        );
        assert_eq!(
            PopAreaStyle::CornerBottomRight.area(size),
            Rect::new(84.0, 64.0, 96.0, 72.0)
        );
        assert_eq!(
            PopAreaStyle::CornerBottomLeft.area(size),
            Rect::new(0.0, 64.0, 12.0, 72.0)
        );
    }

    #[test]
    fn separators() {
        let size = Size::new(96.0, 72.0);
        let line = PopAreaStyle::CenterRight.separator(size).unwrap();
        assert_eq!(line.p0, Point::new(84.0, 5.0));
        assert_eq!(line.p1, Point::new(84.0, 67.0));
        let line = PopAreaStyle::CenterLeft.separator(size).unwrap();
        assert_eq!(line.p0.x, 12.0);
        assert!(PopAreaStyle::CornerBottomRight.separator(size).is_none());
        assert!(PopAreaStyle::CornerBottomLeft.separator(size).is_none());
    }

    #[test]
    fn chevron_points_down_from_the_center_line() {
        let area = Rect::new(84.0, 0.0, 96.0, 72.0);
        let [left, right] = chevron(area);
        assert_eq!(left.p0, Point::new(88.0, 36.0));
        assert_eq!(right.p0, Point::new(92.0, 36.0));
        assert_eq!(left.p1, Point::new(90.0, 38.0));
        assert_eq!(left.p1, right.p1);
    }

    #[test]
    fn pop_icon_uses_middle_third() {
        let area = Rect::new(84.0, 0.0, 96.0, 72.0);
        let rect = pop_icon_rect(Size::new(10.0, 10.0), area);
        assert_approx_eq!(f64, rect.width(), 4.0);
        assert_eq!(rect.center(), area.center());
    }
}
