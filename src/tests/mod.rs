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

//! Additional unit tests that cross file or module boundaries.

mod event_tests;

use druid::piet::ImageFormat;
use druid::ImageBuf;

/// A solid `width` x `height` RGBA image.
pub(crate) fn test_icon(width: usize, height: usize) -> ImageBuf {
    let pixels = vec![0x80u8; width * height * 4];
    ImageBuf::from_raw(pixels, ImageFormat::RgbaSeparate, width, height)
}

/// Three icons of distinct sizes, so tests can tell them apart.
pub(crate) fn import_icons() -> Vec<ImageBuf> {
    vec![test_icon(16, 16), test_icon(24, 12), test_icon(8, 32)]
}

pub(crate) const IMPORT_LABELS: [&str; 3] = ["Import GIF", "Import CSV", "Import PDF"];
