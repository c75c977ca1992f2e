//! Terminal preview of the generated page.
//!
//! Each cell shows two vertically stacked pixels using the upper half block:
//! the foreground colors the top pixel, the background the bottom one.

use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use base64::Engine;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use parking_lot::Mutex;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

const UPPER_HALF_BLOCK: &str = "▀";

/// A decoded image ready to be drawn.
#[derive(Debug)]
pub struct Preview {
    image: RgbaImage,
    /// Last scaled copy, keyed by its size in cells.
    scaled: Mutex<Option<((u16, u16), RgbaImage)>>,
}

impl Preview {
    /// Decode a `data:<mime>;base64,<payload>` source.
    pub fn from_data_url(source: &str) -> Option<Self> {
        let (header, payload) = source.strip_prefix("data:")?.split_once(',')?;
        if !header.ends_with(";base64") {
            return None;
        }
        let bytes = BASE64_ENGINE.decode(payload.trim()).ok()?;
        match image::load_from_memory(&bytes) {
            Ok(decoded) => Some(Self {
                image: decoded.to_rgba8(),
                scaled: Mutex::new(None),
            }),
            Err(err) => {
                tracing::warn!(error = %err, "generated image cannot be previewed");
                None
            }
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Size in cells of the largest fit inside `area` that keeps the aspect ratio.
    fn fit(&self, area: Rect) -> (u16, u16) {
        let (width, height) = self.dimensions();
        if width == 0 || height == 0 || area.width == 0 || area.height == 0 {
            return (0, 0);
        }
        let max_w = u64::from(area.width);
        let max_h = u64::from(area.height) * 2;
        let (w, h) = (u64::from(width), u64::from(height));
        // Scale so both dimensions fit; a cell is one pixel wide, two tall.
        let (fit_w, fit_h) = if w * max_h > h * max_w {
            (max_w, (h * max_w / w).max(1))
        } else {
            ((w * max_h / h).max(1), max_h)
        };
        (fit_w as u16, fit_h.div_ceil(2) as u16)
    }

    /// Run `draw` with the image scaled to `cols` x `rows * 2` pixels,
    /// resizing only when the cell size changed since the last frame.
    fn with_scaled<R>(&self, cols: u16, rows: u16, draw: impl FnOnce(&RgbaImage) -> R) -> R {
        let mut cache = self.scaled.lock();
        let stale = !matches!(cache.as_ref(), Some((size, _)) if *size == (cols, rows));
        if stale {
            let scaled = imageops::resize(
                &self.image,
                u32::from(cols),
                u32::from(rows) * 2,
                FilterType::Triangle,
            );
            *cache = Some(((cols, rows), scaled));
        }
        match cache.as_ref() {
            Some((_, scaled)) => draw(scaled),
            None => draw(&self.image),
        }
    }
}

impl Widget for &Preview {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (cols, rows) = self.fit(area);
        if cols == 0 || rows == 0 {
            return;
        }
        let x0 = area.x + (area.width - cols) / 2;
        let y0 = area.y + (area.height - rows) / 2;

        self.with_scaled(cols, rows, |scaled| {
            for row in 0..rows {
                for col in 0..cols {
                    let top =
                        pixel_color(scaled.get_pixel_checked(u32::from(col), u32::from(row) * 2));
                    let bottom = pixel_color(
                        scaled.get_pixel_checked(u32::from(col), u32::from(row) * 2 + 1),
                    );
                    if let Some(cell) = buf.cell_mut((x0 + col, y0 + row)) {
                        cell.set_symbol(UPPER_HALF_BLOCK).set_fg(top).set_bg(bottom);
                    }
                }
            }
        });
    }
}

/// Flatten a pixel onto white paper.
fn pixel_color(pixel: Option<&Rgba<u8>>) -> Color {
    let Some(Rgba([r, g, b, a])) = pixel.copied() else {
        return Color::Rgb(0xff, 0xff, 0xff);
    };
    let blend = |c: u8| -> u8 {
        let alpha = u16::from(a);
        ((u16::from(c) * alpha + 0xff * (0xff - alpha)) / 0xff) as u8
    };
    Color::Rgb(blend(r), blend(g), blend(b))
}
