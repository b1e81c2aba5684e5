//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code.

use crate::panel::Icon;

use super::geometry::Rect;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). Returns the blended color
/// with full opacity.
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds operations are clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, the height is reduced to
    /// what the buffer can hold.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let expected_size = width * height;
        let actual_size = buffer.len();

        let (width, height) = if actual_size < expected_size && width > 0 {
            (width, actual_size / width)
        } else {
            (width, height)
        };

        Self {
            buffer,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Clamp a rect to pixel bounds as (x0, y0, x1, y1), end exclusive
    fn pixel_bounds(&self, rect: Rect) -> (usize, usize, usize, usize) {
        let x0 = (rect.x.max(0.0) as usize).min(self.width);
        let y0 = (rect.y.max(0.0) as usize).min(self.height);
        let x1 = ((rect.x + rect.width).max(0.0) as usize).min(self.width);
        let y1 = ((rect.y + rect.height).max(0.0) as usize).min(self.height);
        (x0, y0, x1, y1)
    }

    /// Fill a rectangle with a solid color (no alpha blending)
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let (x0, y0, x1, y1) = self.pixel_bounds(rect);
        for y in y0..y1 {
            let row_start = y * self.width;
            self.buffer[row_start + x0..row_start + x1.max(x0)].fill(color);
        }
    }

    /// Fill a rectangle with alpha blending (color is ARGB format)
    pub fn fill_rect_blended(&mut self, rect: Rect, color: u32) {
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            return self.fill_rect(rect, color | 0xFF000000);
        }

        let (x0, y0, x1, y1) = self.pixel_bounds(rect);
        for y in y0..y1 {
            let row_start = y * self.width;
            for x in x0..x1 {
                let idx = row_start + x;
                self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
            }
        }
    }

    /// Get a single pixel (bounds-checked, returns 0 if out of bounds)
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }

    /// Draw a rectangle with a 1px border
    pub fn draw_bordered_rect(&mut self, rect: Rect, fill_color: u32, border_color: u32) {
        self.fill_rect_blended(rect, fill_color);

        let opaque_border = border_color | 0xFF000000;
        let Rect {
            x,
            y,
            width,
            height,
        } = rect;
        self.fill_rect(Rect::new(x, y, width, 1.0), opaque_border);
        self.fill_rect(Rect::new(x, y + height - 1.0, width, 1.0), opaque_border);
        self.fill_rect(Rect::new(x, y, 1.0, height), opaque_border);
        self.fill_rect(Rect::new(x + width - 1.0, y, 1.0, height), opaque_border);
    }

    /// Draw a diagonal cross filling `rect` (close box glyph)
    pub fn draw_cross(&mut self, rect: Rect, color: u32) {
        let (x0, y0, x1, y1) = self.pixel_bounds(rect);
        let side = (x1 - x0).min(y1 - y0);
        for i in 0..side {
            let top = (y0 + i) * self.width;
            self.buffer[top + x0 + i] = color;
            self.buffer[top + x0 + side - 1 - i] = color;
        }
    }

    /// Blit an icon scaled to fit within `dest`, preserving aspect ratio.
    /// Centers the image. Uses nearest-neighbor scaling.
    pub fn blit_icon(&mut self, icon: &Icon, dest: Rect) {
        let (img_width, img_height) = (icon.width(), icon.height());
        let (dest_x, dest_y, dest_x1, dest_y1) = self.pixel_bounds(dest);
        let (dest_w, dest_h) = (dest_x1 - dest_x, dest_y1 - dest_y);
        if img_width == 0 || img_height == 0 || dest_w == 0 || dest_h == 0 {
            return;
        }

        let scale_x = dest_w as f64 / img_width as f64;
        let scale_y = dest_h as f64 / img_height as f64;
        let scale = scale_x.min(scale_y);

        let scaled_w = (img_width as f64 * scale) as usize;
        let scaled_h = (img_height as f64 * scale) as usize;

        let offset_x = dest_x + (dest_w.saturating_sub(scaled_w)) / 2;
        let offset_y = dest_y + (dest_h.saturating_sub(scaled_h)) / 2;

        for dy in 0..scaled_h {
            let py = offset_y + dy;
            if py >= self.height {
                break;
            }
            let src_y = ((dy as f64 / scale) as u32).min(img_height - 1);
            let row_start = py * self.width;

            for dx in 0..scaled_w {
                let px = offset_x + dx;
                if px >= self.width {
                    break;
                }
                let src_x = ((dx as f64 / scale) as u32).min(img_width - 1);
                let Some(argb) = icon.argb_at(src_x, src_y) else {
                    continue;
                };
                let a = (argb >> 24) as f32 / 255.0;

                if a >= 1.0 {
                    self.buffer[row_start + px] = argb;
                } else if a > 0.0 {
                    self.buffer[row_start + px] =
                        blend_colors(self.buffer[row_start + px], argb, a);
                }
            }
        }
    }
}
