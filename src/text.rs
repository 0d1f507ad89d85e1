//! Bitmap text for figure annotations, drawn from the 8x8 glyphs of `font8x8`.

use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::{Rgb, RgbImage};

const GLYPH_SIZE: u32 = 8;

/// Width in pixels of `text` drawn at `scale`
pub fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * GLYPH_SIZE * scale
}

/// Height in pixels of one line of text drawn at `scale`
pub fn text_height(scale: u32) -> u32 {
    GLYPH_SIZE * scale
}

fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

/// Calls `plot(x, y)` for every lit pixel of `text`, in text-local
/// coordinates with the origin at the top left.
fn for_each_lit_pixel(text: &str, scale: u32, mut plot: impl FnMut(u32, u32)) {
    for (index, c) in text.chars().enumerate() {
        let x_offset = index as u32 * GLYPH_SIZE * scale;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                // bit 0 is the leftmost pixel
                if bits & (1 << col) == 0 {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        plot(
                            x_offset + col * scale + dx,
                            row as u32 * scale + dy,
                        );
                    }
                }
            }
        }
    }
}

fn put_clipped(canvas: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x < 0 || y < 0 || x >= canvas.width() as i64 || y >= canvas.height() as i64 {
        return;
    }
    canvas.put_pixel(x as u32, y as u32, color);
}

/// Draw `text` left to right with its top-left corner at `(x, y)`
pub fn draw_text(canvas: &mut RgbImage, text: &str, x: i64, y: i64, scale: u32, color: Rgb<u8>) {
    for_each_lit_pixel(text, scale, |tx, ty| {
        put_clipped(canvas, x + tx as i64, y + ty as i64, color);
    });
}

/// Draw `text` centred horizontally on `center_x`
pub fn draw_text_centered(
    canvas: &mut RgbImage,
    text: &str,
    center_x: i64,
    y: i64,
    scale: u32,
    color: Rgb<u8>,
) {
    let x = center_x - text_width(text, scale) as i64 / 2;
    draw_text(canvas, text, x, y, scale, color);
}

/// Draw `text` rotated a quarter turn counter-clockwise so it reads bottom
/// to top, centred vertically on `center_y` with its left edge at `x`
pub fn draw_text_vertical(
    canvas: &mut RgbImage,
    text: &str,
    x: i64,
    center_y: i64,
    scale: u32,
    color: Rgb<u8>,
) {
    let length = text_width(text, scale) as i64;
    let bottom = center_y + length / 2;
    for_each_lit_pixel(text, scale, |tx, ty| {
        put_clipped(canvas, x + ty as i64, bottom - 1 - tx as i64, color);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    fn ink_bounds(canvas: &RgbImage) -> Option<(u32, u32, u32, u32)> {
        canvas
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == BLACK)
            .fold(None, |bounds, (x, y, _)| match bounds {
                None => Some((x, y, x, y)),
                Some((x0, y0, x1, y1)) => Some((x0.min(x), y0.min(y), x1.max(x), y1.max(y))),
            })
    }

    #[test]
    fn measures_text() {
        assert_eq!(text_width("Slice", 2), 80);
        assert_eq!(text_height(3), 24);
        assert_eq!(text_width("", 2), 0);
    }

    #[test]
    fn horizontal_text_stays_inside_its_box() {
        let mut canvas = RgbImage::from_pixel(64, 32, WHITE);
        draw_text(&mut canvas, "AB", 4, 4, 1, BLACK);

        let (x0, y0, x1, y1) = ink_bounds(&canvas).unwrap();
        assert!(x0 >= 4 && x1 < 4 + 16);
        assert!(y0 >= 4 && y1 < 4 + 8);
    }

    #[test]
    fn vertical_text_is_taller_than_wide() {
        let mut canvas = RgbImage::from_pixel(32, 64, WHITE);
        draw_text_vertical(&mut canvas, "AXIS", 4, 32, 1, BLACK);

        let (x0, y0, x1, y1) = ink_bounds(&canvas).unwrap();
        assert!(x1 - x0 < 8);
        assert!(y1 - y0 > 16);
        assert!(y0 >= 16 && y1 < 48);
    }

    #[test]
    fn text_is_clipped_at_canvas_edges() {
        let mut canvas = RgbImage::from_pixel(8, 8, WHITE);
        draw_text(&mut canvas, "WWWW", -4, -4, 2, BLACK);
        draw_text_vertical(&mut canvas, "WWWW", 6, 4, 2, BLACK);
    }
}
