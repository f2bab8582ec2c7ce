//! Bitmap Counter Rendering
//!
//! Draws the "collected/total" cloud counter with a 5x7 bitmap font made of
//! SDL2 rectangles. Only digits and '/' are needed, so nothing else has a glyph.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// 5 pixels of glyph plus 1 of spacing
const CHAR_ADVANCE: u32 = 6;

/// 5x7 pattern for a character (1 = pixel on), or None if unsupported
pub fn glyph(c: char) -> Option<[u8; 7]> {
    let pattern = match c {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '/' => [0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        _ => return None,
    };
    Some(pattern)
}

/// "3/10"
pub fn counter_label(collected: u32, total: u32) -> String {
    format!("{}/{}", collected, total)
}

/// Width in pixels of `text` at `scale`
pub fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * CHAR_ADVANCE * scale
}

/// Draw `text` with its top-left corner at (x, y). Unsupported characters
/// leave a blank cell.
pub fn draw_text(
    canvas: &mut Canvas<Window>,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    canvas.set_draw_color(color);

    let pixel_size = scale as i32;

    for (i, c) in text.chars().enumerate() {
        let Some(pattern) = glyph(c) else {
            continue;
        };
        let char_x = x + (i as u32 * CHAR_ADVANCE * scale) as i32;

        for (row, &pattern_row) in pattern.iter().enumerate() {
            for col in 0..5 {
                if (pattern_row >> (4 - col)) & 1 == 1 {
                    canvas.fill_rect(Rect::new(
                        char_x + (col * pixel_size),
                        y + (row as i32 * pixel_size),
                        scale,
                        scale,
                    ))?;
                }
            }
        }
    }

    Ok(())
}
