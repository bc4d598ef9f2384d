#![no_std]

use embedded_graphics::{prelude::*, text::Baseline};
use note_sprites::{Font, Glyph, ROWS};

pub use note_sprites;

pub mod text;

/// Draws the lit pixels of `glyph` with its top-left corner at `position`.
pub fn draw_glyph<D: DrawTarget>(
    glyph: &Glyph<'_>,
    position: Point,
    color: D::Color,
    target: &mut D,
) -> Result<(), D::Error> {
    let width = glyph.data().len();

    target.draw_iter(
        (0..width)
            .flat_map(|x| (0..ROWS as usize).map(move |y| (x, y)))
            .filter(|&(x, y)| glyph.pixel(x, y))
            .map(|(x, y)| Pixel(position + Point::new(x as i32, y as i32), color)),
    )
}

/// Code points past a single byte, and ones the font lacks, fall back to the
/// empty glyph at code point 0.
fn glyph_for<'a>(font: &Font<'a>, c: char) -> Option<Glyph<'a>> {
    u8::try_from(u32::from(c))
        .ok()
        .and_then(|code_point| font.glyph(code_point))
        .or_else(|| font.glyph(0))
}

/// Vertical offset from the text position to the glyph's top row.
fn baseline_offset(baseline: Baseline) -> i32 {
    match baseline {
        Baseline::Top => 0,
        Baseline::Middle => -((ROWS as i32 - 1) / 2),
        Baseline::Bottom | Baseline::Alphabetic => -(ROWS as i32 - 1),
    }
}
