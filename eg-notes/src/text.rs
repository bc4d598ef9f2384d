use embedded_graphics::{
    prelude::*,
    primitives::Rectangle,
    text::{
        renderer::{CharacterStyle, TextMetrics, TextRenderer},
        Baseline,
    },
};
use note_sprites::{Font, ROWS};

use crate::{baseline_offset, draw_glyph, glyph_for};

/// Renders text where each character selects the sprite at its code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteTextStyle<'a, C> {
    font: &'a Font<'a>,
    color: C,
}

impl<'a, C: PixelColor> SpriteTextStyle<'a, C> {
    pub fn new(font: &'a Font<'a>, color: C) -> Self {
        Self { font, color }
    }
}

impl<C: PixelColor> CharacterStyle for SpriteTextStyle<'_, C> {
    type Color = C;

    fn set_text_color(&mut self, text_color: Option<Self::Color>) {
        // `None` keeps the current colour.
        if let Some(color) = text_color {
            self.color = color;
        }
    }
}

impl<C: PixelColor> TextRenderer for SpriteTextStyle<'_, C> {
    type Color = C;

    fn draw_string<D>(
        &self,
        text: &str,
        mut position: Point,
        baseline: Baseline,
        target: &mut D,
    ) -> Result<Point, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let top = Point::new(0, baseline_offset(baseline));

        for glyph in text.chars().filter_map(|c| glyph_for(self.font, c)) {
            draw_glyph(&glyph, position + top, self.color, target)?;

            position.x += i32::from(glyph.width());
        }

        Ok(position)
    }

    fn draw_whitespace<D>(
        &self,
        width: u32,
        position: Point,
        _baseline: Baseline,
        _target: &mut D,
    ) -> Result<Point, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        Ok(position + Size::new(width, 0))
    }

    fn measure_string(&self, text: &str, position: Point, baseline: Baseline) -> TextMetrics {
        let dx: u32 = text
            .chars()
            .filter_map(|c| glyph_for(self.font, c))
            .map(|g| u32::from(g.width()))
            .sum();

        let size = if dx == 0 {
            Size::zero()
        } else {
            Size::new(dx, ROWS)
        };

        TextMetrics {
            bounding_box: Rectangle::new(position + Point::new(0, baseline_offset(baseline)), size),
            next_position: position + Size::new(dx, 0),
        }
    }

    fn line_height(&self) -> u32 {
        ROWS
    }
}
