use hashbrown::HashMap;

use super::{font::Font, glyph::Glyph};

/// Remembers where each code point's record starts, so lookups skip the
/// walk through the width-prefixed data.
#[derive(Debug, Clone)]
pub struct GlyphCache<'a> {
    font: Font<'a>,
    offsets: HashMap<u8, usize>,
}

impl<'a> GlyphCache<'a> {
    pub fn new(font: Font<'a>) -> Self {
        Self {
            font,
            offsets: HashMap::new(),
        }
    }

    pub fn font(&self) -> &Font<'a> {
        &self.font
    }

    pub fn contains(&self, code_point: &u8) -> bool {
        self.offsets.contains_key(code_point)
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Indexes the requested code points. Ones the font lacks are skipped.
    pub fn load_glyphs(&mut self, code_points: &[u8]) {
        let before = self.offsets.len();
        let last = code_points.iter().copied().max();

        for (offset, glyph) in self.font.records() {
            let code_point = glyph.code_point();
            if code_points.contains(&code_point) {
                self.offsets.insert(code_point, offset);
            }
            if Some(code_point) == last {
                break;
            }
        }

        log::debug!("indexed {} glyphs", self.offsets.len() - before);
    }

    pub fn load_all(&mut self) {
        self.offsets
            .extend(self.font.records().map(|(offset, g)| (g.code_point(), offset)));
        log::debug!("indexed all {} glyphs", self.offsets.len());
    }

    pub fn get_glyph(&self, code_point: u8) -> Option<Glyph<'a>> {
        let offset = *self.offsets.get(&code_point)?;
        self.font.glyph_at(offset, code_point)
    }
}
