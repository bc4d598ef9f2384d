use core::{fmt, iter::FusedIterator};

use super::glyph::Glyph;

/// Code points are a single byte, so a font addresses at most 256 records.
pub const MAX_GLYPHS: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontError {
    Truncated { code_point: u8, offset: usize },
    TooNarrow { code_point: u8, width: u8 },
    NonZeroPadding { code_point: u8 },
    NonNullFirst { width: u8 },
    TooManyGlyphs,
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::Truncated { code_point, offset } => write!(
                f,
                "Glyph {code_point} at offset {offset} runs past the end of the font"
            ),
            FontError::TooNarrow { code_point, width } => {
                write!(f, "Glyph {code_point} is too narrow for its spacing ({width} columns)")
            }
            FontError::NonZeroPadding { code_point } => {
                write!(f, "Glyph {code_point} has lit pixels in its spacing columns")
            }
            FontError::NonNullFirst { width } => {
                write!(f, "Glyph 0 must be empty but is {width} columns wide")
            }
            FontError::TooManyGlyphs => write!(f, "More than {MAX_GLYPHS} glyphs"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FontError {}

/// A flattened width-prefixed font.
///
/// Each record is a width byte followed by `width` column bytes, in code
/// point order starting at 0. The last `spacing` columns of every non-empty
/// record are blank separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Font<'a> {
    data: &'a [u8],
    spacing: usize,
}

impl<'a> Font<'a> {
    pub const fn new(data: &'a [u8]) -> Self {
        Self::with_spacing(data, 0)
    }

    pub const fn with_spacing(data: &'a [u8], spacing: usize) -> Self {
        Self { data, spacing }
    }

    pub fn parse(data: &'a [u8], spacing: usize) -> Result<Self, FontError> {
        let font = Self::with_spacing(data, spacing);
        let count = font.check()?;
        log::debug!("parsed font with {} glyphs", count);
        Ok(font)
    }

    /// Walks every record and returns the record count.
    pub const fn check(&self) -> Result<usize, FontError> {
        let data = self.data;
        let mut cursor = 0;
        let mut count = 0;

        while cursor < data.len() {
            if count == MAX_GLYPHS {
                return Err(FontError::TooManyGlyphs);
            }

            let code_point = count as u8;
            let width = data[cursor];
            let end = cursor + 1 + width as usize;
            if end > data.len() {
                return Err(FontError::Truncated {
                    code_point,
                    offset: cursor,
                });
            }

            if count == 0 && width != 0 {
                return Err(FontError::NonNullFirst { width });
            }

            if width > 0 {
                if (width as usize) < self.spacing {
                    return Err(FontError::TooNarrow { code_point, width });
                }

                let mut pad = end - self.spacing;
                while pad < end {
                    if data[pad] != 0 {
                        return Err(FontError::NonZeroPadding { code_point });
                    }
                    pad += 1;
                }
            }

            cursor = end;
            count += 1;
        }

        Ok(count)
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    pub fn spacing(&self) -> usize {
        self.spacing
    }

    pub fn glyphs(&self) -> impl Iterator<Item = Glyph<'a>> + 'a {
        self.records().map(|(_, glyph)| glyph)
    }

    pub fn glyph(&self, code_point: u8) -> Option<Glyph<'a>> {
        self.glyphs().nth(code_point as usize)
    }

    pub fn len(&self) -> usize {
        self.records().count()
    }

    pub fn is_empty(&self) -> bool {
        self.records().next().is_none()
    }

    pub(crate) fn records(&self) -> Records<'a> {
        Records {
            data: self.data,
            spacing: self.spacing,
            cursor: 0,
            code_point: 0,
        }
    }

    /// Reads the record whose width byte sits at `offset`.
    pub(crate) fn glyph_at(&self, offset: usize, code_point: u8) -> Option<Glyph<'a>> {
        let width = *self.data.get(offset)? as usize;
        let start = offset + 1;
        let columns = self.data.get(start..start + width)?;
        Some(Glyph::new(code_point, columns, self.spacing))
    }
}

/// Yields `(offset, glyph)` pairs, where `offset` is the position of the
/// record's width byte.
pub(crate) struct Records<'a> {
    data: &'a [u8],
    spacing: usize,
    cursor: usize,
    code_point: usize,
}

impl<'a> Iterator for Records<'a> {
    type Item = (usize, Glyph<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.code_point >= MAX_GLYPHS {
            return None;
        }

        let offset = self.cursor;
        let glyph = Font::with_spacing(self.data, self.spacing)
            .glyph_at(offset, self.code_point as u8)?;

        self.cursor += 1 + glyph.data().len();
        self.code_point += 1;

        Some((offset, glyph))
    }
}

impl FusedIterator for Records<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{string::ToString, vec, vec::Vec};
    use pretty_assertions::assert_eq;

    const SMALL: &[u8] = &[0, 3, 0x18, 0, 0, 2, 0x7E, 0x7E];

    #[test]
    fn it_walks_records() {
        let font = Font::new(SMALL);
        let widths: Vec<u8> = font.glyphs().map(|g| g.width()).collect();
        assert_eq!(vec![0, 3, 2], widths);
        assert_eq!(3, font.len());
    }

    #[test]
    fn it_finds_glyphs_by_code_point() {
        let font = Font::new(SMALL);
        let glyph = font.glyph(2).unwrap();
        assert_eq!(2, glyph.code_point());
        assert_eq!(&[0x7E, 0x7E], glyph.data());
        assert!(font.glyph(3).is_none());
    }

    #[test]
    fn it_records_offsets() {
        let offsets: Vec<usize> = Font::new(SMALL).records().map(|(o, _)| o).collect();
        assert_eq!(vec![0, 1, 5], offsets);
    }

    #[test]
    fn it_accepts_a_well_formed_font() {
        assert_eq!(Ok(3), Font::with_spacing(SMALL, 0).check());
        assert_eq!(Ok(2), Font::with_spacing(&SMALL[..5], 2).check());
    }

    #[test]
    fn it_rejects_truncated_records() {
        let font = Font::new(&[0, 4, 0xC0, 0xC0]);
        assert_eq!(
            Err(FontError::Truncated {
                code_point: 1,
                offset: 1
            }),
            font.check()
        );
        assert_eq!(1, font.len());
    }

    #[test]
    fn it_rejects_narrow_records() {
        assert_eq!(
            Err(FontError::TooNarrow {
                code_point: 1,
                width: 1
            }),
            Font::with_spacing(&[0, 1, 0], 2).check()
        );
    }

    #[test]
    fn it_rejects_lit_padding() {
        assert_eq!(
            Err(FontError::NonZeroPadding { code_point: 1 }),
            Font::parse(&[0, 4, 0xC0, 0xC0, 0, 1], 2)
        );
    }

    #[test]
    fn it_rejects_a_non_empty_first_glyph() {
        assert_eq!(
            Err(FontError::NonNullFirst { width: 2 }),
            Font::parse(&[2, 0xFF, 0xFF, 0], 0)
        );
        assert_eq!(
            "Glyph 0 must be empty but is 2 columns wide",
            FontError::NonNullFirst { width: 2 }.to_string()
        );
    }

    #[test]
    fn it_counts_only_walkable_records_as_non_empty() {
        assert!(Font::new(&[]).is_empty());
        assert!(Font::new(&[5]).is_empty());
        assert_eq!(0, Font::new(&[5]).len());
        assert!(!Font::new(&[0]).is_empty());
    }

    #[test]
    fn it_caps_the_glyph_count() {
        let data = [0u8; MAX_GLYPHS + 1];
        assert_eq!(Err(FontError::TooManyGlyphs), Font::new(&data).check());
        assert_eq!(Ok(MAX_GLYPHS), Font::new(&data[..MAX_GLYPHS]).check());
        assert_eq!(MAX_GLYPHS, Font::new(&data).glyphs().count());
    }

    #[test]
    fn it_formats_errors() {
        assert_eq!(
            "Glyph 3 has lit pixels in its spacing columns",
            FontError::NonZeroPadding { code_point: 3 }.to_string()
        );
        assert_eq!("More than 256 glyphs", FontError::TooManyGlyphs.to_string());
    }
}
