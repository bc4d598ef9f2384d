use core::fmt;

/// Number of pixel rows encoded by one column byte.
pub const ROWS: u32 = 8;

/// One record of a width-prefixed font, borrowed from the font data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph<'a> {
    code_point: u8,
    data: &'a [u8],
    spacing: usize,
}

impl<'a> Glyph<'a> {
    pub(crate) const fn new(code_point: u8, data: &'a [u8], spacing: usize) -> Self {
        Self {
            code_point,
            data,
            spacing,
        }
    }

    pub fn code_point(&self) -> u8 {
        self.code_point
    }

    /// The record's width byte, padding columns included.
    pub fn width(&self) -> u8 {
        self.data.len() as u8
    }

    /// All `width` column bytes.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The meaningful columns, without the trailing spacing.
    pub fn columns(&self) -> &'a [u8] {
        &self.data[..self.data.len().saturating_sub(self.spacing)]
    }

    /// The trailing spacing columns.
    pub fn padding(&self) -> &'a [u8] {
        &self.data[self.columns().len()..]
    }

    pub fn is_null(&self) -> bool {
        self.data.is_empty()
    }

    /// Bit 0 of a column is the top row.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        match self.data.get(x) {
            Some(column) if y < ROWS as usize => column & (1 << y) != 0,
            _ => false,
        }
    }
}

impl fmt::Display for Glyph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..ROWS as usize {
            for x in 0..self.data.len() {
                f.write_str(if self.pixel(x, y) { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }

        Ok(())
    }
}
