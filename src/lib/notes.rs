//! Note sprites for an 8-row dot-matrix display.
//!
//! The display shows four note lanes, each two rows high. A sprite lights
//! some combination of lanes over two columns, followed by two blank
//! columns that separate it from its neighbour.

use super::{font::Font, glyph::Glyph};

/// Blank columns at the end of every note sprite.
pub const NOTE_SPACING: usize = 2;

/// Column bits lit by each lane, bottom lane first.
pub const LANE_MASKS: [u8; 4] = [0xC0, 0x30, 0x0C, 0x03];

#[rustfmt::skip]
pub const NOTES_DATA: [u8; 81] = [
    0,                    // 0 null
    4, 0xC0, 0xC0, 0, 0,  // 1 note-1
    4, 0x30, 0x30, 0, 0,  // 2 note-2
    4, 0x0C, 0x0C, 0, 0,  // 3 note-3
    4, 0x03, 0x03, 0, 0,  // 4 note-4
    4, 0xF0, 0xF0, 0, 0,  // 5 note-1-2
    4, 0x3C, 0x3C, 0, 0,  // 6 note-2-3
    4, 0x0F, 0x0F, 0, 0,  // 7 note-3-4
    4, 0xFC, 0xFC, 0, 0,  // 8 note-1-2-3
    4, 0x3F, 0x3F, 0, 0,  // 9 note-2-3-4
    4, 0xFF, 0xFF, 0, 0,  // 10 note-1-2-3-4
    4, 0xCC, 0xCC, 0, 0,  // 11 note-1-3
    4, 0xC3, 0xC3, 0, 0,  // 12 note-1-4
    4, 0x33, 0x33, 0, 0,  // 13 note-2-4
    4, 0xF3, 0xF3, 0, 0,  // 14 note-1-2-4
    4, 0xCF, 0xCF, 0, 0,  // 15 note-1-3-4
    4, 0x00, 0x00, 0, 0,  // 16 blank
    // Room for up to 256 sprites.
];

pub const NOTES: Font<'static> = Font::with_spacing(&NOTES_DATA, NOTE_SPACING);

const _: () = assert!(matches!(NOTES.check(), Ok(17)), "malformed note sprites");

/// Returns the sprite at `index`, or `None` past the end of the table.
pub fn lookup(index: u8) -> Option<Glyph<'static>> {
    NOTES.glyph(index)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Note {
    Null = 0,
    Note1,
    Note2,
    Note3,
    Note4,
    Note12,
    Note23,
    Note34,
    Note123,
    Note234,
    Note1234,
    Note13,
    Note14,
    Note24,
    Note124,
    Note134,
    Blank,
}

impl Note {
    pub const ALL: [Note; 17] = [
        Note::Null,
        Note::Note1,
        Note::Note2,
        Note::Note3,
        Note::Note4,
        Note::Note12,
        Note::Note23,
        Note::Note34,
        Note::Note123,
        Note::Note234,
        Note::Note1234,
        Note::Note13,
        Note::Note14,
        Note::Note24,
        Note::Note124,
        Note::Note134,
        Note::Blank,
    ];

    pub fn code_point(self) -> u8 {
        self as u8
    }

    pub fn from_code_point(code_point: u8) -> Option<Note> {
        Self::ALL.get(code_point as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Note::Null => "null",
            Note::Note1 => "note-1",
            Note::Note2 => "note-2",
            Note::Note3 => "note-3",
            Note::Note4 => "note-4",
            Note::Note12 => "note-1-2",
            Note::Note23 => "note-2-3",
            Note::Note34 => "note-3-4",
            Note::Note123 => "note-1-2-3",
            Note::Note234 => "note-2-3-4",
            Note::Note1234 => "note-1-2-3-4",
            Note::Note13 => "note-1-3",
            Note::Note14 => "note-1-4",
            Note::Note24 => "note-2-4",
            Note::Note124 => "note-1-2-4",
            Note::Note134 => "note-1-3-4",
            Note::Blank => "blank",
        }
    }

    pub fn from_name(name: &str) -> Option<Note> {
        Self::ALL.iter().copied().find(|note| note.name() == name)
    }

    pub fn glyph(self) -> Glyph<'static> {
        // Every variant has a record; the table length is checked at compile time.
        match NOTES.glyph(self.code_point()) {
            Some(glyph) => glyph,
            None => unreachable!(),
        }
    }

    /// Which lanes the sprite lights, bottom lane first.
    pub fn lanes(self) -> [bool; 4] {
        let column = self.glyph().columns().first().copied().unwrap_or(0);
        LANE_MASKS.map(|mask| column & mask == mask)
    }

    /// The sprite lighting exactly `lanes`. No lit lane gives `Blank`.
    pub fn from_lanes(lanes: [bool; 4]) -> Note {
        let column = lanes
            .iter()
            .zip(LANE_MASKS)
            .filter(|(lit, _)| **lit)
            .fold(0, |column, (_, mask)| column | mask);

        Self::ALL[1..]
            .iter()
            .copied()
            .find(|note| note.glyph().columns().first() == Some(&column))
            .unwrap_or(Note::Blank)
    }
}

impl From<Note> for u8 {
    fn from(note: Note) -> u8 {
        note.code_point()
    }
}
