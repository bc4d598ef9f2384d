use std::fmt::Write as _;

use anyhow::{bail, Context, Result};
use clap::Parser as _;
use note_sprites::{Glyph, GlyphCache, Note, NOTES, ROWS};

#[derive(clap::Parser, Debug)]
#[command(about = "Inspect the note sprite table")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::ValueEnum, Copy, Clone, Default, Debug)]
enum DumpFormat {
    /// Space separated hex bytes, one record per line
    #[default]
    Hex,
    /// A C array initializer
    C,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// List every sprite with its index, name and columns
    List,
    /// Preview one sprite
    Show {
        /// Sprite index or name, e.g. `5` or `note-1-2`
        sprite: String,
    },
    /// Print the flattened table
    Dump {
        #[arg(long, value_enum, default_value_t)]
        format: DumpFormat,
    },
    /// Preview several sprites side by side
    Banner {
        #[arg(required = true)]
        sprites: Vec<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let output = match args.command {
        Command::List => list(),
        Command::Show { sprite } => resolve(&sprite)?.to_string(),
        Command::Dump { format } => dump(format),
        Command::Banner { sprites } => banner(&sprites)?,
    };
    print!("{output}");

    Ok(())
}

fn resolve(sprite: &str) -> Result<Glyph<'static>> {
    let index = match sprite.parse::<usize>() {
        Ok(index) => index,
        Err(_) => Note::from_name(sprite)
            .with_context(|| format!("unknown sprite name '{sprite}'"))?
            .code_point()
            .into(),
    };

    match u8::try_from(index).ok().and_then(|cp| NOTES.glyph(cp)) {
        Some(glyph) => Ok(glyph),
        None => bail!("no sprite at index {index}"),
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn list() -> String {
    let mut out = String::new();
    for note in Note::ALL {
        let glyph = note.glyph();
        let _ = writeln!(
            out,
            "{:>3}  {:<13} {}  {}",
            note.code_point(),
            note.name(),
            glyph.width(),
            hex(glyph.columns())
        );
    }
    out
}

fn dump(format: DumpFormat) -> String {
    let mut out = String::new();
    match format {
        DumpFormat::Hex => {
            for glyph in NOTES.glyphs() {
                let mut record = vec![glyph.width()];
                record.extend_from_slice(glyph.data());
                let _ = writeln!(out, "{}", hex(&record));
            }
        }
        DumpFormat::C => {
            out.push_str("const uint8_t notes[] = {\n");
            for glyph in NOTES.glyphs() {
                let mut record = vec![glyph.width().to_string()];
                record.extend(glyph.data().iter().map(|b| format!("0x{b:02X}")));
                let name = Note::from_code_point(glyph.code_point()).map_or("", Note::name);
                let _ = writeln!(
                    out,
                    "    {}, // {} {}",
                    record.join(", "),
                    glyph.code_point(),
                    name
                );
            }
            out.push_str("};\n");
        }
    }
    out
}

fn banner(sprites: &[String]) -> Result<String> {
    let mut code_points = Vec::with_capacity(sprites.len());
    for sprite in sprites {
        code_points.push(resolve(sprite)?.code_point());
    }

    let mut cache = GlyphCache::new(NOTES);
    cache.load_glyphs(&code_points);

    let glyphs = code_points
        .iter()
        .map(|&cp| cache.get_glyph(cp).context("sprite missing from cache"))
        .collect::<Result<Vec<_>>>()?;

    let mut out = String::new();
    for y in 0..ROWS as usize {
        out.extend(
            glyphs
                .iter()
                .flat_map(|g| (0..g.data().len()).map(move |x| if g.pixel(x, y) { '#' } else { '.' })),
        );
        out.push('\n');
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_resolves_names_and_indices() {
        assert_eq!(5, resolve("note-1-2").unwrap().code_point());
        assert_eq!(5, resolve("5").unwrap().code_point());
        assert_eq!(0, resolve("null").unwrap().code_point());
    }

    #[test]
    fn it_rejects_unknown_sprites() {
        assert_eq!(
            "no sprite at index 17",
            resolve("17").unwrap_err().to_string()
        );
        assert_eq!(
            "no sprite at index 300",
            resolve("300").unwrap_err().to_string()
        );
        assert_eq!(
            "unknown sprite name 'bogus'",
            resolve("bogus").unwrap_err().to_string()
        );
    }

    #[test]
    fn it_lists_every_sprite() {
        let list = list();
        let lines: Vec<&str> = list.lines().collect();
        assert_eq!(17, lines.len());
        assert_eq!("  0  null          0  ", lines[0]);
        assert_eq!(" 10  note-1-2-3-4  4  FF FF", lines[10]);
    }

    #[test]
    fn it_dumps_hex_records() {
        let dump = dump(DumpFormat::Hex);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(17, lines.len());
        assert_eq!("00", lines[0]);
        assert_eq!("04 C0 C0 00 00", lines[1]);
        assert_eq!("04 00 00 00 00", lines[16]);
    }

    #[test]
    fn it_dumps_a_c_array() {
        let dump = dump(DumpFormat::C);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!("const uint8_t notes[] = {", lines[0]);
        assert_eq!("    0, // 0 null", lines[1]);
        assert_eq!("    4, 0xC0, 0xC0, 0x00, 0x00, // 1 note-1", lines[2]);
        assert_eq!(Some(&"};"), lines.last());
    }

    #[test]
    fn it_prints_a_banner() {
        let sprites = ["note-1".to_string(), "4".to_string()];
        let expected = "\
....##..
....##..
........
........
........
........
##......
##......
";
        assert_eq!(expected, banner(&sprites).unwrap());
    }

    #[test]
    fn it_fails_a_banner_with_an_unknown_sprite() {
        let sprites = ["note-1".to_string(), "note-9".to_string()];
        assert!(banner(&sprites).is_err());
    }
}
