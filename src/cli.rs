// SPDX-License-Identifier: MIT
//
// Command-line parsing for huekit.
//
//   huekit [--dir PATH] [--set DIRECTIVE]... <command> [args]
//
// Global flags may appear anywhere. Every other flag belongs to one
// command; passing it to another command is an error rather than being
// silently ignored.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use hue_library::{LibraryQuery, SortMode};
use hue_palette::PaletteKind;

pub const USAGE: &str = "\
usage: huekit [--dir PATH] [--set OPTION=VALUE]... <command> [args]

commands:
  convert <color>                      show a color as HEX, RGB and HSL
  palettes <color> [--kind KIND]       generate palettes from a base color
  name <color>                         nearest named color
  save <color> <name>                  save a color to the library
  save-palette <name> <hex>... [--desc TEXT]
  save-palette <name> --from <color> --kind KIND [--desc TEXT]
                                       save a palette to the library
  list [colors|palettes] [--search TEXT] [--favorites] [--sort newest|oldest|name]
  favorite <id>                        toggle a saved item's favorite flag
  delete <id>                          remove a saved item
  share <id> [--origin URL]            print a share link
  import <link>                        add a shared color or palette
  export [--out FILE|DIR]              write the library as JSON
  help                                 show this message

colors: #rrggbb, rrggbb, \"r g b\", \"r,g,b\" or \"rgb(r, g, b)\"
options: tints=simple|refined shades=simple|refined
         analogous=neighbors|with-base split=pair|with-base jitter=off|<seed>
environment: HUEKIT_DIR, HUEKIT_OPTIONS, HUEKIT_ORIGIN, HUEKIT_LOG";

/// Which half of the library `list` shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    All,
    Colors,
    Palettes,
}

impl Section {
    #[must_use]
    pub const fn shows_colors(self) -> bool {
        matches!(self, Self::All | Self::Colors)
    }

    #[must_use]
    pub const fn shows_palettes(self) -> bool {
        matches!(self, Self::All | Self::Palettes)
    }
}

/// Where a palette's colors come from when saving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteSource {
    /// Explicit hex colors.
    Colors(Vec<String>),
    /// A generated palette of `kind` from a base color.
    Generated { base: String, kind: PaletteKind },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Convert { color: String },
    Palettes { color: String, kind: Option<PaletteKind> },
    Name { color: String },
    Save { color: String, name: String },
    SavePalette { name: String, description: String, source: PaletteSource },
    List { section: Section, query: LibraryQuery },
    Favorite { id: String },
    Delete { id: String },
    Share { id: String, origin: Option<String> },
    Import { link: String },
    Export { out: Option<PathBuf> },
    Help,
}

/// A fully parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    pub dir: Option<PathBuf>,
    /// `--set` directives, in order.
    pub settings: Vec<String>,
    pub command: Command,
}

// ---------------------------------------------------------------------------
// Raw arguments
// ---------------------------------------------------------------------------

/// Flags that take a value.
const VALUE_FLAGS: &[&str] = &[
    "--dir", "--set", "--kind", "--desc", "--from", "--search", "--sort", "--origin", "--out",
];

/// Flags that stand alone.
const SWITCH_FLAGS: &[&str] = &["--favorites"];

/// Arguments split into positionals and flags, before the command is known.
#[derive(Debug, Default)]
struct RawArgs {
    positional: Vec<String>,
    flags: Vec<(String, Option<String>)>,
}

impl RawArgs {
    fn split(args: &[String]) -> Result<Self> {
        let mut raw = Self::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if arg == "--" {
                raw.positional.extend(iter.by_ref().cloned());
                break;
            }
            if !arg.starts_with("--") {
                raw.positional.push(arg.clone());
                continue;
            }
            let (name, inline) = match arg.split_once('=') {
                Some((name, value)) => (name, Some(value.to_string())),
                None => (arg.as_str(), None),
            };
            if VALUE_FLAGS.contains(&name) {
                let value = match inline {
                    Some(value) => value,
                    None => iter
                        .next()
                        .cloned()
                        .with_context(|| format!("`{name}` needs a value"))?,
                };
                raw.flags.push((name.to_string(), Some(value)));
            } else if SWITCH_FLAGS.contains(&name) && inline.is_none() {
                raw.flags.push((name.to_string(), None));
            } else {
                bail!("unknown flag `{arg}`");
            }
        }
        Ok(raw)
    }

    /// Remove and return the last value of `name`.
    fn take(&mut self, name: &str) -> Option<String> {
        let mut found = None;
        self.flags.retain(|(flag, value)| {
            if flag == name {
                found = value.clone();
                false
            } else {
                true
            }
        });
        found
    }

    /// Remove and return every value of `name`, in order.
    fn take_all(&mut self, name: &str) -> Vec<String> {
        let mut found = Vec::new();
        self.flags.retain(|(flag, value)| {
            if flag == name {
                found.extend(value.clone());
                false
            } else {
                true
            }
        });
        found
    }

    fn take_switch(&mut self, name: &str) -> bool {
        let before = self.flags.len();
        self.flags.retain(|(flag, _)| flag != name);
        self.flags.len() != before
    }

    fn finish(&self, command: &str) -> Result<()> {
        if let Some((flag, _)) = self.flags.first() {
            bail!("`{flag}` is not valid for `{command}`");
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

fn parse_kind(name: &str) -> Result<PaletteKind> {
    PaletteKind::from_name(name).with_context(|| {
        let known: Vec<&str> = PaletteKind::all().iter().map(|k| k.name()).collect();
        format!("unknown palette kind `{name}` (expected one of: {})", known.join(", "))
    })
}

fn joined(rest: &[String], what: &str, command: &str) -> Result<String> {
    if rest.is_empty() {
        bail!("`{command}` needs {what}");
    }
    Ok(rest.join(" "))
}

fn single(rest: &[String], what: &str, command: &str) -> Result<String> {
    match rest {
        [one] => Ok(one.clone()),
        [] => bail!("`{command}` needs {what}"),
        _ => bail!("`{command}` takes a single {what}"),
    }
}

/// Parse the arguments after the program name.
///
/// # Errors
///
/// Unknown commands or flags, missing values, and malformed kinds or sort
/// modes.
pub fn parse_args(args: &[String]) -> Result<Cli> {
    let mut raw = RawArgs::split(args)?;
    let dir = raw.take("--dir").map(PathBuf::from);
    let settings = raw.take_all("--set");

    let Some((name, rest)) = raw.positional.split_first() else {
        raw.finish("help")?;
        return Ok(Cli { dir, settings, command: Command::Help });
    };
    let name = name.clone();
    let rest = rest.to_vec();

    let command = match name.as_str() {
        "convert" => Command::Convert { color: joined(&rest, "a color", &name)? },
        "name" => Command::Name { color: joined(&rest, "a color", &name)? },
        "palettes" => Command::Palettes {
            color: joined(&rest, "a color", &name)?,
            kind: raw.take("--kind").as_deref().map(parse_kind).transpose()?,
        },
        "save" => {
            let Some((color, words)) = rest.split_first() else {
                bail!("`save` needs a color and a name");
            };
            Command::Save { color: color.clone(), name: joined(words, "a name", &name)? }
        }
        "save-palette" => {
            let Some((palette_name, colors)) = rest.split_first() else {
                bail!("`save-palette` needs a name");
            };
            let description = raw.take("--desc").unwrap_or_default();
            let source = match (raw.take("--from"), raw.take("--kind")) {
                (Some(base), Some(kind)) => {
                    if !colors.is_empty() {
                        bail!("`save-palette` takes either colors or `--from`, not both");
                    }
                    PaletteSource::Generated { base, kind: parse_kind(&kind)? }
                }
                (Some(_), None) => bail!("`--from` needs `--kind`"),
                (None, Some(_)) => bail!("`--kind` needs `--from`"),
                (None, None) => PaletteSource::Colors(colors.to_vec()),
            };
            Command::SavePalette { name: palette_name.clone(), description, source }
        }
        "list" => {
            let section = match rest.as_slice() {
                [] => Section::All,
                [s] if s == "colors" => Section::Colors,
                [s] if s == "palettes" => Section::Palettes,
                _ => bail!("`list` takes `colors` or `palettes`"),
            };
            let sort = match raw.take("--sort") {
                Some(mode) => SortMode::from_name(&mode).with_context(|| {
                    format!("unknown sort `{mode}` (expected newest, oldest or name)")
                })?,
                None => SortMode::default(),
            };
            let query = LibraryQuery {
                search: raw.take("--search").unwrap_or_default(),
                favorites_only: raw.take_switch("--favorites"),
                sort,
            };
            Command::List { section, query }
        }
        "favorite" => Command::Favorite { id: single(&rest, "id", &name)? },
        "delete" => Command::Delete { id: single(&rest, "id", &name)? },
        "share" => Command::Share { id: single(&rest, "id", &name)?, origin: raw.take("--origin") },
        "import" => Command::Import { link: single(&rest, "link", &name)? },
        "export" => {
            if !rest.is_empty() {
                bail!("`export` takes no arguments");
            }
            Command::Export { out: raw.take("--out").map(PathBuf::from) }
        }
        "help" | "-h" => Command::Help,
        other => bail!("unknown command `{other}` (try `huekit help`)"),
    };
    raw.finish(&name)?;
    Ok(Cli { dir, settings, command })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
