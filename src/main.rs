// SPDX-License-Identifier: MIT
//
// huekit — a color toolkit on the command line.
//
// This is the main binary that wires together all the crates:
//
//   hue-color   → parsing, HEX/RGB/HSL conversion, nearest names
//   hue-palette → palettes derived from one base color
//   hue-library → saved colors and palettes, share links, export
//
// Every invocation runs exactly one command:
//
//   argv → cli::parse_args → Command → App::run → stdout
//                                        │
//                                        └─> LibraryStore (load, edit, save)
//
// Diagnostics go to stderr through tracing; HUEKIT_LOG sets the filter.

mod cli;

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context as _, Result, bail};
use chrono::{DateTime, Utc};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

use hue_color::{
    ColorInput, ColorMatch, ColorNamer, LocalNamer, ParseColorError, parse_color_input,
};
use hue_library::{
    Library, LibraryQuery, LibraryStore, ShareKind, decode_color, decode_palette, encode_color,
    encode_palette, export_file_name, export_json, share_url, token_from_link,
};
use hue_palette::{PaletteKind, PaletteOptions, generate_all, generate_group};

use cli::{Command, PaletteSource, Section, USAGE};

/// Library directory when neither `--dir` nor `HUEKIT_DIR` is given.
const DEFAULT_DIR: &str = ".huekit";

/// Origin for share links when `--origin` and `HUEKIT_ORIGIN` are unset.
const DEFAULT_ORIGIN: &str = "http://localhost:3000";

// ─── Helpers ────────────────────────────────────────────────────────────────

/// Parse a color typed on the command line.
fn resolve_color(text: &str) -> Result<ColorInput> {
    parse_color_input(text).ok_or_else(|| {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            ParseColorError::Empty.into()
        } else {
            ParseColorError::Unrecognized(trimmed.to_string()).into()
        }
    })
}

/// Build palette options from `HUEKIT_OPTIONS` and then each `--set`, in
/// order. Returns the options and the answers to any `name?` queries.
fn resolve_options(
    from_env: Option<&str>,
    settings: &[String],
) -> Result<(PaletteOptions, Vec<String>)> {
    let mut options = PaletteOptions::default();
    let mut answers = Vec::new();
    if let Some(directives) = from_env {
        answers.extend(options.apply_all(directives).context("in HUEKIT_OPTIONS")?);
    }
    for setting in settings {
        answers.extend(
            options
                .apply_all(setting)
                .with_context(|| format!("in `--set {setting}`"))?,
        );
    }
    Ok((options, answers))
}

fn describe_match(m: &ColorMatch) -> String {
    match &m.hex {
        _ if m.is_exact() => m.name.clone(),
        Some(hex) => format!("{} ({hex}, distance {:.2})", m.name, m.distance),
        None => m.name.clone(),
    }
}

fn favorite_mark(favorite: bool) -> &'static str {
    if favorite { " *" } else { "" }
}

// ─── App ────────────────────────────────────────────────────────────────────

/// Everything a command needs besides its own arguments.
struct App {
    store: LibraryStore,
    options: PaletteOptions,
    origin: String,
    namer: LocalNamer,
}

impl App {
    fn new(dir: &Path, options: PaletteOptions, origin: String) -> Self {
        Self {
            store: LibraryStore::new(dir),
            options,
            origin,
            namer: LocalNamer::default(),
        }
    }

    /// Load the library, let `edit` change it, and save it back.
    fn edit<T>(&self, edit: impl FnOnce(&mut Library) -> Result<T>) -> Result<T> {
        let mut library = self.store.load()?;
        let result = edit(&mut library)?;
        self.store.save(&library)?;
        Ok(result)
    }

    fn run(&self, command: &Command, now: DateTime<Utc>, out: &mut impl Write) -> Result<()> {
        tracing::debug!(?command, "running");
        let now_ms = now.timestamp_millis();
        match command {
            Command::Convert { color } => self.convert(color, out),
            Command::Palettes { color, kind } => self.palettes(color, *kind, out),
            Command::Name { color } => self.name(color, out),
            Command::Save { color, name } => self.save(color, name, now_ms, out),
            Command::SavePalette { name, description, source } => {
                self.save_palette(name, description, source, now_ms, out)
            }
            Command::List { section, query } => self.list(*section, query, out),
            Command::Favorite { id } => self.favorite(id, out),
            Command::Delete { id } => self.delete(id, out),
            Command::Share { id, origin } => self.share(id, origin.as_deref(), out),
            Command::Import { link } => self.import(link, now_ms, out),
            Command::Export { out: path } => self.export(path.as_deref(), now, out),
            Command::Help => {
                writeln!(out, "{USAGE}")?;
                Ok(())
            }
        }
    }

    // ── Color commands ────────────────────────────────────────────────────

    fn convert(&self, text: &str, out: &mut impl Write) -> Result<()> {
        let input = resolve_color(text)?;
        let rgb = input.rgb;
        writeln!(out, "input  {}", input.format.name())?;
        writeln!(out, "hex    {}", rgb.to_hex())?;
        writeln!(out, "rgb    {rgb}")?;
        writeln!(out, "hsl    {}", rgb.to_hsl())?;
        writeln!(out, "name   {}", describe_match(&self.namer.name_rgb(rgb)))?;
        Ok(())
    }

    fn palettes(&self, text: &str, kind: Option<PaletteKind>, out: &mut impl Write) -> Result<()> {
        let base = resolve_color(text)?.rgb.to_hsl();
        let groups = match kind {
            Some(kind) => vec![generate_group(kind, base, &self.options)],
            None => generate_all(base, &self.options),
        };
        for (i, group) in groups.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}: {}", group.title, group.description())?;
            writeln!(out, "  {}", group.hexes().join("  "))?;
        }
        Ok(())
    }

    fn name(&self, text: &str, out: &mut impl Write) -> Result<()> {
        let rgb = resolve_color(text)?.rgb;
        let found = self.namer.name_rgb(rgb);
        writeln!(out, "{}", describe_match(&found))?;
        Ok(())
    }

    // ── Library commands ──────────────────────────────────────────────────

    fn save(&self, color: &str, name: &str, now: i64, out: &mut impl Write) -> Result<()> {
        let hex = resolve_color(color)?.rgb.to_hex();
        let saved = self.edit(|library| Ok(library.add_color(&hex, name, now)?.clone()))?;
        tracing::info!(id = %saved.id, hex = %saved.hex, "color saved");
        writeln!(out, "saved color {}: {} {}", saved.id, saved.hex, saved.name)?;
        Ok(())
    }

    fn save_palette(
        &self,
        name: &str,
        description: &str,
        source: &PaletteSource,
        now: i64,
        out: &mut impl Write,
    ) -> Result<()> {
        let colors = match source {
            PaletteSource::Colors(colors) => colors
                .iter()
                .map(|c| resolve_color(c).map(|input| input.rgb.to_hex()))
                .collect::<Result<Vec<_>>>()?,
            PaletteSource::Generated { base, kind } => {
                let base = resolve_color(base)?.rgb.to_hsl();
                generate_group(*kind, base, &self.options).hexes()
            }
        };
        let saved =
            self.edit(|library| Ok(library.add_palette(name, description, &colors, now)?.clone()))?;
        tracing::info!(id = %saved.id, colors = saved.colors.len(), "palette saved");
        writeln!(
            out,
            "saved palette {}: {} ({} colors)",
            saved.id,
            saved.name,
            saved.colors.len()
        )?;
        Ok(())
    }

    fn list(&self, section: Section, query: &LibraryQuery, out: &mut impl Write) -> Result<()> {
        let library = self.store.load()?;
        if section.shows_colors() {
            let colors = query.apply(&library.colors);
            writeln!(out, "colors ({})", colors.len())?;
            for c in &colors {
                writeln!(out, "  {}  {}  {}{}", c.id, c.hex, c.name, favorite_mark(c.favorite))?;
            }
        }
        if section.shows_palettes() {
            let palettes = query.apply(&library.palettes);
            writeln!(out, "palettes ({})", palettes.len())?;
            for p in &palettes {
                writeln!(
                    out,
                    "  {}  {}{}  {}",
                    p.id,
                    p.name,
                    favorite_mark(p.favorite),
                    p.colors.join(" ")
                )?;
                if let Some(description) = &p.description {
                    writeln!(out, "    {description}")?;
                }
            }
        }
        Ok(())
    }

    fn favorite(&self, id: &str, out: &mut impl Write) -> Result<()> {
        let (name, favorite) = self.edit(|library| {
            if let Some(color) = library.color(id) {
                let name = color.name.clone();
                Ok((name, library.toggle_favorite_color(id)?))
            } else {
                let name = library.palette(id).map(|p| p.name.clone()).unwrap_or_default();
                Ok((name, library.toggle_favorite_palette(id)?))
            }
        })?;
        if favorite {
            writeln!(out, "{name} is now a favorite")?;
        } else {
            writeln!(out, "{name} is no longer a favorite")?;
        }
        Ok(())
    }

    fn delete(&self, id: &str, out: &mut impl Write) -> Result<()> {
        let message = self.edit(|library| {
            if library.color(id).is_some() {
                let color = library.delete_color(id)?;
                Ok(format!("deleted color {} ({})", color.name, color.hex))
            } else {
                let palette = library.delete_palette(id)?;
                Ok(format!("deleted palette {}", palette.name))
            }
        })?;
        tracing::info!(id, "deleted");
        writeln!(out, "{message}")?;
        Ok(())
    }

    fn share(&self, id: &str, origin: Option<&str>, out: &mut impl Write) -> Result<()> {
        let library = self.store.load()?;
        let origin = origin.unwrap_or(&self.origin);
        let url = if let Some(color) = library.color(id) {
            share_url(origin, ShareKind::Color, &encode_color(color)?)
        } else if let Some(palette) = library.palette(id) {
            share_url(origin, ShareKind::Palette, &encode_palette(palette)?)
        } else {
            bail!("no saved item with id `{id}`");
        };
        writeln!(out, "{url}")?;
        Ok(())
    }

    fn import(&self, link: &str, now: i64, out: &mut impl Write) -> Result<()> {
        let (kind, token) = token_from_link(link).context("no share token in link")?;
        let message = match kind {
            ShareKind::Color => {
                let color = decode_color(&token, now).context("failed to load shared color")?;
                let label = format!("{} ({})", color.name, color.hex);
                if self.edit(|library| Ok(library.import_color(color, now)?))? {
                    format!("imported color {label}")
                } else {
                    format!("color {label} is already saved")
                }
            }
            ShareKind::Palette => {
                let palette =
                    decode_palette(&token, now).context("failed to load shared palette")?;
                let label = palette.name.clone();
                if self.edit(|library| Ok(library.import_palette(palette, now)?))? {
                    format!("imported palette {label}")
                } else {
                    format!("a palette named {label} is already saved")
                }
            }
        };
        writeln!(out, "{message}")?;
        Ok(())
    }

    /// Print the export, or write it to a file. A directory gets a file
    /// named after the export time.
    fn export(&self, path: Option<&Path>, now: DateTime<Utc>, out: &mut impl Write) -> Result<()> {
        let library = self.store.load()?;
        let json = export_json(&library, now)?;
        match path {
            Some(path) => {
                let path = if path.is_dir() {
                    path.join(export_file_name(now))
                } else {
                    path.to_path_buf()
                };
                fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
                writeln!(out, "exported to {}", path.display())?;
            }
            None => writeln!(out, "{json}")?,
        }
        Ok(())
    }
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn init_tracing() {
    let filter = EnvFilter::try_from_env("HUEKIT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run(args: &[String]) -> Result<()> {
    let cli = cli::parse_args(args)?;
    let dir = cli
        .dir
        .clone()
        .or_else(|| env::var_os("HUEKIT_DIR").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIR));
    let (options, answers) =
        resolve_options(env::var("HUEKIT_OPTIONS").ok().as_deref(), &cli.settings)?;
    let origin = env::var("HUEKIT_ORIGIN").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string());

    let mut out = io::stdout().lock();
    for answer in &answers {
        writeln!(out, "{answer}")?;
    }
    App::new(&dir, options, origin).run(&cli.command, Utc::now(), &mut out)
}

fn main() {
    init_tracing();
    let args: Vec<String> = env::args().skip(1).collect();

    if let Err(e) = run(&args) {
        eprintln!("huekit: {e:#}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use hue_palette::{AnalogousVariant, ToneVariant};
    use pretty_assertions::assert_eq;

    // ── Helpers ───────────────────────────────────────────────────────────

    /// An app over a fresh library directory.
    fn app(name: &str) -> App {
        let dir = env::temp_dir().join(format!("huekit_{name}_{}", process::id()));
        let _ = fs::remove_dir_all(&dir);
        App::new(&dir, PaletteOptions::default(), DEFAULT_ORIGIN.to_string())
    }

    fn at(millis: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(millis).unwrap()
    }

    fn run_at(app: &App, command: Command, millis: i64) -> Result<String> {
        let mut out = Vec::new();
        app.run(&command, at(millis), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn output(app: &App, command: Command) -> String {
        run_at(app, command, 1_000).unwrap()
    }

    fn cleanup(app: &App) {
        let _ = fs::remove_dir_all(app.store.dir());
    }

    // ── Color commands ────────────────────────────────────────────────────

    #[test]
    fn convert_rgb_text() {
        let app = app("convert");
        assert_eq!(
            output(&app, Command::Convert { color: "255 0 0".into() }),
            "input  RGB\n\
             hex    #ff0000\n\
             rgb    rgb(255, 0, 0)\n\
             hsl    hsl(0, 100%, 50%)\n\
             name   Red\n"
        );
    }

    #[test]
    fn convert_reports_hex_input() {
        let app = app("convert_hex");
        let text = output(&app, Command::Convert { color: "#010101".into() });
        assert!(text.starts_with("input  HEX\nhex    #010101\n"));
        assert!(text.ends_with("name   Black (#000000, distance 1.73)\n"));
    }

    #[test]
    fn convert_rejects_garbage() {
        let app = app("convert_bad");
        let err = run_at(&app, Command::Convert { color: "#abc".into() }, 1).unwrap_err();
        assert_eq!(err.to_string(), "unrecognized color `#abc`");
        let err = run_at(&app, Command::Convert { color: "  ".into() }, 1).unwrap_err();
        assert_eq!(err.to_string(), "empty color string");
    }

    #[test]
    fn single_palette() {
        let app = app("triadic");
        assert_eq!(
            output(
                &app,
                Command::Palettes { color: "#ff0000".into(), kind: Some(PaletteKind::Triadic) }
            ),
            "Triadic: Three hues evenly spaced around the wheel\n  #ff0000  #00ff00  #0000ff\n"
        );
    }

    #[test]
    fn all_palettes_in_order() {
        let app = app("all");
        let text = output(&app, Command::Palettes { color: "#336699".into(), kind: None });
        let titles: Vec<&str> = text
            .lines()
            .filter(|line| !line.starts_with(' ') && !line.is_empty())
            .map(|line| line.split(':').next().unwrap())
            .collect();
        assert_eq!(
            titles,
            [
                "Shades",
                "Tints",
                "Complementary",
                "Analogous",
                "Split-Complementary",
                "Triadic",
                "Tetradic",
                "Monochromatic",
            ]
        );
    }

    #[test]
    fn name_command() {
        let app = app("name");
        assert_eq!(output(&app, Command::Name { color: "0,0,255".into() }), "Blue\n");
    }

    // ── Options ───────────────────────────────────────────────────────────

    #[test]
    fn options_env_then_flags() {
        let settings = vec!["tints=simple".to_string(), "jitter?".to_string()];
        let (options, answers) =
            resolve_options(Some("tints=refined analogous=with-base jitter=3"), &settings).unwrap();
        assert_eq!(options.tints, ToneVariant::Simple);
        assert_eq!(options.analogous, AnalogousVariant::WithBase);
        assert_eq!(options.jitter, Some(3));
        assert_eq!(answers, ["jitter=3"]);
    }

    #[test]
    fn option_errors_name_their_source() {
        let err = resolve_options(Some("split=triple"), &[]).unwrap_err();
        assert_eq!(format!("{err:#}"), "in HUEKIT_OPTIONS: invalid value for split: triple");
        let err = resolve_options(None, &["hue=1".to_string()]).unwrap_err();
        assert_eq!(format!("{err:#}"), "in `--set hue=1`: unknown option: hue");
    }

    // ── Library commands ──────────────────────────────────────────────────

    #[test]
    fn save_list_favorite_delete() {
        let app = app("library");
        assert_eq!(
            output(&app, Command::Save { color: "rgb(255, 136, 0)".into(), name: "Amber".into() }),
            "saved color 1000: #ff8800 Amber\n"
        );
        output(&app, Command::Favorite { id: "1000".into() });
        assert_eq!(
            output(
                &app,
                Command::List { section: Section::Colors, query: LibraryQuery::default() }
            ),
            "colors (1)\n  1000  #ff8800  Amber *\n"
        );
        assert_eq!(
            output(&app, Command::Favorite { id: "1000".into() }),
            "Amber is no longer a favorite\n"
        );
        assert_eq!(
            output(&app, Command::Delete { id: "1000".into() }),
            "deleted color Amber (#ff8800)\n"
        );
        let err = run_at(&app, Command::Delete { id: "1000".into() }, 1).unwrap_err();
        assert_eq!(err.to_string(), "no saved item with id `1000`");
        cleanup(&app);
    }

    #[test]
    fn save_generated_palette() {
        let app = app("generated");
        let saved = output(
            &app,
            Command::SavePalette {
                name: "Primaries".into(),
                description: "the wheel in thirds".into(),
                source: PaletteSource::Generated {
                    base: "#ff0000".into(),
                    kind: PaletteKind::Triadic,
                },
            },
        );
        assert_eq!(saved, "saved palette 1000: Primaries (3 colors)\n");
        assert_eq!(
            output(
                &app,
                Command::List { section: Section::Palettes, query: LibraryQuery::default() }
            ),
            "palettes (1)\n  1000  Primaries  #ff0000 #00ff00 #0000ff\n    the wheel in thirds\n"
        );
        cleanup(&app);
    }

    #[test]
    fn save_palette_rejects_bad_color() {
        let app = app("bad_palette");
        let err = run_at(
            &app,
            Command::SavePalette {
                name: "Oops".into(),
                description: String::new(),
                source: PaletteSource::Colors(vec!["#000000".into(), "nope".into()]),
            },
            1,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "unrecognized color `nope`");
        assert!(app.store.load().unwrap().is_empty());
    }

    #[test]
    fn share_then_import_elsewhere() {
        let sender = app("sender");
        output(&sender, Command::Save { color: "#336699".into(), name: "Steel".into() });
        let link = output(&sender, Command::Share { id: "1000".into(), origin: None });
        assert!(link.starts_with("http://localhost:3000/library?c="));

        let receiver = app("receiver");
        let link = link.trim().to_string();
        assert_eq!(
            run_at(&receiver, Command::Import { link: link.clone() }, 5_000).unwrap(),
            "imported color Steel (#336699)\n"
        );
        assert_eq!(
            run_at(&receiver, Command::Import { link }, 6_000).unwrap(),
            "color Steel (#336699) is already saved\n"
        );
        let library = receiver.store.load().unwrap();
        assert_eq!(library.colors.len(), 1);
        assert_eq!(library.colors[0].id, "5000");
        cleanup(&sender);
        cleanup(&receiver);
    }

    #[test]
    fn share_palette_with_origin() {
        let app = app("share_palette");
        output(
            &app,
            Command::SavePalette {
                name: "Duo".into(),
                description: String::new(),
                source: PaletteSource::Colors(vec!["#000000".into(), "#ffffff".into()]),
            },
        );
        let link = output(
            &app,
            Command::Share { id: "1000".into(), origin: Some("https://colors.test/".into()) },
        );
        assert!(link.starts_with("https://colors.test/library?p="));
        cleanup(&app);
    }

    #[test]
    fn import_bad_link() {
        let app = app("bad_link");
        let err =
            run_at(&app, Command::Import { link: "https://x/library".into() }, 1).unwrap_err();
        assert_eq!(err.to_string(), "no share token in link");
        let err = run_at(&app, Command::Import { link: "https://x/library?c=%%%".into() }, 1)
            .unwrap_err();
        assert_eq!(err.to_string(), "failed to load shared color");
    }

    #[test]
    fn export_to_file() {
        let app = app("export");
        output(&app, Command::Save { color: "#000000".into(), name: "Ink".into() });
        let path = app.store.dir().join("export.json");
        assert_eq!(
            output(&app, Command::Export { out: Some(path.clone()) }),
            format!("exported to {}\n", path.display())
        );
        let json = fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"exportedAt\": \"1970-01-01T00:00:01.000Z\""));
        assert!(json.contains("\"name\": \"Ink\""));
        cleanup(&app);
    }

    #[test]
    fn export_into_directory_names_the_file() {
        let app = app("export_dir");
        output(&app, Command::Save { color: "#000000".into(), name: "Ink".into() });
        let dir = app.store.dir().to_path_buf();
        let expected = dir.join("huekit-library-1000.json");
        assert_eq!(
            output(&app, Command::Export { out: Some(dir) }),
            format!("exported to {}\n", expected.display())
        );
        assert!(fs::read_to_string(&expected).unwrap().contains("\"name\": \"Ink\""));
        cleanup(&app);
    }

    #[test]
    fn import_rejects_empty_shared_palette() {
        let app = app("ghost");
        // {"n":"Ghost","c":[],"f":0}
        let link = "http://localhost:3000/library?p=eyJuIjoiR2hvc3QiLCJjIjpbXSwiZiI6MH0";
        let err = run_at(&app, Command::Import { link: link.into() }, 1).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "failed to load shared palette: a palette needs at least one color"
        );
        assert!(app.store.load().unwrap().is_empty());
    }

    #[test]
    fn help_prints_usage() {
        let app = app("help");
        assert!(output(&app, Command::Help).starts_with("usage: huekit"));
    }
}
