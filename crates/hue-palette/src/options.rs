//! Palette options — which recipe each palette kind uses.
//!
//! Options are set with short directives, the same shape as an editor's
//! `:set` arguments. The command line reads them from `HUEKIT_OPTIONS` and
//! from `--set` flags.
//!
//! # Supported syntax
//!
//! | Syntax          | Effect                          |
//! |-----------------|---------------------------------|
//! | `option=value`  | Assign a value                  |
//! | `nojitter`      | Turn jitter off                 |
//! | `option&`       | Reset to the default            |
//! | `option?`       | Query the current value         |
//!
//! # Option names
//!
//! | Name        | Values                     | Default     |
//! |-------------|----------------------------|-------------|
//! | `tints`     | `simple`, `refined`        | `simple`    |
//! | `shades`    | `simple`, `refined`        | `simple`    |
//! | `analogous` | `neighbors`, `with-base`   | `neighbors` |
//! | `split`     | `pair`, `with-base`        | `pair`      |
//! | `jitter`    | `off`, or a `u32` seed     | `off`       |

use thiserror::Error;

use crate::recipe::{AnalogousVariant, SplitVariant, ToneVariant};

/// Recipe choices for [`generate_all`](crate::generate_all).
///
/// `Default` is the canonical recipe set with no jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaletteOptions {
    pub tints: ToneVariant,
    pub shades: ToneVariant,
    pub analogous: AnalogousVariant,
    pub split: SplitVariant,
    /// Seed for analogous jitter; `None` keeps palettes exact.
    pub jitter: Option<u32>,
}

/// A parsed option directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetDirective {
    /// `option=value`
    Assign(String, String),
    /// `nooption` — only meaningful for `jitter`.
    Off(String),
    /// `option&`
    Reset(String),
    /// `option?`
    Query(String),
}

/// Why a directive could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("invalid value for {option}: {value}")]
    InvalidValue { option: String, value: String },
    #[error("option {0} needs a value")]
    MissingValue(String),
}

/// Known option names.
pub const OPTION_NAMES: [&str; 5] = ["tints", "shades", "analogous", "split", "jitter"];

/// Returns `true` if `name` is a known option.
#[must_use]
pub fn is_known_option(name: &str) -> bool {
    OPTION_NAMES.contains(&name)
}

/// Parse a whitespace-separated directive string (e.g. `tints=refined nojitter`).
#[must_use]
pub fn parse_set(args: &str) -> Vec<SetDirective> {
    args.split_whitespace().map(parse_set_arg).collect()
}

/// Parse a single directive.
#[must_use]
pub fn parse_set_arg(arg: &str) -> SetDirective {
    if let Some((name, value)) = arg.split_once('=') {
        return SetDirective::Assign(name.to_string(), value.to_string());
    }
    if let Some(name) = arg.strip_suffix('?') {
        return SetDirective::Query(name.to_string());
    }
    if let Some(name) = arg.strip_suffix('&') {
        return SetDirective::Reset(name.to_string());
    }
    // Only strip "no" when the remainder is an option name.
    if let Some(name) = arg.strip_prefix("no") {
        if is_known_option(name) {
            return SetDirective::Off(name.to_string());
        }
    }
    // A bare name asks for its value.
    SetDirective::Query(arg.to_string())
}

impl PaletteOptions {
    /// Current value of `name`, formatted as it would be assigned.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::UnknownOption`] for names not in
    /// [`OPTION_NAMES`].
    pub fn get(&self, name: &str) -> Result<String, OptionError> {
        Ok(match name {
            "tints" => self.tints.name().to_string(),
            "shades" => self.shades.name().to_string(),
            "analogous" => self.analogous.name().to_string(),
            "split" => self.split.name().to_string(),
            "jitter" => self.jitter.map_or_else(|| "off".to_string(), |seed| seed.to_string()),
            _ => return Err(OptionError::UnknownOption(name.to_string())),
        })
    }

    /// Assign `value` to `name`.
    ///
    /// # Errors
    ///
    /// Unknown names and values outside the option's vocabulary.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), OptionError> {
        let invalid = || OptionError::InvalidValue {
            option: name.to_string(),
            value: value.to_string(),
        };
        match name {
            "tints" => self.tints = ToneVariant::from_name(value).ok_or_else(invalid)?,
            "shades" => self.shades = ToneVariant::from_name(value).ok_or_else(invalid)?,
            "analogous" => self.analogous = AnalogousVariant::from_name(value).ok_or_else(invalid)?,
            "split" => self.split = SplitVariant::from_name(value).ok_or_else(invalid)?,
            "jitter" => {
                self.jitter = if value.eq_ignore_ascii_case("off") {
                    None
                } else {
                    Some(value.parse().map_err(|_| invalid())?)
                };
            }
            _ => return Err(OptionError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Reset `name` to its default.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::UnknownOption`] for unknown names.
    pub fn reset(&mut self, name: &str) -> Result<(), OptionError> {
        let defaults = Self::default();
        match name {
            "tints" => self.tints = defaults.tints,
            "shades" => self.shades = defaults.shades,
            "analogous" => self.analogous = defaults.analogous,
            "split" => self.split = defaults.split,
            "jitter" => self.jitter = defaults.jitter,
            _ => return Err(OptionError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Apply one directive. Queries return `Some("name=value")`; everything
    /// else returns `None`.
    ///
    /// # Errors
    ///
    /// Propagates [`OptionError`] from the underlying get/set/reset.
    pub fn apply(&mut self, directive: &SetDirective) -> Result<Option<String>, OptionError> {
        match directive {
            SetDirective::Assign(name, value) => self.set(name, value).map(|()| None),
            SetDirective::Off(name) if name == "jitter" => {
                self.jitter = None;
                Ok(None)
            }
            SetDirective::Off(name) => Err(OptionError::MissingValue(name.clone())),
            SetDirective::Reset(name) => self.reset(name).map(|()| None),
            SetDirective::Query(name) => self.get(name).map(|v| Some(format!("{name}={v}"))),
        }
    }

    /// Parse and apply a directive string, collecting query answers.
    ///
    /// # Errors
    ///
    /// Stops at the first directive that fails.
    pub fn apply_all(&mut self, args: &str) -> Result<Vec<String>, OptionError> {
        let mut answers = Vec::new();
        for directive in parse_set(args) {
            if let Some(answer) = self.apply(&directive)? {
                answers.push(answer);
            }
        }
        Ok(answers)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
