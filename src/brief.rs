use std::path::Path;

use anyhow::Context as _;

use crate::error::{AdforgeError, AdforgeResult};

/// Delivery tone requested by the brief.
///
/// Accepted and carried through serialization/display, but generation output
/// does not currently vary by tone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Energetic,
    #[default]
    Trustworthy,
    Premium,
    Friendly,
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Tone::Energetic => "energetic",
            Tone::Trustworthy => "trustworthy",
            Tone::Premium => "premium",
            Tone::Friendly => "friendly",
        };
        f.write_str(s)
    }
}

/// One generation request: the marketing brief.
///
/// All text fields are free-form and may be empty; templates interpolate
/// whatever is given. Only the duration is range-checked, mirroring the
/// submitting form's 15–60 s slider.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Brief {
    pub brand: String,
    pub offer: String,
    pub audience: String,
    pub goal: String,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default = "default_duration")]
    pub duration_seconds: u32,
}

pub const MIN_DURATION_SECS: u32 = 15;
pub const MAX_DURATION_SECS: u32 = 60;

fn default_duration() -> u32 {
    30
}

impl Brief {
    pub fn validate(&self) -> AdforgeResult<()> {
        if self.duration_seconds < MIN_DURATION_SECS || self.duration_seconds > MAX_DURATION_SECS {
            return Err(AdforgeError::validation(format!(
                "duration_seconds must be within {MIN_DURATION_SECS}..={MAX_DURATION_SECS}, got {}",
                self.duration_seconds
            )));
        }
        Ok(())
    }

    /// Read a brief from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> AdforgeResult<Self> {
        let path = path.as_ref();
        let f = std::fs::File::open(path)
            .with_context(|| format!("open brief '{}'", path.display()))?;
        let r = std::io::BufReader::new(f);
        let brief: Brief = serde_json::from_reader(r)
            .with_context(|| format!("parse brief JSON '{}'", path.display()))?;
        Ok(brief)
    }
}
