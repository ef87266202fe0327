//! Student profile: who is studying, for which exam, and how much per day.

pub mod parser;
pub mod toml_format;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use parser::{ParsedProfile, ProfileParseError, parse_profile_toml};
pub use toml_format::{ProfileMeta, ProfileToml, SubjectToml};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Language used for every generated message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::En => "en",
            Self::Hi => "hi",
        };
        f.write_str(s)
    }
}

impl FromStr for Language {
    type Err = LanguageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "hi" => Ok(Self::Hi),
            other => Err(LanguageParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`Language`] string.
#[derive(Debug, Clone, Error)]
#[error("invalid language: {0:?} (expected en or hi)")]
pub struct LanguageParseError(pub String);

// ---------------------------------------------------------------------------

/// Pace of the plan. `Gentle` spreads the same tasks over more days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanMode {
    #[default]
    Normal,
    Gentle,
}

impl PlanMode {
    /// Lightening factor applied to daily hours in gentle mode.
    pub const GENTLE_FACTOR: f64 = 0.75;

    /// Generation settings for this mode.
    pub fn settings(self) -> PlanSettings {
        match self {
            Self::Normal => PlanSettings::default(),
            Self::Gentle => PlanSettings {
                lighten_factor: Self::GENTLE_FACTOR,
            },
        }
    }
}

impl fmt::Display for PlanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Normal => "normal",
            Self::Gentle => "gentle",
        };
        f.write_str(s)
    }
}

impl FromStr for PlanMode {
    type Err = PlanModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "gentle" => Ok(Self::Gentle),
            other => Err(PlanModeParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`PlanMode`] string.
#[derive(Debug, Clone, Error)]
#[error("invalid plan mode: {0:?} (expected normal or gentle)")]
pub struct PlanModeParseError(pub String);

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One subject and the small tasks the student listed for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectDetails {
    pub id: String,
    /// Non-empty after trimming; blank subjects are dropped before they get here.
    pub name: String,
    /// May be empty, in which case default topics are synthesized.
    #[serde(default)]
    pub topics: Vec<String>,
}

/// Everything the planner needs to know about the student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub grade: String,
    /// Calendar date string (`YYYY-MM-DD`); empty or unparsable means today.
    #[serde(default)]
    pub exam_date: String,
    /// Positive; callers coerce non-positive input to 1.
    pub daily_hours: f64,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub subjects: Vec<SubjectDetails>,
}

/// Knobs applied on top of the profile for one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSettings {
    /// Multiplier in (0, 1] applied to daily hours.
    pub lighten_factor: f64,
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self { lighten_factor: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_round_trips_through_strings() {
        for lang in [Language::En, Language::Hi] {
            assert_eq!(lang.to_string().parse::<Language>().unwrap(), lang);
        }
        let err = "fr".parse::<Language>().unwrap_err();
        assert!(err.to_string().contains("\"fr\""));
    }

    #[test]
    fn plan_mode_settings() {
        assert_eq!(PlanMode::Normal.settings().lighten_factor, 1.0);
        assert_eq!(PlanMode::Gentle.settings().lighten_factor, 0.75);
        assert!("heavy".parse::<PlanMode>().is_err());
        assert_eq!("gentle".parse::<PlanMode>().unwrap(), PlanMode::Gentle);
    }

    #[test]
    fn profile_serializes_with_camel_case_keys() {
        let profile = StudentProfile {
            grade: "Grade 10".into(),
            exam_date: "2026-11-02".into(),
            daily_hours: 2.5,
            language: Language::Hi,
            subjects: vec![SubjectDetails {
                id: "subject-1".into(),
                name: "Math".into(),
                topics: vec!["Algebra".into()],
            }],
        };
        let text = toml::to_string(&profile).unwrap();
        assert!(text.contains("examDate"));
        assert!(text.contains("dailyHours"));
        assert!(text.contains("language = \"hi\""));
    }
}
