//! TOML format types for profile files.
//!
//! These types map directly to the `profile.toml` on-disk format and are
//! deserialized via `serde` + the `toml` crate. Validation and coercion
//! happen in [`super::parser`].

use serde::{Deserialize, Serialize};

use super::Language;

/// Top-level structure of a `profile.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileToml {
    /// Student metadata.
    pub profile: ProfileMeta,
    /// Subjects to study, in priority order.
    #[serde(default)]
    pub subjects: Vec<SubjectToml>,
}

/// Student-level metadata in `[profile]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileMeta {
    /// Class or grade label, e.g. "Grade 10".
    pub grade: String,
    /// Exam date as `YYYY-MM-DD`. Absent means the plan starts and ends today.
    #[serde(default)]
    pub exam_date: String,
    /// Hours available per day.
    #[serde(default = "default_daily_hours")]
    pub daily_hours: f64,
    #[serde(default)]
    pub language: Language,
}

/// A single `[[subjects]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubjectToml {
    /// Stable identifier. Generated from the position when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// Small tasks, one per entry.
    #[serde(default)]
    pub topics: Vec<String>,
    /// Free-form tasks, one per line or separated by commas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics_text: Option<String>,
}

fn default_daily_hours() -> f64 {
    3.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_minimal_profile() {
        let toml_str = r#"
[profile]
grade = "Grade 10"
"#;
        let profile: ProfileToml = toml::from_str(toml_str).expect("should parse");
        assert_eq!(profile.profile.grade, "Grade 10");
        assert_eq!(profile.profile.exam_date, "");
        assert_eq!(profile.profile.daily_hours, 3.0); // default
        assert_eq!(profile.profile.language, Language::En);
        assert!(profile.subjects.is_empty());
    }

    #[test]
    fn deserialize_full_profile() {
        let toml_str = r#"
[profile]
grade = "Class 12"
exam_date = "2026-11-30"
daily_hours = 2.5
language = "hi"

[[subjects]]
id = "phy"
name = "Physics"
topics = ["Optics", "Waves"]

[[subjects]]
name = "Chemistry"
topics_text = """
Chapter 3 summary
Organic reactions, Periodic table
"""
"#;
        let profile: ProfileToml = toml::from_str(toml_str).expect("should parse");
        assert_eq!(profile.profile.daily_hours, 2.5);
        assert_eq!(profile.profile.language, Language::Hi);
        assert_eq!(profile.subjects.len(), 2);
        assert_eq!(profile.subjects[0].id.as_deref(), Some("phy"));
        assert_eq!(profile.subjects[0].topics, vec!["Optics", "Waves"]);
        assert!(profile.subjects[1].topics.is_empty());
        assert!(profile.subjects[1].topics_text.is_some());
    }

    #[test]
    fn rejects_unknown_language() {
        let toml_str = r#"
[profile]
grade = "Grade 9"
language = "fr"
"#;
        assert!(toml::from_str::<ProfileToml>(toml_str).is_err());
    }
}
