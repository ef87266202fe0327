//! Profile TOML parser with validation.
//!
//! Parses a `profile.toml` string into a [`StudentProfile`] ready for
//! generation:
//! - The grade must be non-empty after trimming.
//! - Non-positive or non-finite daily hours are coerced to 1.
//! - Subjects with blank names are dropped; missing ids are generated.
//! - Topics are trimmed, split from `topics_text`, and blanks dropped.
//!
//! Coercions are reported as warnings rather than errors.

use thiserror::Error;

use super::toml_format::{ProfileToml, SubjectToml};
use super::{StudentProfile, SubjectDetails};
use crate::plan::allocate::parse_exam_date;

/// Errors that can occur during profile parsing and validation.
#[derive(Debug, Error)]
pub enum ProfileParseError {
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("grade must not be empty")]
    EmptyGrade,
}

/// A validated profile plus notes about any values that were coerced.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedProfile {
    pub profile: StudentProfile,
    pub warnings: Vec<String>,
}

/// Parse and validate a `profile.toml` string.
pub fn parse_profile_toml(content: &str) -> Result<ParsedProfile, ProfileParseError> {
    let raw: ProfileToml = toml::from_str(content)?;
    normalize(raw)
}

/// Turn the raw file contents into a [`StudentProfile`].
fn normalize(raw: ProfileToml) -> Result<ParsedProfile, ProfileParseError> {
    let mut warnings = Vec::new();

    let grade = raw.profile.grade.trim().to_owned();
    if grade.is_empty() {
        return Err(ProfileParseError::EmptyGrade);
    }

    let daily_hours = if raw.profile.daily_hours.is_finite() && raw.profile.daily_hours > 0.0 {
        raw.profile.daily_hours
    } else {
        warnings.push(format!(
            "daily_hours {} is not positive; using 1",
            raw.profile.daily_hours
        ));
        1.0
    };

    let exam_date = raw.profile.exam_date.trim().to_owned();
    if !exam_date.is_empty() && parse_exam_date(&exam_date).is_none() {
        warnings.push(format!(
            "exam_date {exam_date:?} is not a YYYY-MM-DD date; the plan will end today"
        ));
    }

    let mut subjects = Vec::with_capacity(raw.subjects.len());
    for (index, subject) in raw.subjects.into_iter().enumerate() {
        match build_subject(index, subject) {
            Some(details) => subjects.push(details),
            None => warnings.push(format!("subject #{} has no name; skipped", index + 1)),
        }
    }

    for w in &warnings {
        tracing::warn!(warning = %w, "profile value coerced");
    }

    Ok(ParsedProfile {
        profile: StudentProfile {
            grade,
            exam_date,
            daily_hours,
            language: raw.profile.language,
            subjects,
        },
        warnings,
    })
}

/// Build one subject, or `None` when its name is blank.
fn build_subject(index: usize, subject: SubjectToml) -> Option<SubjectDetails> {
    let name = subject.name.trim();
    if name.is_empty() {
        return None;
    }

    let id = subject
        .id
        .map(|id| id.trim().to_owned())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| format!("subject-{}", index + 1));

    let mut topics: Vec<String> = subject
        .topics
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect();
    if let Some(text) = subject.topics_text.as_deref() {
        topics.extend(split_topics_text(text));
    }

    Some(SubjectDetails {
        id,
        name: name.to_owned(),
        topics,
    })
}

/// Split free-form text into topics on newlines and commas.
pub fn split_topics_text(text: &str) -> Vec<String> {
    text.split(['\n', ','])
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Language;

    #[test]
    fn parses_valid_profile() {
        let parsed = parse_profile_toml(
            r#"
[profile]
grade = "  Grade 10 "
exam_date = "2026-12-01"
daily_hours = 2

[[subjects]]
name = " Math "
topics = ["Algebra", "  ", " Geometry "]
"#,
        )
        .unwrap();

        assert!(parsed.warnings.is_empty());
        let profile = parsed.profile;
        assert_eq!(profile.grade, "Grade 10");
        assert_eq!(profile.exam_date, "2026-12-01");
        assert_eq!(profile.daily_hours, 2.0);
        assert_eq!(profile.language, Language::En);
        assert_eq!(profile.subjects.len(), 1);
        assert_eq!(profile.subjects[0].id, "subject-1");
        assert_eq!(profile.subjects[0].name, "Math");
        assert_eq!(profile.subjects[0].topics, vec!["Algebra", "Geometry"]);
    }

    #[test]
    fn empty_grade_is_rejected() {
        let err = parse_profile_toml("[profile]\ngrade = \"   \"\n").unwrap_err();
        assert!(matches!(err, ProfileParseError::EmptyGrade));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let err = parse_profile_toml("[profile\ngrade = 1").unwrap_err();
        assert!(matches!(err, ProfileParseError::TomlError(_)));
    }

    #[test]
    fn non_positive_hours_coerced_to_one() {
        let parsed = parse_profile_toml("[profile]\ngrade = \"G\"\ndaily_hours = 0\n").unwrap();
        assert_eq!(parsed.profile.daily_hours, 1.0);
        assert_eq!(parsed.warnings.len(), 1);

        let parsed = parse_profile_toml("[profile]\ngrade = \"G\"\ndaily_hours = -4.5\n").unwrap();
        assert_eq!(parsed.profile.daily_hours, 1.0);
    }

    #[test]
    fn blank_subjects_are_dropped_with_warning() {
        let parsed = parse_profile_toml(
            r#"
[profile]
grade = "G"

[[subjects]]
name = "   "
topics = ["orphan"]

[[subjects]]
name = "History"
"#,
        )
        .unwrap();
        assert_eq!(parsed.profile.subjects.len(), 1);
        assert_eq!(parsed.profile.subjects[0].name, "History");
        // Id keeps the original position.
        assert_eq!(parsed.profile.subjects[0].id, "subject-2");
        assert!(parsed.warnings[0].contains("subject #1"));
    }

    #[test]
    fn topics_text_is_split_on_lines_and_commas() {
        let parsed = parse_profile_toml(
            r#"
[profile]
grade = "G"

[[subjects]]
id = "bio"
name = "Biology"
topics = ["Cells"]
topics_text = "Chapter 3 summary\r\nPlants, Animals\n\n"
"#,
        )
        .unwrap();
        let subject = &parsed.profile.subjects[0];
        assert_eq!(subject.id, "bio");
        assert_eq!(
            subject.topics,
            vec!["Cells", "Chapter 3 summary", "Plants", "Animals"]
        );
    }

    #[test]
    fn unparsable_exam_date_is_kept_with_warning() {
        let parsed =
            parse_profile_toml("[profile]\ngrade = \"G\"\nexam_date = \"next friday\"\n").unwrap();
        assert_eq!(parsed.profile.exam_date, "next friday");
        assert!(parsed.warnings[0].contains("exam_date"));
    }
}
