//! Localized copy and date formatting.
//!
//! All user-facing text the planner produces goes through here so a plan in
//! one language never mixes in strings from another.

use chrono::{Datelike, NaiveDate};

use crate::profile::{Language, PlanMode};

/// Static strings for one language.
#[derive(Debug)]
pub struct TextCopy {
    /// Focus message for days with nothing pending.
    pub encouragement: &'static str,
    /// Subject label on injected recap tasks.
    pub revision_label: &'static str,
    pub plan_title: &'static str,
    pub todays_focus: &'static str,
    pub gentle_mode_note: &'static str,
    pub normal_mode_note: &'static str,
    pub overload_detected: &'static str,
    pub weekly_revision: &'static str,
    pub no_plan_yet: &'static str,
    weekdays: [&'static str; 7],
    months: [&'static str; 12],
}

static EN: TextCopy = TextCopy {
    encouragement: "Use today for light revision and stay confident.",
    revision_label: "Revision",
    plan_title: "Your steady plan",
    todays_focus: "Today's focus",
    gentle_mode_note: "Plan lightened. Tasks are spaced out so you can breathe easier.",
    normal_mode_note: "Full pace restored. Stay steady and take breaks.",
    overload_detected: "Looks intense. Daily tasks were trimmed to stay within your hours.",
    weekly_revision: "Weekly revision added automatically.",
    no_plan_yet: "No plan yet. Run `studyplan plan create <file>` to make one.",
    weekdays: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
    ],
};

static HI: TextCopy = TextCopy {
    encouragement: "आज हल्का दोहराव करें और आत्मविश्वास रखें।",
    revision_label: "दोहराव",
    plan_title: "आपकी स्थिर योजना",
    todays_focus: "आज का फोकस",
    gentle_mode_note: "योजना हल्की कर दी गई है। कार्यों को आराम से फैलाया गया है।",
    normal_mode_note: "फिर से सामान्य गति पर। ध्यान से पढ़ें और छोटे ब्रेक लें।",
    overload_detected: "थोड़ा सघन था। कार्यों को आपकी समय सीमा में ढाल दिया गया है।",
    weekly_revision: "साप्ताहिक पुनरावलोकन अपने आप जुड़ता रहेगा।",
    no_plan_yet: "अभी कोई योजना नहीं है। `studyplan plan create <file>` चलाएं।",
    weekdays: ["रवि", "सोम", "मंगल", "बुध", "गुरु", "शुक्र", "शनि"],
    months: [
        "जन॰", "फ़र॰", "मार्च", "अप्रैल", "मई", "जून", "जुल॰", "अग॰", "सित॰", "अक्तू॰", "नव॰",
        "दिस॰",
    ],
};

impl TextCopy {
    /// Copy table for `language`.
    pub fn for_language(language: Language) -> &'static TextCopy {
        match language {
            Language::En => &EN,
            Language::Hi => &HI,
        }
    }

    /// Note shown after switching to `mode`.
    pub fn mode_note(&self, mode: PlanMode) -> &'static str {
        match mode {
            PlanMode::Normal => self.normal_mode_note,
            PlanMode::Gentle => self.gentle_mode_note,
        }
    }
}

/// Focus line for a day, based on the subject pending when the day was built.
pub fn focus_message(subject: Option<&str>, language: Language) -> String {
    match (subject, language) {
        (Some(s), Language::En) => format!("Focus on {s} and take short breaks."),
        (Some(s), Language::Hi) => format!("{s} पर ध्यान रखें और छोटे-छोटे ब्रेक लें।"),
        (None, _) => TextCopy::for_language(language).encouragement.to_owned(),
    }
}

/// Title of an injected weekly recap task.
pub fn weekly_recap_title(subjects: &[&str], language: Language) -> String {
    let joined = subjects.join(", ");
    match language {
        Language::En => format!("Weekly recap: {joined}"),
        Language::Hi => format!("सप्ताह का पुनरावलोकन: {joined}"),
    }
}

/// Progress sentence, e.g. "Nice! You finished 3 out of 12 tasks."
pub fn progress_message(completed: usize, total: usize, language: Language) -> String {
    match language {
        Language::En => format!("Nice! You finished {completed} out of {total} tasks."),
        Language::Hi => format!("{completed} में से {total} कार्य पूरे किए।"),
    }
}

/// Short human date: weekday, day number, short month ("Fri, 16 Oct").
pub fn format_readable_date(date: NaiveDate, language: Language) -> String {
    let copy = TextCopy::for_language(language);
    let weekday = copy.weekdays[date.weekday().num_days_from_sunday() as usize];
    let month = copy.months[date.month0() as usize];
    format!("{weekday}, {} {month}", date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn readable_date_english() {
        assert_eq!(format_readable_date(date(2026, 10, 16), Language::En), "Fri, 16 Oct");
        assert_eq!(format_readable_date(date(2026, 3, 1), Language::En), "Sun, 1 Mar");
    }

    #[test]
    fn readable_date_hindi() {
        assert_eq!(
            format_readable_date(date(2026, 10, 16), Language::Hi),
            "शुक्र, 16 अक्तू॰"
        );
    }

    #[test]
    fn focus_message_falls_back_to_encouragement() {
        assert_eq!(
            focus_message(Some("Math"), Language::En),
            "Focus on Math and take short breaks."
        );
        assert_eq!(
            focus_message(None, Language::En),
            "Use today for light revision and stay confident."
        );
        assert_eq!(focus_message(None, Language::Hi), HI.encouragement);
    }

    #[test]
    fn recap_and_progress_copy() {
        assert_eq!(
            weekly_recap_title(&["Math", "Physics"], Language::En),
            "Weekly recap: Math, Physics"
        );
        assert!(weekly_recap_title(&["गणित"], Language::Hi).ends_with("गणित"));
        assert_eq!(
            progress_message(2, 5, Language::En),
            "Nice! You finished 2 out of 5 tasks."
        );
    }
}
