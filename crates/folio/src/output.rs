//! Output formatting helpers for the `folio` CLI.
//!
//! Human-readable rendering lives with each command; this module owns
//! the JSON view models so the machine-readable field names stay stable,
//! plus the shared JSON printer.

use std::io::{self, Write};

use serde::Serialize;

use folio_content::projects::Project;
use folio_core::layout::TimelineLayout;
use folio_core::locale::Locale;

/// JSON shape for `folio home`.
#[derive(Serialize)]
pub struct HomeView {
    pub locale: Locale,
    pub greeting: &'static str,
    pub intro: &'static str,
    pub skills: &'static [&'static str],
    pub github: &'static str,
    pub email: &'static str,
}

/// JSON shape for `folio projects`.
#[derive(Serialize)]
pub struct ProjectsView {
    pub locale: Locale,
    /// The `--tech` filter, when one was applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech: Option<String>,
    pub projects: Vec<Project>,
}

/// JSON shape for `folio experience`: the computed layout, plus the
/// locale the caller asked for.
#[derive(Serialize)]
pub struct ExperienceView {
    pub locale: Locale,
    #[serde(flatten)]
    pub layout: TimelineLayout,
}

/// JSON shape for `folio contact`.
#[derive(Serialize)]
pub struct ContactView {
    pub locale: Locale,
    pub github: &'static str,
    pub email: &'static str,
}

/// Print a value as pretty-printed JSON to stdout.
///
/// Terminates the process with exit code 1 if serialization fails.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::profile::PROFILE;
    use folio_core::layout::layout;
    use folio_core::month::Month;

    #[test]
    fn home_view_shape() {
        let view = HomeView {
            locale: Locale::En,
            greeting: "hello",
            intro: "intro",
            skills: PROFILE.skills,
            github: PROFILE.github,
            email: PROFILE.email,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["locale"], "en");
        assert_eq!(json["greeting"], "hello");
        assert!(json["skills"].as_array().unwrap().len() > 1);
    }

    #[test]
    fn projects_view_omits_absent_filter() {
        let view = ProjectsView {
            locale: Locale::Zh,
            tech: None,
            projects: Vec::new(),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("tech").is_none());
        assert_eq!(json["projects"], serde_json::json!([]));
    }

    #[test]
    fn experience_view_flattens_the_layout() {
        let now: Month = "2024-06".parse().unwrap();
        let view = ExperienceView {
            locale: Locale::En,
            layout: layout(&[], now),
        };
        let json = serde_json::to_value(&view).unwrap();
        // Layout fields sit at the top level next to the locale.
        assert_eq!(json["locale"], "en");
        assert_eq!(json["now"], "2024-06");
        assert_eq!(json["lanes"], 0);
    }
}
