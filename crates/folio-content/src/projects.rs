//! The owner's project list, plus loading of user-supplied project files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use folio_core::locale::LocalizedText;

use crate::Result;

/// Helper for `skip_serializing_if` on `bool` fields.
fn is_false(b: &bool) -> bool {
    !b
}

/// Helper for `skip_serializing_if` on `Vec` fields.
fn is_empty_vec<T>(v: &Vec<T>) -> bool {
    v.is_empty()
}

/// One portfolio project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub description: LocalizedText,

    /// Technologies used, in display order.
    #[serde(default, skip_serializing_if = "is_empty_vec")]
    pub tech: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,

    /// Client work without public code; rendered with a marker instead
    /// of links.
    #[serde(default, skip_serializing_if = "is_false")]
    pub private: bool,
}

/// The built-in project list, in display order.
pub fn built_in() -> Vec<Project> {
    vec![
        Project {
            name: "driftnet".into(),
            description: LocalizedText::new(
                "Realtime match server framework for small multiplayer games.",
                "給小型多人遊戲用的即時對戰伺服器框架。",
            ),
            tech: vec!["Rust".into(), "Tokio".into(), "WebSocket".into()],
            github: Some("https://github.com/weilun-dev/driftnet".into()),
            demo: None,
            private: false,
        },
        Project {
            name: "cronical".into(),
            description: LocalizedText::new(
                "Observability dashboard for fleets of cron jobs.",
                "排程任務的監控儀表板。",
            ),
            tech: vec!["Go".into(), "PostgreSQL".into(), "HTMX".into()],
            github: Some("https://github.com/weilun-dev/cronical".into()),
            demo: Some("https://cronical.weilun.dev".into()),
            private: false,
        },
        Project {
            name: "shanshui".into(),
            description: LocalizedText::new(
                "Procedural ink-wash landscape wallpaper generator.",
                "程序生成的水墨山水桌布產生器。",
            ),
            tech: vec!["TypeScript".into(), "Canvas".into()],
            github: Some("https://github.com/weilun-dev/shanshui".into()),
            demo: Some("https://shanshui.weilun.dev".into()),
            private: false,
        },
        Project {
            name: "folio".into(),
            description: LocalizedText::new(
                "This terminal portfolio, timeline layout engine included.",
                "這個終端機作品集，含時間軸排版引擎。",
            ),
            tech: vec!["Rust".into(), "clap".into()],
            github: Some("https://github.com/weilun-dev/folio".into()),
            demo: None,
            private: false,
        },
        Project {
            name: "ledgerline".into(),
            description: LocalizedText::new(
                "Billing and invoicing system for a freelance client.",
                "幫接案客戶做的請款與發票系統。",
            ),
            tech: vec!["Go".into(), "gRPC".into()],
            github: None,
            demo: None,
            private: true,
        },
    ]
}

/// Parses a JSON array of projects.
pub fn from_json_str(json: &str) -> Result<Vec<Project>> {
    Ok(serde_json::from_str(json)?)
}

/// Loads projects from a user-supplied JSON file.
pub fn load_projects(path: &Path) -> Result<Vec<Project>> {
    let json = fs::read_to_string(path)?;
    from_json_str(&json)
}

/// Filters projects to those using a technology.
///
/// Case-insensitive substring match, so `--tech rust` finds "Rust" and
/// `--tech postgres` finds "PostgreSQL".
pub fn filter_by_tech<'a>(projects: &'a [Project], tech: &str) -> Vec<&'a Project> {
    let needle = tech.to_lowercase();
    projects
        .iter()
        .filter(|p| p.tech.iter().any(|t| t.to_lowercase().contains(&needle)))
        .collect()
}
