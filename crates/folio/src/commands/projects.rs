//! `folio projects` -- the project list page.

use std::path::Path;

use anyhow::{Context, Result};

use folio_content::i18n::translations;
use folio_content::projects::{self, Project};
use folio_ui::styles::{render_bold, render_heading, render_link, render_muted, render_warn};

use crate::cli::ProjectsArgs;
use crate::context::RuntimeContext;
use crate::output::{ProjectsView, output_json};

/// Execute the `folio projects` command.
pub fn run(ctx: &RuntimeContext, args: &ProjectsArgs) -> Result<()> {
    let tr = translations(ctx.locale);

    let all = match &args.data {
        Some(path) => projects::load_projects(Path::new(path))
            .with_context(|| format!("failed to load projects from {}", path))?,
        None => projects::built_in(),
    };

    let shown: Vec<Project> = match &args.tech {
        Some(tech) => projects::filter_by_tech(&all, tech)
            .into_iter()
            .cloned()
            .collect(),
        None => all,
    };

    if ctx.json {
        output_json(&ProjectsView {
            locale: ctx.locale,
            tech: args.tech.clone(),
            projects: shown,
        });
        return Ok(());
    }

    println!("{}", render_heading(tr.projects.title));
    if !ctx.quiet {
        println!("{}", render_muted(tr.projects.subtitle));
        let filter = args.tech.as_deref().unwrap_or(tr.projects.filter_all);
        let filter_line = format!("{}: {}", tr.projects.filter_label, filter);
        println!("{}", render_muted(&filter_line));
    }

    if shown.is_empty() {
        println!();
        println!("{}", tr.projects.no_results);
        return Ok(());
    }

    for project in &shown {
        println!();
        if project.private {
            let marker = format!("[{}]", tr.projects.private);
            println!("{}  {}", render_bold(&project.name), render_warn(&marker));
        } else {
            println!("{}", render_bold(&project.name));
        }

        let description = project.description.for_locale(ctx.locale);
        if !description.is_empty() {
            println!("  {}", description);
        }
        if !project.tech.is_empty() {
            println!("  {}", render_muted(&project.tech.join(" · ")));
        }
        if let Some(url) = &project.github {
            println!("  {}: {}", tr.projects.code, render_link(url));
        }
        if let Some(url) = &project.demo {
            println!("  {}: {}", tr.projects.demo, render_link(url));
        }
    }

    Ok(())
}
