//! `folio home` -- the landing page.
//!
//! Greeting, a short introduction, the skill list, and pointers to the
//! other pages. This is also what runs when no subcommand is given.

use anyhow::Result;

use folio_content::i18n::translations;
use folio_content::profile::PROFILE;
use folio_ui::styles::{render_bold, render_heading, render_link, render_muted};

use crate::context::RuntimeContext;
use crate::output::{HomeView, output_json};

/// Execute the `folio home` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let tr = translations(ctx.locale);

    if ctx.json {
        output_json(&HomeView {
            locale: ctx.locale,
            greeting: tr.hero.greeting,
            intro: tr.hero.intro,
            skills: PROFILE.skills,
            github: PROFILE.github,
            email: PROFILE.email,
        });
        return Ok(());
    }

    println!("{}", render_heading(tr.hero.greeting));
    println!("{}", tr.hero.intro);
    println!();
    println!("{}", render_bold(tr.hero.skills_title));
    println!("  {}", PROFILE.skills.join(" · "));
    println!();
    println!("{}", tr.hero.view_projects);
    println!("{}: {}", tr.hero.github, render_link(PROFILE.github));

    if !ctx.quiet {
        let nav = [
            tr.nav.home,
            tr.nav.projects,
            tr.nav.experience,
            tr.nav.contact,
        ];
        println!();
        println!("{}", render_muted(&nav.join(" · ")));
        println!("{}", render_muted(tr.footer.rights));
    }

    Ok(())
}
