//! `folio contact` -- contact details page.

use anyhow::Result;

use folio_content::i18n::translations;
use folio_content::profile::PROFILE;
use folio_ui::styles::{render_heading, render_link, render_muted};

use crate::context::RuntimeContext;
use crate::output::{ContactView, output_json};

/// Execute the `folio contact` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let tr = translations(ctx.locale);

    if ctx.json {
        output_json(&ContactView {
            locale: ctx.locale,
            github: PROFILE.github,
            email: PROFILE.email,
        });
        return Ok(());
    }

    println!("{}", render_heading(tr.contact.title));
    if !ctx.quiet {
        println!("{}", render_muted(tr.contact.subtitle));
    }
    println!();
    println!("{}: {}", tr.contact.github, render_link(PROFILE.github));
    println!("{}: {}", tr.contact.email, render_link(PROFILE.email));

    Ok(())
}
