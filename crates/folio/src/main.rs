//! `folio` -- personal portfolio for the terminal.
//!
//! This is the entry point. It parses CLI arguments with clap, resolves
//! the runtime context (locale and config), and dispatches to the page
//! command handlers.

mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;

use cli::{Cli, Commands};
use context::RuntimeContext;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Build runtime context from global args
    let ctx = match RuntimeContext::from_global_args(&cli.global) {
        Ok(ctx) => ctx,
        Err(e) => {
            report_error(&e, cli.global.json);
            std::process::exit(1);
        }
    };

    // Set up logging based on verbosity
    if ctx.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("folio=debug,folio_core=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    // Dispatch to command handler; no subcommand renders the home page.
    let result = match cli.command {
        Some(Commands::Home) | None => commands::home::run(&ctx),
        Some(Commands::Projects(args)) => commands::projects::run(&ctx, &args),
        Some(Commands::Experience(args)) => commands::experience::run(&ctx, &args),
        Some(Commands::Contact) => commands::contact::run(&ctx),
        Some(Commands::Completion(args)) => commands::completion::run(&ctx, &args),
    };

    // Handle errors: print message and exit with code 1
    if let Err(e) = result {
        report_error(&e, ctx.json);
        std::process::exit(1);
    }
}

/// Print an error to stderr, as JSON when requested.
fn report_error(error: &anyhow::Error, json: bool) {
    if json {
        let err_json = serde_json::json!({
            "error": format!("{:#}", error),
        });
        if let Ok(s) = serde_json::to_string_pretty(&err_json) {
            eprintln!("{}", s);
        }
    } else {
        eprintln!("Error: {:#}", error);
    }
}
