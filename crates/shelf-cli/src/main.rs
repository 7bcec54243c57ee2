//! Shelf CLI - catalogue your books from the terminal
//!
//! This is the command-line front end for Shelf. All library logic lives in
//! `shelf-core`; this crate parses arguments, resolves paths and renders output.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod output;
mod ui;

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{books, init, misc, search, stats};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.no_color);

    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(None);
        let error_msg = format!("{}", e);
        let (message, hint) = split_hint(&error_msg);
        print_error(&ui_ctx, message, hint);
        std::process::exit(exit_code_for(&e));
    }
}

/// Diagnostics go to stderr at `warn` unless `SHELF_LOG` says otherwise.
fn init_tracing(no_color_flag: bool) {
    let filter = EnvFilter::try_from_env("SHELF_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let ansi = log_ansi(
        std::io::stderr().is_terminal(),
        no_color_flag,
        std::env::var_os("NO_COLOR").is_some(),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(ansi),
        )
        .init();
}

fn log_ansi(stderr_is_tty: bool, no_color_flag: bool, no_color_env: bool) -> bool {
    stderr_is_tty && !no_color_flag && !no_color_env
}

/// Split an error message into the message and an optional trailing "Hint:" line.
fn split_hint(error: &str) -> (&str, Option<&str>) {
    match error.find("\nHint: ") {
        Some(idx) => (&error[..idx], Some(&error[idx + "\nHint: ".len()..])),
        None => (error, None),
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Init(args) => init::handle_init(ctx, args),
        Commands::Add(args) => books::handle_add(ctx, args),
        Commands::List(args) => books::handle_list(ctx, args),
        Commands::Remove(args) => books::handle_remove(ctx, args),
        Commands::Toggle(args) => books::handle_toggle(ctx, args),
        Commands::Search(args) => search::handle_search(ctx, args),
        Commands::Stats(args) => stats::handle_stats(ctx, args),
        Commands::Genres => misc::handle_genres(),
        Commands::Completions(args) => misc::handle_completions(args.shell),
    }
}
