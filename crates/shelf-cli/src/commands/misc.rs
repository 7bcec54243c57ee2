use clap::CommandFactory;
use clap_complete::generate;

use shelf_core::book::KNOWN_GENRES;

use crate::cli::Cli;

pub fn handle_genres() -> anyhow::Result<()> {
    for genre in KNOWN_GENRES {
        println!("{}", genre);
    }
    Ok(())
}

pub fn handle_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "shelf", &mut std::io::stdout());
    Ok(())
}
