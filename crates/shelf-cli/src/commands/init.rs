use std::path::PathBuf;

use shelf_core::storage::BookStore;
use shelf_core::JsonFileStore;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_library_path, write_config, ShelfConfig};
use crate::errors::CliError;
use crate::ui::{print, receipt};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}\nHint: Pass --force to overwrite it.",
            config_path.display()
        ))
        .into());
    }

    let library_path = match args.path.as_deref().or(ctx.cli().library.as_deref()) {
        Some(path) => PathBuf::from(path),
        None => default_library_path()?,
    };

    let store = JsonFileStore::new(&library_path);
    let created = if library_path.exists() {
        // Reuse an existing library, but only if it is readable.
        let books = store.load()?;
        tracing::debug!(count = books.len(), "reusing existing library");
        false
    } else {
        store.save(&[])?;
        true
    };

    write_config(&config_path, &ShelfConfig::new(&library_path))?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(None);
        let status = if created { "created" } else { "existing" };
        print(
            &ui,
            &receipt(
                &ui,
                "Initialized shelf",
                &[
                    ("Library", library_path.display().to_string()),
                    ("Library File", status.to_string()),
                    ("Config", config_path.display().to_string()),
                ],
            ),
        );
    }
    Ok(())
}
