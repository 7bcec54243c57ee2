//! Application context for the Shelf CLI.
//!
//! Bundles CLI arguments with the lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use shelf_core::{JsonFileStore, Library, SearchField};

use super::resolver::{resolve_config_path, resolve_library_path};
use crate::cli::{Cli, OutputArgs};
use crate::config::{read_config, ShelfConfig};
use crate::errors::CliError;
use crate::ui::{badge, Badge, UiContext};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<ShelfConfig>>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The config file, if one exists. Loaded on first use.
    pub fn config(&self) -> anyhow::Result<Option<&ShelfConfig>> {
        let config = self.config.get_or_try_init(|| -> anyhow::Result<_> {
            let path = resolve_config_path()?;
            if !path.exists() {
                tracing::debug!(path = %path.display(), "no config file");
                return Ok(None);
            }
            read_config(&path).map(Some)
        })?;
        Ok(config.as_ref())
    }

    pub fn library_path(&self) -> anyhow::Result<PathBuf> {
        resolve_library_path(self.cli.library.as_deref(), self.config()?)
    }

    /// Search field from the config file, falling back to title.
    pub fn default_search_field(&self) -> anyhow::Result<SearchField> {
        let configured = self
            .config()?
            .and_then(|config| config.search.default_field.as_deref());
        match configured {
            Some(value) => Ok(value.parse::<SearchField>()?),
            None => Ok(SearchField::default()),
        }
    }

    /// UI context for the given output flags.
    pub fn ui_context(&self, output: Option<&OutputArgs>) -> UiContext {
        UiContext::from_env(
            output.map(|o| o.json).unwrap_or(false),
            output.and_then(|o| o.format),
            self.cli.no_color,
        )
    }

    /// Open the library for reading.
    ///
    /// An unreadable library file is reported as a warning and the session
    /// continues with an empty collection.
    pub fn open_library(&self) -> anyhow::Result<Library<JsonFileStore>> {
        let library = Library::open(JsonFileStore::new(self.library_path()?));
        if let Some(err) = library.load_error() {
            let ui = self.ui_context(None);
            eprintln!(
                "{}",
                badge(
                    &ui,
                    Badge::Warn,
                    &format!("{} (showing an empty library)", err)
                )
            );
        }
        Ok(library)
    }

    /// Open the library for a change.
    ///
    /// Refuses to continue after a failed load so that saving does not
    /// replace the unreadable file with an empty collection.
    pub fn open_library_for_update(&self) -> anyhow::Result<Library<JsonFileStore>> {
        let library = Library::open(JsonFileStore::new(self.library_path()?));
        if let Some(err) = library.load_error() {
            return Err(CliError::storage_with_hint(
                err.to_string(),
                format!(
                    "Fix or move {} before making changes.",
                    library.store().path().display()
                ),
            )
            .into());
        }
        Ok(library)
    }
}
