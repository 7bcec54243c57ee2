//! Handlers that list and change books: add, list, remove, toggle.

use dialoguer::Confirm;

use shelf_core::book::{is_known_genre, DEFAULT_GENRE};
use shelf_core::NewBook;

use crate::app::AppContext;
use crate::cli::{AddArgs, ListArgs, RemoveArgs, ToggleArgs};
use crate::errors::CliError;
use crate::output::{books_json, print_book_list};
use crate::ui::format::read_label;
use crate::ui::{badge, header, hint, print, receipt, Badge};

/// Convert a 1-based position from the command line to an engine index.
pub fn position_to_index(position: usize) -> Result<usize, CliError> {
    position
        .checked_sub(1)
        .ok_or_else(|| CliError::invalid_input("Positions start at 1"))
}

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(None);
    let genre = args
        .genre
        .clone()
        .unwrap_or_else(|| DEFAULT_GENRE.to_string());
    if !is_known_genre(&genre) && !ctx.quiet() {
        eprintln!(
            "{}",
            badge(
                &ui,
                Badge::Warn,
                &format!("\"{}\" is not one of the usual genres (see `shelf genres`)", genre)
            )
        );
    }

    let mut library = ctx.open_library_for_update()?;
    let new_book =
        NewBook::new(&args.title, &args.author, args.year, genre).read(args.read);
    let book = library.add_book(new_book).map_err(CliError::from)?;

    if !ctx.quiet() {
        print(
            &ui,
            &receipt(
                &ui,
                "Added book",
                &[
                    ("Position", library.len().to_string()),
                    ("Title", book.title.clone()),
                    ("Author", book.author.clone()),
                    ("Status", read_label(book.read_status).to_string()),
                ],
            ),
        );
    }
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(Some(&args.output));
    let library = ctx.open_library()?;
    let positioned: Vec<(usize, _)> = library
        .books()
        .iter()
        .enumerate()
        .map(|(index, book)| (index + 1, book))
        .collect();

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&books_json(&positioned)?)?);
        return Ok(());
    }

    if !ctx.quiet() {
        print(&ui, &header(&ui, "list", Some(&format!("{} book(s)", library.len()))));
    }
    if library.is_empty() {
        if !ctx.quiet() {
            print(&ui, &hint(&ui, "Your library is empty. Add one with `shelf add`."));
        }
        return Ok(());
    }
    print_book_list(&ui, &positioned);
    Ok(())
}

pub fn handle_remove(ctx: &AppContext, args: &RemoveArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(None);
    let index = position_to_index(args.position)?;
    let mut library = ctx.open_library_for_update()?;

    let title = library
        .get(index)
        .map(|book| book.title.clone())
        .ok_or_else(|| {
            CliError::from(shelf_core::ShelfError::OutOfRange {
                index,
                len: library.len(),
            })
        })?;

    if !args.yes && ui.is_interactive() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove \"{}\"?", title))
            .default(false)
            .interact()?;
        if !confirmed {
            if !ctx.quiet() {
                print(&ui, &badge(&ui, Badge::Info, "Cancelled"));
            }
            return Ok(());
        }
    }

    let removed = library.remove(index).map_err(CliError::from)?;

    if !ctx.quiet() {
        print(
            &ui,
            &receipt(
                &ui,
                "Removed book",
                &[
                    ("Title", removed.title),
                    ("Author", removed.author),
                    ("Remaining", library.len().to_string()),
                ],
            ),
        );
    }
    Ok(())
}

pub fn handle_toggle(ctx: &AppContext, args: &ToggleArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(None);
    let index = position_to_index(args.position)?;
    let mut library = ctx.open_library_for_update()?;

    let read_status = library
        .toggle_read_status(index)
        .map_err(CliError::from)?;

    if !ctx.quiet() {
        let title = library
            .get(index)
            .map(|book| book.title.clone())
            .unwrap_or_default();
        print(
            &ui,
            &receipt(
                &ui,
                "Updated read status",
                &[
                    ("Title", title),
                    ("Status", read_label(read_status).to_string()),
                ],
            ),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_to_index() {
        assert_eq!(position_to_index(1).unwrap(), 0);
        assert_eq!(position_to_index(12).unwrap(), 11);
        assert!(matches!(
            position_to_index(0).unwrap_err(),
            CliError::InvalidInput(_)
        ));
    }
}
