use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::output::{books_json, print_book_list};
use crate::ui::{header, hint, print};

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(Some(&args.output));
    let field = match args.by {
        Some(field) => field,
        None => ctx.default_search_field()?,
    };
    let library = ctx.open_library()?;

    // Positions refer to the full collection so results can be fed to remove/toggle.
    let positioned: Vec<(usize, _)> = library
        .search_positions(&args.term, field)
        .into_iter()
        .map(|(index, book)| (index + 1, book))
        .collect();

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&books_json(&positioned)?)?);
        return Ok(());
    }

    if !ctx.quiet() {
        let context = format!("{}: \"{}\", {} result(s)", field, args.term, positioned.len());
        print(&ui, &header(&ui, "search", Some(&context)));
    }
    if positioned.is_empty() {
        if !ctx.quiet() {
            print(&ui, &hint(&ui, "No matches. Try a shorter term or another --by field."));
        }
        return Ok(());
    }
    print_book_list(&ui, &positioned);
    Ok(())
}
