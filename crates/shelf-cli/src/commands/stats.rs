use crate::app::AppContext;
use crate::cli::StatsArgs;
use crate::output::{print_stats, stats_json};
use crate::ui::{header, hint, print};

pub fn handle_stats(ctx: &AppContext, args: &StatsArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(Some(&args.output));
    let library = ctx.open_library()?;
    let stats = library.aggregate();

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&stats_json(&stats)?)?);
        return Ok(());
    }

    if !ctx.quiet() {
        print(&ui, &header(&ui, "stats", None));
    }
    print_stats(&ui, &stats);
    if stats.total_books == 0 && !ctx.quiet() {
        print(&ui, &hint(&ui, "Library is empty. Add books to see statistics."));
    }
    Ok(())
}
