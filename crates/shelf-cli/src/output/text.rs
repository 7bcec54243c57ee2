//! Text and table output formatting.

use shelf_core::{Book, Stats, TallyEntry};

use crate::ui::format::{
    decade_label, format_added_date, format_percent, read_label, truncate,
};
use crate::ui::theme::{styled, styles};
use crate::ui::{kv, print, table, Column, UiContext};

const BOOK_COLUMNS: &[Column] = &[
    Column::numeric("#"),
    Column::new("Title"),
    Column::new("Author"),
    Column::numeric("Year"),
    Column::new("Genre"),
    Column::new("Status"),
    Column::new("Added"),
];

const TITLE_WIDTH: usize = 40;

/// Print positioned books as a table (pretty) or one line per book (plain).
pub fn print_book_list(ctx: &UiContext, books: &[(usize, &Book)]) {
    let pretty = ctx.mode.is_pretty();
    let rows: Vec<Vec<String>> = books
        .iter()
        .map(|(position, book)| {
            let status = if book.read_status {
                styled(read_label(true), styles::read(), ctx.color)
            } else {
                styled(read_label(false), styles::unread(), ctx.color)
            };
            vec![
                position.to_string(),
                if pretty {
                    truncate(&book.title, TITLE_WIDTH)
                } else {
                    book.title.clone()
                },
                book.author.clone(),
                book.publication_year.to_string(),
                book.genre.clone(),
                status,
                format_added_date(&book.added_date, pretty),
            ]
        })
        .collect();

    if !rows.is_empty() {
        print(ctx, &table(ctx, BOOK_COLUMNS, &rows));
    }
}

/// Print library statistics.
pub fn print_stats(ctx: &UiContext, stats: &Stats) {
    print(ctx, &kv(ctx, "Total", &stats.total_books.to_string()));
    print(ctx, &kv(ctx, "Read", &stats.read_books.to_string()));
    print(ctx, &kv(ctx, "Unread", &stats.unread_books.to_string()));
    print(ctx, &kv(ctx, "Percent Read", &format_percent(stats.percent_read)));

    if stats.total_books == 0 {
        return;
    }

    if ctx.mode.is_pretty() {
        print(ctx, "");
        print(ctx, &tally_table(ctx, "Genre", &stats.genre_counts));
        print(ctx, &tally_table(ctx, "Author", &stats.author_counts));
        let decade_rows: Vec<Vec<String>> = stats
            .decade_counts
            .iter()
            .map(|(decade, count)| vec![decade_label(*decade), count.to_string()])
            .collect();
        print(
            ctx,
            &table(ctx, &[Column::new("Decade"), Column::numeric("Books")], &decade_rows),
        );
    } else {
        for entry in &stats.genre_counts {
            print(ctx, &format!("genre={}:{}", entry.label, entry.count));
        }
        for entry in &stats.author_counts {
            print(ctx, &format!("author={}:{}", entry.label, entry.count));
        }
        for (decade, count) in &stats.decade_counts {
            print(ctx, &format!("decade={}:{}", decade, count));
        }
    }
}

fn tally_table(ctx: &UiContext, label: &'static str, entries: &[TallyEntry]) -> String {
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| vec![entry.label.clone(), entry.count.to_string()])
        .collect();
    table(ctx, &[Column::new(label), Column::numeric("Books")], &rows)
}
