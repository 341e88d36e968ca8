//! Output formatting helpers for the listing view.

use galleria::ImageItem;

/// Print an owner's items as an aligned table, one row per item in display
/// order.
pub fn print_listing(items: &[ImageItem]) {
    if items.is_empty() {
        println!("(no images)");
        return;
    }

    let headers = ["POS", "ID", "TITLE", "ORDER"];
    let rows: Vec<[String; 4]> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            [
                (i + 1).to_string(),
                short_id(item),
                item.title.clone(),
                item.order.to_string(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect();
    println!("{}", header_line.join("  "));

    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        println!("{}", line.join("  "));
    }
}

/// First block of the item's UUID, enough to address it interactively.
pub fn short_id(item: &ImageItem) -> String {
    item.id.as_str().chars().take(8).collect()
}
