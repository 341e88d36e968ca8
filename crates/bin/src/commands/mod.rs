//! One module per subcommand.

pub mod add;
pub mod list;
pub mod move_item;
pub mod rm;

use galleria::ImageItem;

/// Resolve an item from the listing by full ID or unique ID prefix.
pub fn resolve<'a>(
    listing: &'a [ImageItem],
    needle: &str,
) -> Result<&'a ImageItem, Box<dyn std::error::Error>> {
    if let Some(item) = listing.iter().find(|item| item.id == needle) {
        return Ok(item);
    }

    let matches: Vec<&ImageItem> = listing
        .iter()
        .filter(|item| item.id.as_str().starts_with(needle))
        .collect();
    match matches.as_slice() {
        [item] => Ok(item),
        [] => Err(format!("no image matches '{needle}'").into()),
        _ => Err(format!("'{needle}' is ambiguous ({} matches)", matches.len()).into()),
    }
}
