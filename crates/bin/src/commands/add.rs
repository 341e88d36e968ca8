//! Add command - appends images at the end of the collection.

use galleria::{ImageItem, OrderEngine, OwnerId, backend::InMemory};

use crate::cli::AddArgs;
use crate::output::short_id;

/// Run the add command
pub async fn run(
    engine: &OrderEngine<InMemory>,
    owner: &OwnerId,
    args: &AddArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let base_url = args.base_url.trim_end_matches('/');
    let items: Vec<ImageItem> = args
        .titles
        .iter()
        .map(|title| ImageItem::new(owner, title, format!("{base_url}/{title}")))
        .collect();

    let inserted = engine.append(owner, items).await?;

    println!("Added {} image(s):", inserted.len());
    for item in &inserted {
        println!("  {}  {}", short_id(item), item.title);
    }
    Ok(())
}
