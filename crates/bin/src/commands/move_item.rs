//! Move command - repositions one image within the collection.
//!
//! The engine wants the order values of the items that will flank the moved
//! image after the drop; this command derives them from the current listing
//! and the requested position, which is exactly what a drag-and-drop
//! frontend does on drop.

use galleria::{ImageItem, ItemStore, OrderEngine, OwnerId, backend::InMemory};

use crate::cli::MoveArgs;
use crate::commands::resolve;

/// Run the move command
pub async fn run(
    engine: &OrderEngine<InMemory>,
    owner: &OwnerId,
    args: &MoveArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.to < 1 {
        return Err("positions start at 1".into());
    }

    let listing = engine.store().list(owner).await?;
    let item = resolve(&listing, &args.item)?.clone();

    // Neighbors are taken from the listing without the moved item, the way
    // the list will look once it lands.
    let others: Vec<&ImageItem> = listing.iter().filter(|other| other.id != item.id).collect();
    let target = (args.to - 1).min(others.len());
    let previous_order = target.checked_sub(1).map(|i| others[i].order);
    let next_order = others.get(target).map(|other| other.order);

    let moved = engine
        .reorder(&item.id, owner, previous_order, next_order)
        .await?;

    println!(
        "Moved '{}' to position {} (order {})",
        moved.title,
        target + 1,
        moved.order
    );
    Ok(())
}
