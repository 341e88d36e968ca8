//! Rm command - removes an image from the collection.
//!
//! No renumbering happens on removal; the freed order value just widens the
//! gap between the former neighbors.

use galleria::{ItemStore, OrderEngine, OwnerId, backend::InMemory};

use crate::cli::RmArgs;
use crate::commands::resolve;

/// Run the rm command
pub async fn run(
    engine: &OrderEngine<InMemory>,
    owner: &OwnerId,
    args: &RmArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let listing = engine.store().list(owner).await?;
    let item = resolve(&listing, &args.item)?.clone();

    engine.store().delete(&item.id).await?;

    println!("Removed '{}'", item.title);
    Ok(())
}
