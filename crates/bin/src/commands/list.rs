//! List command - shows the collection in display order.

use galleria::{ItemStore, OrderEngine, OwnerId, backend::InMemory};

use crate::output::print_listing;

/// Run the list command
pub async fn run(
    engine: &OrderEngine<InMemory>,
    owner: &OwnerId,
) -> Result<(), Box<dyn std::error::Error>> {
    let listing = engine.store().list(owner).await?;
    print_listing(&listing);
    Ok(())
}
