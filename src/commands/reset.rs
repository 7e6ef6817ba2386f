use anyhow::Result;
use colored::Colorize;

use crate::storage::Store;

/// Clear every stored record. All-or-nothing: a single clear of the
/// underlying store, never a partial key-by-key delete.
pub async fn reset(force: bool) -> Result<()> {
    if !force {
        println!("This will clear your profile, roadmap, streak and achievements.");
        println!("Re-run with {} to confirm.", "--force".bold());
        return Ok(());
    }

    let store = super::open_store()?;
    store.clear()?;

    println!("All data cleared. Run {} to start over.", "skillplan init".green());

    Ok(())
}
