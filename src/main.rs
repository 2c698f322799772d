use anyhow::{Context, Result};
use tracing::info;

use iconfix::rewrite;

/// The one file this tool operates on, relative to the working directory.
const TARGET_FILE: &str = "app/marketplace/page.tsx";

fn main() -> Result<()> {
    iconfix::init().context("Failed to initialize logging")?;

    info!("Rewriting icon markup in {}", TARGET_FILE);

    let result = rewrite::rewrite_file(TARGET_FILE)?;

    if result.changes_made {
        info!("Applied {} replacement(s)", result.replacements);
    } else {
        info!("No icon patterns found, file written back unchanged");
    }

    println!("✅ Icons fixed");

    Ok(())
}
