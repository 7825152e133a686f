//! `passkeep recent` — show or clear the recent vault list.

use comfy_table::{ContentArrangement, Table};

use crate::cli::output;
use crate::config::Settings;
use crate::errors::Result;

/// Execute the `recent` command.
pub fn execute(clear: bool) -> Result<()> {
    let dir = Settings::config_dir();
    let mut settings = Settings::load(&dir)?;

    if clear {
        settings.clear_recent();
        settings.save(&dir)?;
        output::success("Recent vault list cleared.");
        return Ok(());
    }

    if settings.recent_vaults.is_empty() {
        output::info("No recent vaults.");
        output::tip("Run `passkeep init <path>` to create one.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Path", "Last opened"]);

    for v in &settings.recent_vaults {
        table.add_row(vec![
            v.name.clone(),
            v.path.clone(),
            v.last_opened.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
