use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};
use tracing::info;

use crate::tracker::{storage::KeyValueStore, Tracker};

pub const DEFAULT_EXPORT_FILE: &str = "procrasti-logs.json";

/// Command to process `export`. `-` writes to stdout.
pub fn process_export_command<S: KeyValueStore>(tracker: &Tracker<S>, file: &Path) -> Result<()> {
    let json = tracker.export_json()?;
    if file == Path::new("-") {
        println!("{json}");
        return Ok(());
    }

    fs::write(file, json).with_context(|| format!("Failed to write {file:?}"))?;
    info!("Exported {} entries into {file:?}", tracker.entries().len());
    println!("Exported {} logs to {}", tracker.entries().len(), file.display());
    Ok(())
}

/// Command to process `import`. Invalid files leave the stored entries alone.
pub fn process_import_command<S: KeyValueStore>(tracker: &mut Tracker<S>, file: &Path) -> Result<()> {
    let text = fs::read_to_string(file).with_context(|| format!("Failed to read {file:?}"))?;
    let count = tracker.import_json(&text)?;
    println!("Imported {count} logs.");
    Ok(())
}

/// Command to process `clear`. Asks for confirmation unless `yes` is set.
pub fn process_clear_command<S: KeyValueStore>(tracker: &mut Tracker<S>, yes: bool) -> Result<()> {
    if !yes && !confirm("Clear all logs? This cannot be undone. (y/N): ", io::stdin().lock())? {
        println!("Cancelled.");
        return Ok(());
    }

    tracker.clear()?;
    println!("Cleared — start fresh!");
    Ok(())
}

fn confirm(prompt: &str, mut input: impl io::BufRead) -> Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use anyhow::Result;

    use super::confirm;

    #[test]
    fn test_confirm() -> Result<()> {
        assert!(confirm("", Cursor::new("y\n"))?);
        assert!(confirm("", Cursor::new(" Y "))?);
        assert!(!confirm("", Cursor::new("\n"))?);
        assert!(!confirm("", Cursor::new("yes please"))?);
        assert!(!confirm("", Cursor::new(""))?);
        Ok(())
    }
}
