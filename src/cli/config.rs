//! `config` command: show resolved paths and effective settings

use std::io::Write;

use crate::config::{PocketbookPaths, Settings};
use crate::error::PocketbookResult;

/// Print the configuration summary
pub fn handle_config_command(
    paths: &PocketbookPaths,
    settings: &Settings,
    out: &mut impl Write,
) -> PocketbookResult<()> {
    writeln!(out, "Pocketbook Configuration")?;
    writeln!(out, "========================")?;
    writeln!(out, "Config directory: {}", paths.base_dir().display())?;
    writeln!(
        out,
        "Settings file:    {}{}",
        paths.settings_file().display(),
        if paths.is_initialized() { "" } else { " (not created, using defaults)" }
    )?;
    writeln!(out)?;
    writeln!(out, "Settings:")?;
    writeln!(out, "  Date format: {}", settings.date_format)?;
    writeln!(out, "  Log filter:  {}", settings.log_filter)?;
    writeln!(out, "  Separator:   {}", settings.separator)?;
    Ok(())
}
