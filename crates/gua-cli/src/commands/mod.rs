pub mod cast;
pub mod cycle;
pub mod render;
pub mod show;
pub mod trigrams;

use std::borrow::Cow;
use std::path::Path;

use chrono::{Local, NaiveDateTime};
use colored::Colorize;
use gua_analysis::{ContextType, TextTable};

/// Parse a context name into a [`ContextType`].
fn parse_context(context: &str) -> Result<ContextType, String> {
    ContextType::parse(context).map_err(|e| e.to_string())
}

/// Parse "YYYY-MM-DD HH:MM" (seconds optional), or fall back to now.
fn parse_time(time: Option<&str>) -> Result<NaiveDateTime, String> {
    let Some(time) = time else {
        return Ok(Local::now().naive_local());
    };
    NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M"))
        .map_err(|_| format!("invalid time: \"{time}\". Use: YYYY-MM-DD HH:MM"))
}

/// The bundled text table, or one loaded from `path`.
fn load_texts(path: Option<&Path>) -> Result<Cow<'static, TextTable>, String> {
    match path {
        Some(path) => TextTable::from_path(path)
            .map(Cow::Owned)
            .map_err(|e| format!("{}: {e}", path.display())),
        None => Ok(Cow::Borrowed(TextTable::bundled())),
    }
}

/// Write to a file, or print to stdout.
fn emit(content: &str, output: Option<&Path>) -> Result<(), String> {
    if let Some(path) = output {
        std::fs::write(path, content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  {} {}", "Saved to".green(), path.display());
    } else {
        print!("{content}");
    }
    Ok(())
}
