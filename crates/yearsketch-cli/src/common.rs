//! Shared helpers for the interactive commands.

use std::io::{BufRead, Read, Write};
use std::path::{Path, PathBuf};

use yearsketch_core::answers::AnswerSet;
use yearsketch_core::{Catalog, Labels, Locale};

/// Print a prompt and read one trimmed line from stdin.
pub fn read_line(prompt: &str) -> Result<String, Box<dyn std::error::Error>> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Resolve the catalog: explicit flag wins over the config file.
pub fn catalog_for(flag: Option<String>, config_locale: Locale) -> Catalog {
    let locale = flag
        .as_deref()
        .and_then(Locale::parse)
        .unwrap_or(config_locale);
    Catalog::new(locale)
}

/// Label with the key itself as fallback.
pub fn label(catalog: &Catalog, key: &str) -> String {
    catalog.label(key).unwrap_or(key).to_string()
}

/// Read an answers JSON document from a file or stdin.
pub fn read_answers(input: Option<PathBuf>) -> Result<AnswerSet, Box<dyn std::error::Error>> {
    let raw = match input.as_deref() {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(serde_json::from_str(&raw)?)
}
