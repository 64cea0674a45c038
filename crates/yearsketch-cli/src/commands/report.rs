use std::path::PathBuf;

use yearsketch_core::{generate_report, AppConfig};

use crate::common::{catalog_for, read_answers};

pub fn run(
    input: Option<PathBuf>,
    locale: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    let catalog = catalog_for(locale, config.locale);
    let answers = read_answers(input)?;
    println!("{}", generate_report(&answers, &catalog));
    Ok(())
}
