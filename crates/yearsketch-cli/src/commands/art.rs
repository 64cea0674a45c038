use std::path::PathBuf;

use yearsketch_core::art::{self, ShapeKind};
use yearsketch_core::collect_symbols;

use crate::common::read_answers;

pub fn run(input: Option<PathBuf>, shape: &str) -> Result<(), Box<dyn std::error::Error>> {
    let kind = match shape {
        "bear" => ShapeKind::Bear,
        "person" => ShapeKind::Person,
        "random" => ShapeKind::random(),
        other => return Err(format!("unknown shape '{other}' (bear, person, random)").into()),
    };

    let answers = read_answers(input)?;
    let symbols = collect_symbols(&answers);
    print!("{}", art::art_text(&symbols, kind.template()));
    Ok(())
}
