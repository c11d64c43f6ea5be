use std::error::Error;
use std::fs;
use std::path::Path;

use denom_core::DenominationTable;

pub mod analyze;
pub mod search;

/// Loads a denomination table from a JSON file holding an ascending array,
/// or falls back to the standard table.
pub fn load_table(path: Option<&Path>) -> Result<DenominationTable, Box<dyn Error>> {
    match path {
        Some(path) => {
            let contents = fs::read_to_string(path)?;
            let ascending: Vec<i64> = serde_json::from_str(&contents)?;
            Ok(DenominationTable::new(ascending)?)
        }
        None => Ok(DenominationTable::standard()),
    }
}
