//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use ghorgs::error::Result;

pub mod json;
pub mod table;

/// Print a collection as a table of `D` rows or as JSON of the raw items
pub fn print_list<T, D>(items: Vec<T>, format: OutputFormat) -> Result<()>
where
    T: Serialize,
    D: Tabled + for<'a> From<&'a T>,
{
    let output = match format {
        OutputFormat::Table => {
            let rows: Vec<D> = items.iter().map(D::from).collect();
            table::format_table(&rows)
        }
        OutputFormat::Json => json::format_json(&items)?,
    };

    println!("{}", output);
    Ok(())
}
