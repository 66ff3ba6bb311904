use catalog::PartyColor;

use crate::FormatError;
use crate::table::{SEPARATOR, parse_delimited};

/// Parse a party colors file.
///
/// The header row is ignored; each data row's second column carries the raw
/// color string, in the same order as the matching results file's party
/// columns.
pub fn parse_party_colors(content: &str) -> Result<Vec<PartyColor>, FormatError> {
    let table = parse_delimited(content, SEPARATOR)?;
    Ok(table
        .rows
        .iter()
        .map(|columns| PartyColor::new(columns[1].clone()))
        .collect())
}
