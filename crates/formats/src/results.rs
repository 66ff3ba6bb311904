use catalog::{ElectionRecord, ProvinceRow, TotalsRow};

use crate::FormatError;
use crate::table::{SEPARATOR, parse_delimited};

/// Parse an election results file.
///
/// Header: `Provincia;Party1;Party2;...`. Every data row is a province row
/// except the last, which carries the national totals under a label column.
pub fn parse_election_results(content: &str, index: usize) -> Result<ElectionRecord, FormatError> {
    let table = parse_delimited(content, SEPARATOR)?;
    if table.rows.is_empty() {
        return Err(FormatError::NoTotalsRow);
    }

    let expected = table.header.len();
    let mut parsed: Vec<(String, Vec<u32>)> = Vec::with_capacity(table.rows.len());
    for (row_number, columns) in table.rows.iter().enumerate() {
        if columns.len() != expected {
            return Err(FormatError::InvalidRowWidth {
                row: row_number + 1,
                expected,
                got: columns.len(),
            });
        }
        let seats = parse_seats(&columns[1..], row_number + 1)?;
        parsed.push((columns[0].clone(), seats));
    }

    let (label, total_seats) = parsed.pop().unwrap_or_default();
    let results = parsed
        .into_iter()
        .map(|(province, seats)| ProvinceRow { province, seats })
        .collect();

    Ok(ElectionRecord {
        index,
        headers: table.header,
        results,
        totals: TotalsRow {
            label,
            seats: total_seats,
        },
    })
}

fn parse_seats(columns: &[String], row: usize) -> Result<Vec<u32>, FormatError> {
    columns
        .iter()
        .map(|value| {
            value.parse::<u32>().map_err(|_| FormatError::InvalidSeatCount {
                row,
                value: value.clone(),
            })
        })
        .collect()
}
