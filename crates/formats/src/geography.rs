use catalog::GeoRecord;

use crate::FormatError;
use crate::table::{SEPARATOR, parse_delimited};

const COL_PROVINCE: &str = "Provincia";
const COL_LATITUDE: &str = "Latitud";
const COL_LONGITUDE: &str = "Longitud";

/// Parse the shared geography file.
///
/// The header must contain columns literally named `Provincia`, `Latitud`
/// and `Longitud`; their order is irrelevant.
pub fn parse_geography(content: &str) -> Result<Vec<GeoRecord>, FormatError> {
    let table = parse_delimited(content, SEPARATOR)?;

    let name_idx = column_index(&table.header, COL_PROVINCE)?;
    let lat_idx = column_index(&table.header, COL_LATITUDE)?;
    let lon_idx = column_index(&table.header, COL_LONGITUDE)?;
    let needed = name_idx.max(lat_idx).max(lon_idx) + 1;

    let mut records = Vec::with_capacity(table.rows.len());
    for (row_number, columns) in table.rows.iter().enumerate() {
        if columns.len() < needed {
            return Err(FormatError::InvalidRowWidth {
                row: row_number + 1,
                expected: needed,
                got: columns.len(),
            });
        }
        records.push(GeoRecord {
            name: columns[name_idx].clone(),
            latitude: parse_coordinate(&columns[lat_idx], row_number + 1)?,
            longitude: parse_coordinate(&columns[lon_idx], row_number + 1)?,
        });
    }

    Ok(records)
}

fn column_index(header: &[String], name: &str) -> Result<usize, FormatError> {
    header
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| FormatError::MissingColumn {
            name: name.to_string(),
        })
}

fn parse_coordinate(value: &str, row: usize) -> Result<f64, FormatError> {
    value
        .parse::<f64>()
        .map_err(|_| FormatError::InvalidCoordinate {
            row,
            value: value.to_string(),
        })
}
