use crate::FormatError;

/// Field separator shared by all input files.
pub const SEPARATOR: char = ';';

/// A parsed delimited file: one header row plus data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Split `content` into header and data rows.
///
/// Rows with fewer than two columns are skipped; this tolerates blank and
/// trailing lines the way the data files ship them. CR line endings are
/// stripped.
pub fn parse_delimited(content: &str, sep: char) -> Result<Table, FormatError> {
    let mut lines = content.lines().map(|l| l.trim_end_matches('\r'));

    let header_line = lines.next().ok_or(FormatError::Empty)?;
    let header: Vec<String> = split_row(header_line, sep);
    if header.len() < 2 {
        return Err(FormatError::Empty);
    }

    let mut rows = Vec::new();
    for line in lines {
        let columns = split_row(line, sep);
        if columns.len() > 1 {
            rows.push(columns);
        }
    }

    Ok(Table { header, rows })
}

fn split_row(line: &str, sep: char) -> Vec<String> {
    line.split(sep).map(|c| c.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::{SEPARATOR, parse_delimited};
    use crate::FormatError;

    #[test]
    fn splits_header_and_rows() {
        let table = parse_delimited("Provincia;UCD;PSOE\nMadrid;10;5\n", SEPARATOR).unwrap();
        assert_eq!(table.header, vec!["Provincia", "UCD", "PSOE"]);
        assert_eq!(table.rows, vec![vec!["Madrid", "10", "5"]]);
    }

    #[test]
    fn skips_short_and_blank_rows() {
        let table =
            parse_delimited("Provincia;UCD\nMadrid;10\n\nstray\nSevilla;3\n", SEPARATOR).unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1][0], "Sevilla");
    }

    #[test]
    fn strips_carriage_returns() {
        let table = parse_delimited("Provincia;UCD\r\nMadrid;10\r\n", SEPARATOR).unwrap();
        assert_eq!(table.rows, vec![vec!["Madrid", "10"]]);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(parse_delimited("", SEPARATOR).unwrap_err(), FormatError::Empty);
    }
}
