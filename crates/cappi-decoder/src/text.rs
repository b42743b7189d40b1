//! CSV stage of CAPPI decoding.

use radar_common::{DecodeError, RawGrid};

/// Parse newline-separated rows of comma-separated numbers.
///
/// Trailing blank lines are dropped; a blank line anywhere else is a row
/// with one empty field and fails to parse. `\r\n` line endings are
/// accepted. Non-finite values (`NaN`, `inf`) are rejected.
pub fn parse_grid_text(text: &str) -> Result<RawGrid, DecodeError> {
    let mut lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    let rows = lines
        .iter()
        .enumerate()
        .map(|(row, line)| parse_row(row, line))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RawGrid::new(rows))
}

fn parse_row(row: usize, line: &str) -> Result<Vec<f64>, DecodeError> {
    line.split(',')
        .enumerate()
        .map(|(column, field)| parse_field(row, column, field))
        .collect()
}

fn parse_field(row: usize, column: usize, field: &str) -> Result<f64, DecodeError> {
    let trimmed = field.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(DecodeError::NonNumeric {
            row,
            column,
            field: trimmed.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let grid = parse_grid_text("1,2\n-127,4").unwrap();
        assert_eq!(grid.into_rows(), vec![vec![1.0, 2.0], vec![-127.0, 4.0]]);
    }

    #[test]
    fn test_parse_trailing_newline() {
        let grid = parse_grid_text("0.5,1.25\n3,4\n\n").unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.get(0, 1), Some(1.25));
    }

    #[test]
    fn test_parse_crlf_and_spaces() {
        let grid = parse_grid_text("1, 2\r\n 3 ,4\r\n").unwrap();
        assert_eq!(grid.into_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_parse_empty_text() {
        let grid = parse_grid_text("").unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_parse_non_numeric() {
        let err = parse_grid_text("1,2\n3,x").unwrap_err();
        assert_eq!(
            err,
            DecodeError::NonNumeric {
                row: 1,
                column: 1,
                field: "x".to_string()
            }
        );
    }

    #[test]
    fn test_parse_blank_interior_line() {
        let err = parse_grid_text("1,2\n\n3,4").unwrap_err();
        assert!(matches!(err, DecodeError::NonNumeric { row: 1, column: 0, .. }));
    }

    #[test]
    fn test_parse_rejects_nan() {
        assert!(parse_grid_text("NaN,1").is_err());
        assert!(parse_grid_text("1,inf").is_err());
    }

    #[test]
    fn test_parse_scientific_notation() {
        let grid = parse_grid_text("1e-3,-2.5E2").unwrap();
        assert_eq!(grid.row(0), Some(&[0.001, -250.0][..]));
    }
}
