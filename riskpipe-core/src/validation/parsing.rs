//! Parsing helpers for `.hdr` header lines

use crate::{Result, RiskError};

/// Split a header line into `(keyword, value)`
///
/// Blank lines yield `None`. A keyword must be followed by exactly one
/// value token.
pub fn split_keyword(line: &str) -> Result<Option<(&str, &str)>> {
    let mut tokens = line.split_whitespace();

    let Some(keyword) = tokens.next() else {
        return Ok(None);
    };
    let value = tokens.next().ok_or(RiskError::InvalidHeader)?;

    if tokens.next().is_some() {
        return Err(RiskError::InvalidHeader);
    }

    Ok(Some((keyword, value)))
}

/// Parse a row or column count
///
/// Some writers emit counts as `4.0`; integral floats are accepted.
pub fn parse_count(value: &str) -> Result<usize> {
    if let Ok(count) = value.parse::<usize>() {
        return Ok(count);
    }

    let float: f64 = value.parse().map_err(|_| RiskError::InvalidHeader)?;
    let count = float as usize;
    if float < 0.0 || count as f64 != float {
        return Err(RiskError::InvalidHeader);
    }

    Ok(count)
}

/// Parse a finite coordinate or length
pub fn parse_coordinate(value: &str) -> Result<f64> {
    let parsed: f64 = value.parse().map_err(|_| RiskError::InvalidHeader)?;

    if !parsed.is_finite() {
        return Err(RiskError::InvalidHeader);
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keyword() {
        assert_eq!(split_keyword("ncols 4"), Ok(Some(("ncols", "4"))));
        assert_eq!(split_keyword("  cellsize\t0.5  "), Ok(Some(("cellsize", "0.5"))));
        assert_eq!(split_keyword(""), Ok(None));
        assert_eq!(split_keyword("   "), Ok(None));

        assert_eq!(split_keyword("ncols"), Err(RiskError::InvalidHeader));
        assert_eq!(split_keyword("ncols 4 5"), Err(RiskError::InvalidHeader));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("0"), Ok(0));
        assert_eq!(parse_count("123"), Ok(123));
        assert_eq!(parse_count("4.0"), Ok(4));

        assert_eq!(parse_count("-1"), Err(RiskError::InvalidHeader));
        assert_eq!(parse_count("4.5"), Err(RiskError::InvalidHeader));
        assert_eq!(parse_count("abc"), Err(RiskError::InvalidHeader));
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("-12.25"), Ok(-12.25));
        assert_eq!(parse_coordinate("1e-3"), Ok(0.001));

        assert_eq!(parse_coordinate("inf"), Err(RiskError::InvalidHeader));
        assert_eq!(parse_coordinate("NaN"), Err(RiskError::InvalidHeader));
        assert_eq!(parse_coordinate(""), Err(RiskError::InvalidHeader));
    }
}
