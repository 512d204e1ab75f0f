//! Parsing of raw console lines.
//!
//! Positions are entered as `row,column`: the first number is the row,
//! the second the column, both zero-based.

use tictactoe_engine::{MAX_SIZE, MIN_SIZE};
use tracing::{debug, instrument};

/// Rejected console input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// The size is not a number.
    #[display("Please enter a number for the size")]
    InvalidSizeFormat(String),

    /// The size is below the minimum.
    #[display("The size needs to be >= {}", MIN_SIZE)]
    SizeTooSmall(i64),

    /// The size is above the maximum.
    #[display("The size needs to be <= {}", MAX_SIZE)]
    SizeTooLarge(i64),

    /// The position is not two comma-separated numbers.
    #[display("Please enter the position as numbers in the format 'row,column'")]
    InvalidPositionFormat(String),
}

impl std::error::Error for InputError {}

/// Parses a board size; blank input selects `default`.
///
/// # Errors
///
/// - `InputError::InvalidSizeFormat` if the input is not an integer
/// - `InputError::SizeTooSmall` if it is below [`MIN_SIZE`]
/// - `InputError::SizeTooLarge` if it is above [`MAX_SIZE`]
#[instrument]
pub fn parse_size(input: &str, default: usize) -> Result<usize, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        debug!(default, "Blank size, using default");
        return Ok(default);
    }
    let size: i64 = trimmed
        .parse()
        .map_err(|_| InputError::InvalidSizeFormat(trimmed.to_string()))?;
    match usize::try_from(size) {
        Ok(n) if (MIN_SIZE..=MAX_SIZE).contains(&n) => Ok(n),
        Ok(n) if n > MAX_SIZE => Err(InputError::SizeTooLarge(size)),
        Err(_) if size > 0 => Err(InputError::SizeTooLarge(size)),
        _ => Err(InputError::SizeTooSmall(size)),
    }
}

/// Parses a `row,column` pair into `(row, col)`.
///
/// Surrounding whitespace is ignored, both around the line and around
/// each number. Range checks are left to the engine.
///
/// # Errors
///
/// Returns `InputError::InvalidPositionFormat` unless the input is
/// exactly two comma-separated integers.
#[instrument]
pub fn parse_position(input: &str) -> Result<(i64, i64), InputError> {
    let trimmed = input.trim();
    let invalid = || InputError::InvalidPositionFormat(trimmed.to_string());

    let parts: Vec<&str> = trimmed.split(',').collect();
    let [row, col] = parts.as_slice() else {
        return Err(invalid());
    };
    let row = row.trim().parse().map_err(|_| invalid())?;
    let col = col.trim().parse().map_err(|_| invalid())?;
    Ok((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_defaults_when_blank() {
        assert_eq!(parse_size("   \n", 3), Ok(3));
        assert_eq!(parse_size("", 4), Ok(4));
    }

    #[test]
    fn test_size_parses_number() {
        assert_eq!(parse_size("5", 3), Ok(5));
        assert_eq!(parse_size(" 12 \n", 3), Ok(12));
    }

    #[test]
    fn test_size_rejects_garbage() {
        assert_eq!(
            parse_size("!@#$%^&*", 3),
            Err(InputError::InvalidSizeFormat("!@#$%^&*".to_string()))
        );
        assert!(matches!(
            parse_size("3.5", 3),
            Err(InputError::InvalidSizeFormat(_))
        ));
    }

    #[test]
    fn test_size_rejects_small_boards() {
        assert_eq!(parse_size("2", 3), Err(InputError::SizeTooSmall(2)));
        assert_eq!(parse_size("-7", 3), Err(InputError::SizeTooSmall(-7)));
    }

    #[test]
    fn test_size_rejects_huge_boards() {
        assert_eq!(parse_size("100", 3), Ok(MAX_SIZE));
        assert_eq!(parse_size("101", 3), Err(InputError::SizeTooLarge(101)));
        assert_eq!(
            parse_size("4294967296", 3),
            Err(InputError::SizeTooLarge(4_294_967_296))
        );
        assert!(matches!(
            parse_size("99999999999999999999", 3),
            Err(InputError::InvalidSizeFormat(_))
        ));
        assert_eq!(
            InputError::SizeTooLarge(101).to_string(),
            "The size needs to be <= 100"
        );
    }

    #[test]
    fn test_position_is_row_then_column() {
        assert_eq!(parse_position("1,2"), Ok((1, 2)));
        assert_eq!(parse_position("2,0\n"), Ok((2, 0)));
        assert_eq!(parse_position("  0 , 1  "), Ok((0, 1)));
    }

    #[test]
    fn test_position_keeps_negative_numbers_for_range_check() {
        assert_eq!(parse_position("-1,0"), Ok((-1, 0)));
    }

    #[test]
    fn test_position_rejects_bad_formats() {
        for input in ["!@#$%^&*", "a,0", "0,b", "1", "1,2,3", "", ","] {
            assert!(
                matches!(parse_position(input), Err(InputError::InvalidPositionFormat(_))),
                "input {input:?}"
            );
        }
    }
}
