//! Typed path parameter helpers.

use realty_core::error::AppError;
use realty_core::types::EntityId;

/// Parses an entity id from a path segment.
///
/// Anything but a positive integer is an `INVALID_INPUT` error.
pub fn parse_id(raw: Option<&str>) -> Result<EntityId, AppError> {
    let raw = raw.unwrap_or_default();
    raw.parse::<EntityId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::invalid_input(format!("Invalid id: {raw}")))
}

#[cfg(test)]
mod tests {
    use realty_core::error::ErrorCode;

    use super::*;

    #[test]
    fn test_positive_integers_parse() {
        assert_eq!(parse_id(Some("1")).unwrap(), 1);
        assert_eq!(parse_id(Some("9007199254740993")).unwrap(), 9_007_199_254_740_993);
    }

    #[test]
    fn test_rejects_non_positive_or_garbage() {
        for raw in ["abc", "-1", "0", "1.5", "", " 7", "99999999999999999999"] {
            let err = parse_id(Some(raw)).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidInput, "{raw:?}");
            assert_eq!(err.status_code(), 400);
        }
        assert!(parse_id(None).is_err());
    }
}
