//! Creation timestamps in their persisted `YYYY-MM-DD HH:MM:SS` form.
//!
//! Timestamps are local wall-clock time without a zone, truncated to whole
//! seconds so the in-memory value always equals what gets written.

use chrono::{NaiveDateTime, SubsecRound};

use super::errors::ParseError;

pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_created_at(at: NaiveDateTime) -> String {
    at.format(CREATED_AT_FORMAT).to_string()
}

/// Parses a stored timestamp.
///
/// The text must match the pattern exactly: values chrono would accept but
/// which do not format back to the same text (e.g. `2020-1-2 3:4:5`) are
/// rejected as well.
pub fn parse_created_at(value: &str) -> Result<NaiveDateTime, ParseError> {
    let parsed = NaiveDateTime::parse_from_str(value, CREATED_AT_FORMAT).map_err(|source| {
        ParseError::Timestamp {
            value: value.to_string(),
            source,
        }
    })?;

    if format_created_at(parsed) != value {
        return Err(ParseError::TimestampMismatch {
            value: value.to_string(),
        });
    }
    Ok(parsed)
}

pub fn truncate_to_seconds(at: NaiveDateTime) -> NaiveDateTime {
    at.trunc_subsecs(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};
    use rstest::rstest;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 12, 26)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn parses_canonical_value() {
        assert_eq!(parse_created_at("2020-12-26 15:13:45").unwrap(), at(15, 13, 45));
    }

    #[test]
    fn formats_with_zero_padding() {
        assert_eq!(format_created_at(at(0, 0, 0)), "2020-12-26 00:00:00");
    }

    #[rstest]
    #[case::date_only("2020-12-26")]
    #[case::iso_t_separator("2020-12-26T15:13:45")]
    #[case::fractional_seconds("2020-12-26 15:13:45.500")]
    #[case::unpadded("2020-12-6 15:13:45")]
    #[case::trailing_zone("2020-12-26 15:13:45 +00:00")]
    #[case::garbage("yesterday")]
    #[case::empty("")]
    fn rejects_non_canonical_values(#[case] value: &str) {
        assert!(parse_created_at(value).is_err(), "accepted {value:?}");
    }

    #[test]
    fn truncation_drops_subsecond_precision() {
        let precise = at(15, 13, 45).with_nanosecond(987_654_321).unwrap();
        assert_eq!(truncate_to_seconds(precise), at(15, 13, 45));
    }
}
