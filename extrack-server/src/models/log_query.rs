//! Exercise log query parameters

use chrono::NaiveDate;
use serde::Deserialize;

use super::{Calendar, ValidationError};

/// Raw query string for `GET /api/users/{id}/logs`.
///
/// Kept as strings so that `?from=&limit=` reads as "not supplied" rather
/// than a rejection from the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogQueryParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// Validated log filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogQuery {
    /// Inclusive lower bound
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound
    pub to: Option<NaiveDate>,
    /// Maximum number of entries, `None` for all
    pub limit: Option<u32>,
}

impl LogQuery {
    /// Validate raw parameters.
    ///
    /// Blank values are ignored and `limit=0` means no cap. Limits past
    /// `u32::MAX` saturate.
    pub fn parse(params: &LogQueryParams, calendar: &Calendar) -> Result<Self, ValidationError> {
        let from = present(&params.from)
            .map(|s| calendar.parse_date("from", s))
            .transpose()?;
        let to = present(&params.to)
            .map(|s| calendar.parse_date("to", s))
            .transpose()?;
        let limit = present(&params.limit)
            .map(|s| {
                s.parse::<u64>()
                    .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
                    .map_err(|_| ValidationError::InvalidFormat {
                        field: "limit",
                        reason: "must be a non-negative integer",
                    })
            })
            .transpose()?
            .filter(|n| *n > 0);

        Ok(Self { from, to, limit })
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(from: Option<&str>, to: Option<&str>, limit: Option<&str>) -> LogQueryParams {
        LogQueryParams {
            from: from.map(Into::into),
            to: to.map(Into::into),
            limit: limit.map(Into::into),
        }
    }

    #[test]
    fn empty_params_mean_no_filter() {
        let q = LogQuery::parse(&LogQueryParams::default(), &Calendar::utc()).unwrap();
        assert_eq!(q, LogQuery::default());

        let q = LogQuery::parse(&params(Some(""), Some(" "), Some("")), &Calendar::utc()).unwrap();
        assert_eq!(q, LogQuery::default());
    }

    #[test]
    fn parses_bounds_and_limit() {
        let q = LogQuery::parse(
            &params(Some("2024-01-01"), Some("2024-01-31"), Some("3")),
            &Calendar::utc(),
        )
        .unwrap();
        assert_eq!(q.from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(q.to, NaiveDate::from_ymd_opt(2024, 1, 31));
        assert_eq!(q.limit, Some(3));
    }

    #[test]
    fn zero_limit_is_unbounded() {
        let q = LogQuery::parse(&params(None, None, Some("0")), &Calendar::utc()).unwrap();
        assert_eq!(q.limit, None);
    }

    #[test]
    fn huge_limit_saturates() {
        let q = LogQuery::parse(&params(None, None, Some("99999999999")), &Calendar::utc()).unwrap();
        assert_eq!(q.limit, Some(u32::MAX));
    }

    #[test]
    fn rejects_bad_values() {
        let cal = Calendar::utc();
        assert!(matches!(
            LogQuery::parse(&params(None, None, Some("-1")), &cal).unwrap_err(),
            ValidationError::InvalidFormat { field: "limit", .. }
        ));
        assert!(matches!(
            LogQuery::parse(&params(Some("last week"), None, None), &cal).unwrap_err(),
            ValidationError::InvalidFormat { field: "from", .. }
        ));
    }
}
