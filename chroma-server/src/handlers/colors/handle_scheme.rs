use axum::{Json, extract::Query};
use chroma_core::scheme::{effective_count, generate_scheme};
use serde::Deserialize;
use tracing::info;

use crate::{api::SchemeResponse, infra::errors::AppResult};

#[derive(Debug, Default, Deserialize)]
pub struct SchemeQuery {
    pub base: Option<String>,
    pub count: Option<String>,
}

/// Build a hue-rotation scheme from `base` (random when absent or invalid)
pub async fn color_scheme_handler(
    Query(query): Query<SchemeQuery>,
) -> AppResult<Json<SchemeResponse>> {
    let base = query.base.as_deref().filter(|b| !b.trim().is_empty());

    let count = effective_count(parse_count(query.count.as_deref()));
    let scheme = generate_scheme(base, Some(count));
    info!(base = %scheme.base, count, "color scheme generated");

    Ok(Json(SchemeResponse {
        success: true,
        message: format!(
            "Color scheme of {} colors generated successfully",
            scheme.len()
        ),
        base: scheme.base,
        scheme: scheme.scheme,
    }))
}

/// Lenient integer parsing for the `count` query parameter.
///
/// Leading digits are used and trailing junk ignored (`"4px"` is 4). Zero,
/// negative and digit-less input yield `None` so the default applies.
pub fn parse_count(raw: Option<&str>) -> Option<usize> {
    let raw = raw?.trim_start();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() || negative {
        return None;
    }

    // Anything too large for usize is simply "very large" and gets capped.
    let value = digits.parse::<usize>().unwrap_or(usize::MAX);
    (value > 0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::parse_count;

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_count(Some("6")), Some(6));
        assert_eq!(parse_count(Some(" +3")), Some(3));
    }

    #[test]
    fn trailing_junk_is_ignored() {
        assert_eq!(parse_count(Some("4px")), Some(4));
        assert_eq!(parse_count(Some("7.9")), Some(7));
    }

    #[test]
    fn invalid_counts_fall_back() {
        for raw in [None, Some(""), Some("abc"), Some("0"), Some("-2"), Some("-")] {
            assert_eq!(parse_count(raw), None, "{raw:?}");
        }
    }

    #[test]
    fn huge_counts_saturate() {
        assert_eq!(
            parse_count(Some("99999999999999999999999999")),
            Some(usize::MAX)
        );
    }
}
