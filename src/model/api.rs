use serde::{Deserialize, Serialize};

/// Largest page size accepted by list endpoints.
pub const MAX_ENTRIES_PER_PAGE: u64 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    pub error: String,
}

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PaginatedDto<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T> Default for PaginatedDto<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 0,
            per_page: 0,
            total_pages: 0,
        }
    }
}

/// Query string shared by all list endpoints.
///
/// `page` is 0-based; `entries` is clamped to [`MAX_ENTRIES_PER_PAGE`] by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

fn default_entries() -> u64 {
    10
}

impl ListQuery {
    pub fn per_page(&self) -> u64 {
        self.entries.clamp(1, MAX_ENTRIES_PER_PAGE)
    }

    /// Trimmed search term, `None` when blank.
    pub fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

/// Formats integer cents as a decimal amount with thousands separators, e.g. `1,234.50`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let whole = (abs / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}.{:02}", sign, grouped, abs % 100)
}

/// Parses an amount like `1234.5` or `1,234.56` into cents.
///
/// At most two decimals are accepted; `None` for anything else.
pub fn parse_cents(input: &str) -> Option<i64> {
    let cleaned: String = input.trim().chars().filter(|c| *c != ',').collect();
    let (negative, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };

    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if fraction.len() > 2
        || !whole.chars().all(|c| c.is_ascii_digit())
        || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let fraction: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().ok()? * 10,
        _ => fraction.parse().ok()?,
    };

    let cents = whole.checked_mul(100)?.checked_add(fraction)?;
    Some(if negative { -cents } else { cents })
}

/// Error returned when a stored or submitted enum value is not recognised.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl std::fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownVariant {}

/// Implements `as_str`, `FromStr`, `Display` and `ALL` for a string-backed enum.
macro_rules! string_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $value:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::model::api::UnknownVariant;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($value => Ok($name::$variant),)+
                    _ => Err($crate::model::api::UnknownVariant {
                        kind: $kind,
                        value: value.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use string_enum;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_entries_per_page() {
        let query = ListQuery {
            page: 0,
            entries: 500,
            search: None,
        };
        assert_eq!(query.per_page(), MAX_ENTRIES_PER_PAGE);

        let query = ListQuery {
            page: 0,
            entries: 0,
            search: None,
        };
        assert_eq!(query.per_page(), 1);
    }

    #[test]
    fn formats_cents() {
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(5), "0.05");
        assert_eq!(format_cents(123_456), "1,234.56");
        assert_eq!(format_cents(100_000_000), "1,000,000.00");
        assert_eq!(format_cents(-2_550), "-25.50");
    }

    #[test]
    fn parses_amounts_into_cents() {
        assert_eq!(parse_cents("1234.56"), Some(123_456));
        assert_eq!(parse_cents("1,234.5"), Some(123_450));
        assert_eq!(parse_cents(" 12 "), Some(1_200));
        assert_eq!(parse_cents(".75"), Some(75));
        assert_eq!(parse_cents("-3.10"), Some(-310));
        assert_eq!(parse_cents("1.234"), None);
        assert_eq!(parse_cents("abc"), None);
        assert_eq!(parse_cents(""), None);
    }

    #[test]
    fn blank_search_is_ignored() {
        let query = ListQuery {
            page: 0,
            entries: 10,
            search: Some("   ".to_string()),
        };
        assert_eq!(query.search_term(), None);

        let query = ListQuery {
            search: Some(" Berlin ".to_string()),
            ..query
        };
        assert_eq!(query.search_term().as_deref(), Some("Berlin"));
    }
}
