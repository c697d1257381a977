use sqlx::FromRow;
use std::fmt;

/// A (province, regency/city) pair scoping one fetch-and-store cycle.
///
/// Rows come straight from `master_kota`; the regency code is normalized to two
/// digits by the region directory before the region is handed to the sync loop.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Region {
    #[sqlx(rename = "provinsi_id")]
    pub province_code: String,
    #[sqlx(rename = "kota_id")]
    pub regency_code: String,
}

impl Region {
    #[allow(dead_code)]
    pub fn new(province_code: impl Into<String>, regency_code: impl Into<String>) -> Self {
        Self {
            province_code: province_code.into(),
            regency_code: regency_code.into(),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "province {} regency {}",
            self.province_code, self.regency_code
        )
    }
}

/// Parse a regency code and zero-pad it to two digits ("3" -> "03").
///
/// Returns the offending input on failure.
pub fn parse_regency_code(raw: &str) -> Result<String, String> {
    raw.parse::<i64>()
        .map(|n| format!("{:02}", n))
        .map_err(|_| raw.to_string())
}

/// Lenient variant of [`parse_regency_code`]: malformed codes pass through
/// unchanged with a warning.
pub fn normalize_regency_code(raw: &str) -> String {
    match parse_regency_code(raw) {
        Ok(code) => code,
        Err(original) => {
            tracing::warn!(
                "Regency code '{}' is not numeric, leaving it unformatted",
                original
            );
            original
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_pads_every_code_below_100() {
        for n in 0..100 {
            let normalized = normalize_regency_code(&n.to_string());
            assert_eq!(normalized.len(), 2, "code {} -> {}", n, normalized);
            assert_eq!(normalized.parse::<i32>().unwrap(), n);
        }
        assert_eq!(normalize_regency_code("3"), "03");
        assert_eq!(normalize_regency_code("03"), "03");
        assert_eq!(normalize_regency_code("71"), "71");
    }

    #[test]
    fn test_normalize_passes_non_numeric_through() {
        assert_eq!(normalize_regency_code("7a"), "7a");
        assert_eq!(normalize_regency_code(""), "");
        assert_eq!(normalize_regency_code("51.03"), "51.03");
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(parse_regency_code("5"), Ok("05".to_string()));
        assert_eq!(parse_regency_code("kab"), Err("kab".to_string()));
    }

    #[test]
    fn test_region_display() {
        assert_eq!(Region::new("51", "03").to_string(), "province 51 regency 03");
    }
}
