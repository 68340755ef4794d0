//! Shopify Admin API version selection.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Shopify Admin API version used in the `/admin/api/{version}` base path.
///
/// Shopify releases a version every quarter. Known releases have their own
/// variant; any other value is passed through as `Custom` so a newer or
/// preview release can be used without a crate update.
/// Variants are declared oldest first, so the derived ordering is
/// chronological with `Unstable` and then `Custom` sorting last.
///
/// # Example
///
/// ```rust
/// use shopify_mcp::ApiVersion;
///
/// let version: ApiVersion = "2025-01".parse().unwrap();
/// assert_eq!(version, ApiVersion::DEFAULT);
/// assert_eq!(version.to_string(), "2025-01");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApiVersion {
    /// API version 2024-01
    V2024_01,
    /// API version 2024-04
    V2024_04,
    /// API version 2024-07
    V2024_07,
    /// API version 2024-10
    V2024_10,
    /// API version 2025-01
    V2025_01,
    /// API version 2025-04
    V2025_04,
    /// API version 2025-07
    V2025_07,
    /// API version 2025-10
    V2025_10,
    /// The `unstable` preview version.
    Unstable,
    /// A version this crate does not know by name.
    Custom(String),
}

impl ApiVersion {
    /// Version used when `SHOPIFY_API_VERSION` is not set.
    pub const DEFAULT: Self = Self::V2025_01;

    /// Returns the oldest release still inside Shopify's support window.
    #[must_use]
    pub const fn minimum_supported() -> Self {
        Self::V2025_01
    }

    /// Returns `true` for named quarterly releases.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        !matches!(self, Self::Unstable | Self::Custom(_))
    }

    /// Returns `true` if this release has left Shopify's support window.
    ///
    /// `Unstable` and `Custom` are never reported as deprecated.
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        self.is_stable() && *self < Self::minimum_supported()
    }

    /// Returns the version as it appears in request paths.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V2024_01 => "2024-01",
            Self::V2024_04 => "2024-04",
            Self::V2024_07 => "2024-07",
            Self::V2024_10 => "2024-10",
            Self::V2025_01 => "2025-01",
            Self::V2025_04 => "2025-04",
            Self::V2025_07 => "2025-07",
            Self::V2025_10 => "2025-10",
            Self::Unstable => "unstable",
            Self::Custom(s) => s,
        }
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    // Anything that fits in one URL path segment is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        Ok(match s.as_str() {
            "2024-01" => Self::V2024_01,
            "2024-04" => Self::V2024_04,
            "2024-07" => Self::V2024_07,
            "2024-10" => Self::V2024_10,
            "2025-01" => Self::V2025_01,
            "2025-04" => Self::V2025_04,
            "2025-07" => Self::V2025_07,
            "2025-10" => Self::V2025_10,
            "unstable" => Self::Unstable,
            _ if s.is_empty() || s.contains(|c: char| c.is_whitespace() || "/?#".contains(c)) => {
                return Err(ConfigError::InvalidApiVersion { version: s });
            }
            _ => Self::Custom(s),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_version_is_2025_01() {
        assert_eq!(ApiVersion::default().to_string(), "2025-01");
    }

    #[test]
    fn test_api_version_parses_known_versions() {
        assert_eq!(
            "2024-10".parse::<ApiVersion>().unwrap(),
            ApiVersion::V2024_10
        );
        assert_eq!(
            " 2025-04 ".parse::<ApiVersion>().unwrap(),
            ApiVersion::V2025_04
        );
        assert_eq!(
            "UNSTABLE".parse::<ApiVersion>().unwrap(),
            ApiVersion::Unstable
        );
    }

    #[test]
    fn test_api_version_passes_unknown_versions_through() {
        let version: ApiVersion = "2026-01".parse().unwrap();
        assert_eq!(version, ApiVersion::Custom("2026-01".to_string()));
        assert_eq!(version.to_string(), "2026-01");
        assert!(!version.is_stable());

        assert_eq!(
            "2025-02".parse::<ApiVersion>().unwrap(),
            ApiVersion::Custom("2025-02".to_string())
        );
    }

    #[test]
    fn test_api_version_rejects_values_that_break_the_path() {
        assert!("".parse::<ApiVersion>().is_err());
        assert!("   ".parse::<ApiVersion>().is_err());
        assert!("2025 01".parse::<ApiVersion>().is_err());
        assert!("2025-01/products".parse::<ApiVersion>().is_err());
        assert!("2025-01?x=1".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(ApiVersion::V2024_10 < ApiVersion::V2025_01);
        assert!(ApiVersion::V2025_10 < ApiVersion::Unstable);
        assert!(ApiVersion::Unstable < ApiVersion::Custom("2026-01".to_string()));
        assert!(
            ApiVersion::Custom("2026-01".to_string()) < ApiVersion::Custom("2026-04".to_string())
        );
    }

    #[test]
    fn test_is_deprecated() {
        assert!(ApiVersion::V2024_10.is_deprecated());
        assert!(!ApiVersion::DEFAULT.is_deprecated());
        assert!(!ApiVersion::V2025_10.is_deprecated());
        assert!(!ApiVersion::Unstable.is_deprecated());
        assert!(!ApiVersion::Custom("2026-01".to_string()).is_deprecated());
    }
}
