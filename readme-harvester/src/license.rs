//! License allow-list gate.
//!
//! Repositories are accepted only when their license display name, lowered,
//! exactly matches an allow-listed entry. There is no trimming, punctuation
//! normalization, or alias matching: `"MIT License "` with a trailing space
//! is denied even though `"MIT License"` is allowed.

use serde_json::Value;

/// License display names (lower-cased) accepted by the gate.
pub const ALLOWED_LICENSES: &[&str] = &["mit license", "apache license 2.0", "bsd license"];

/// Outcome of evaluating a repository's license against the allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseDecision {
    /// The license is on the allow-list.
    Allowed {
        /// Lower-cased license display name.
        name: String,
    },

    /// The metadata has no license field (or it is JSON null).
    Missing,

    /// The license is present but not allow-listed.
    Denied {
        /// Lower-cased license display name; empty when the metadata
        /// carries a license object without a usable name.
        name: String,
    },
}

/// Evaluates the license recorded in a repository metadata document.
///
/// Only the `license.name` field is consulted. A missing or non-string name
/// behaves as the empty string and is denied.
#[must_use]
pub fn evaluate(metadata: &Value) -> LicenseDecision {
    let license = match metadata.get("license") {
        Some(value) if !value.is_null() => value,
        _ => return LicenseDecision::Missing,
    };

    let name = license
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_lowercase();

    if ALLOWED_LICENSES.contains(&name.as_str()) {
        LicenseDecision::Allowed { name }
    } else {
        LicenseDecision::Denied { name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn allows_exact_match_case_insensitively() {
        let metadata = json!({"license": {"name": "MIT License"}});
        assert_eq!(
            evaluate(&metadata),
            LicenseDecision::Allowed {
                name: "mit license".to_string()
            }
        );
    }

    #[test]
    fn denies_trailing_whitespace() {
        // Exact membership only: surrounding whitespace is never trimmed.
        let metadata = json!({"license": {"name": "MIT License "}});
        assert_eq!(
            evaluate(&metadata),
            LicenseDecision::Denied {
                name: "mit license ".to_string()
            }
        );
    }

    #[test]
    fn denies_unlisted_license() {
        let metadata = json!({"license": {"name": "GNU General Public License v3.0"}});
        assert!(matches!(evaluate(&metadata), LicenseDecision::Denied { .. }));
    }

    #[test]
    fn missing_license_field() {
        let metadata = json!({"default_branch": "main"});
        assert_eq!(evaluate(&metadata), LicenseDecision::Missing);
    }

    #[test]
    fn null_license_field() {
        let metadata = json!({"license": null});
        assert_eq!(evaluate(&metadata), LicenseDecision::Missing);
    }

    #[test]
    fn license_without_name_is_denied() {
        let metadata = json!({"license": {"spdx_id": "MIT"}});
        assert_eq!(
            evaluate(&metadata),
            LicenseDecision::Denied {
                name: String::new()
            }
        );
    }
}
