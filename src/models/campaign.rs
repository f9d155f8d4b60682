/// Fallback values substituted when a campaign webhook omits (or blanks) a
/// personalization field. These are business constants: templates rely on
/// them rendering, so changing one changes every configured campaign.
pub const DEFAULT_REALTOR_NAME: &str = "Realtor";
pub const DEFAULT_TM_NAME: &str = "Willow Graznow";
pub const DEFAULT_MLS: &str = "N/A";

/// Personalization values for a campaign message, defaults already applied.
/// Every field is always populated, so template substitution cannot fail on
/// a missing name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Personalization {
    pub realtor_name: String,
    pub tm_name: String,
    pub mls: String,
}

impl Default for Personalization {
    fn default() -> Self {
        Self::resolve(None, None, None)
    }
}

impl Personalization {
    /// Build from optional payload fields. Absent and empty/whitespace values
    /// both fall back to the default.
    pub fn resolve(
        realtor_name: Option<String>,
        tm_name: Option<String>,
        mls: Option<String>,
    ) -> Self {
        Self {
            realtor_name: or_default(realtor_name, DEFAULT_REALTOR_NAME),
            tm_name: or_default(tm_name, DEFAULT_TM_NAME),
            mls: or_default(mls, DEFAULT_MLS),
        }
    }

    /// Placeholder names and their values, for substitution by name.
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("realtor_name", self.realtor_name.as_str()),
            ("tm_name", self.tm_name.as_str()),
            ("mls", self.mls.as_str()),
        ]
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_present() {
        let p = Personalization::resolve(
            Some("Jane Smith".to_string()),
            Some("Tom".to_string()),
            Some("MLS-123".to_string()),
        );
        assert_eq!(p.realtor_name, "Jane Smith");
        assert_eq!(p.tm_name, "Tom");
        assert_eq!(p.mls, "MLS-123");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let p = Personalization::resolve(None, None, None);
        assert_eq!(p.realtor_name, DEFAULT_REALTOR_NAME);
        assert_eq!(p.tm_name, DEFAULT_TM_NAME);
        assert_eq!(p.mls, DEFAULT_MLS);
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let p = Personalization::resolve(Some("".to_string()), Some("  ".to_string()), None);
        assert_eq!(p.realtor_name, DEFAULT_REALTOR_NAME);
        assert_eq!(p.tm_name, DEFAULT_TM_NAME);
    }
}
