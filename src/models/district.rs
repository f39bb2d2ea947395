use crate::i18n::Language;
use serde::{Deserialize, Serialize};

/// One entry of the district catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictSummary {
    pub district_code: String,
    pub district_name: String,
    pub district_name_hi: String,
    #[serde(default)]
    pub state_code: String,
    #[serde(default)]
    pub state_name: String,
    #[serde(default)]
    pub state_name_hi: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl DistrictSummary {
    /// District name in the given language
    pub fn name(&self, language: Language) -> &str {
        match language {
            Language::Hindi => &self.district_name_hi,
            Language::English => &self.district_name,
        }
    }

    /// Name of the parent state in the given language
    pub fn state_name(&self, language: Language) -> &str {
        match language {
            Language::Hindi => &self.state_name_hi,
            Language::English => &self.state_name,
        }
    }

    /// Whether either localized name contains `term`.
    ///
    /// The English name is compared case-insensitively; Devanagari has no
    /// case, so the Hindi name is a plain substring match.
    pub fn matches(&self, term: &str) -> bool {
        self.district_name
            .to_lowercase()
            .contains(&term.to_lowercase())
            || self.district_name_hi.contains(term)
    }
}

/// Restricts the catalog to entries matching `term`, keeping source order.
/// An empty term returns every entry.
pub fn filter_districts<'a>(catalog: &'a [DistrictSummary], term: &str) -> Vec<&'a DistrictSummary> {
    if term.is_empty() {
        return catalog.iter().collect();
    }
    catalog.iter().filter(|d| d.matches(term)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn district(code: &str, name: &str, name_hi: &str) -> DistrictSummary {
        DistrictSummary {
            district_code: code.to_string(),
            district_name: name.to_string(),
            district_name_hi: name_hi.to_string(),
            state_code: "UP".to_string(),
            state_name: "Uttar Pradesh".to_string(),
            state_name_hi: "उत्तर प्रदेश".to_string(),
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn test_localized_names() {
        let d = district("UP01", "Agra", "आगरा");
        assert_eq!(d.name(Language::English), "Agra");
        assert_eq!(d.name(Language::Hindi), "आगरा");
        assert_eq!(d.state_name(Language::Hindi), "उत्तर प्रदेश");
    }

    #[test]
    fn test_match_is_case_insensitive_for_english() {
        let d = district("UP49", "Lucknow", "लखनऊ");
        assert!(d.matches("LUCK"));
        assert!(d.matches("now"));
        assert!(d.matches("लख"));
        assert!(!d.matches("agra"));
    }

    #[test]
    fn test_filter_keeps_order() {
        let catalog = vec![
            district("UP42", "Kanpur Dehat", "कानपुर देहात"),
            district("UP01", "Agra", "आगरा"),
            district("UP43", "Kanpur Nagar", "कानपुर नगर"),
        ];
        let codes: Vec<&str> = filter_districts(&catalog, "kanpur")
            .iter()
            .map(|d| d.district_code.as_str())
            .collect();
        assert_eq!(codes, vec!["UP42", "UP43"]);
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{"district_code":"UP01","district_name":"Agra","district_name_hi":"आगरा"}"#;
        let d: DistrictSummary = serde_json::from_str(json).unwrap();
        assert_eq!(d.district_code, "UP01");
        assert!(d.state_name.is_empty());
        assert_eq!(d.latitude, None);
    }
}
