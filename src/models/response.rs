use serde::Deserialize;

/// `{ success, data }` wrapper returned by every dashboard endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    /// Missing and `null` both decode as `None`
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
        }
    }

    pub fn unsuccessful() -> Self {
        Self {
            success: false,
            data: None,
        }
    }

    /// Payload of a successful response; `None` when `success` is false.
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::DeserializeOwned;

    // Payload type with no `Default` impl
    #[derive(Debug, PartialEq, Deserialize)]
    struct Reading {
        value: u32,
    }

    fn decode<T: DeserializeOwned>(json: &str) -> ApiEnvelope<T> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_decodes_without_default_payload() {
        let envelope: ApiEnvelope<Reading> = decode(r#"{"success": true, "data": {"value": 7}}"#);
        assert_eq!(envelope.into_data(), Some(Reading { value: 7 }));
    }

    #[test]
    fn test_missing_data_field() {
        let envelope: ApiEnvelope<Reading> = decode(r#"{"success": true}"#);
        assert_eq!(envelope.into_data(), None);
    }

    #[test]
    fn test_unsuccessful_payload_is_dropped() {
        let json = r#"{"success": false, "data": [1, 2, 3]}"#;
        let envelope: ApiEnvelope<Vec<u32>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_data(), None);
    }

    #[test]
    fn test_null_data() {
        let json = r#"{"success": true, "data": null}"#;
        let envelope: ApiEnvelope<Vec<u32>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_data(), None);
    }

    #[test]
    fn test_successful_payload() {
        let json = r#"{"success": true, "data": [4]}"#;
        let envelope: ApiEnvelope<Vec<u32>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_data(), Some(vec![4]));
    }
}
