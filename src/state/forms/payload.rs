//! Submitted lead snapshot

use super::form_state::FormKind;
use crate::state::Locale;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Everything a form held at the moment it was submitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadPayload {
    pub id: Uuid,
    pub kind: FormKind,
    /// Display context such as the service name
    pub context: Option<String>,
    pub locale: Locale,
    pub created_at: DateTime<Utc>,
    /// Field name to submitted value
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl LeadPayload {
    #[cfg(test)]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|v| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_kind_and_locale_codes() {
        let payload = LeadPayload {
            id: Uuid::nil(),
            kind: FormKind::Newsletter,
            context: None,
            locale: Locale::En,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            fields: BTreeMap::from([("email".to_string(), serde_json::json!("a@b.co"))]),
        };

        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["kind"], "newsletter");
        assert_eq!(json["locale"], "en");
        assert_eq!(json["fields"]["email"], "a@b.co");
        assert!(json["context"].is_null());
        assert_eq!(payload.text("email"), Some("a@b.co"));
        assert_eq!(payload.text("missing"), None);
    }
}
