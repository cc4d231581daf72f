use serde::{Deserialize, Serialize};

use super::filter::FilterField;

/// One user entry as served by the directory endpoint.
///
/// Text fields are optional: a payload entry missing one of them still
/// decodes, and the missing field simply never matches a non-empty filter.
/// Unknown payload fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Record {
    /// Build a record with every text field present.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: Some(name.into()),
            username: Some(username.into()),
            email: Some(email.into()),
            phone: Some(phone.into()),
        }
    }

    /// Text of the given filterable field, if the record has it.
    pub fn field(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Name => self.name.as_deref(),
            FilterField::Username => self.username.as_deref(),
            FilterField::Email => self.email.as_deref(),
            FilterField::Phone => self.phone.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_payload_and_ignores_extra_fields() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "address": { "city": "Gwenborough" }
        }"#;

        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.field(FilterField::Name), Some("Leanne Graham"));
        assert_eq!(record.field(FilterField::Username), Some("Bret"));
        assert_eq!(record.field(FilterField::Email), Some("Sincere@april.biz"));
        assert_eq!(record.field(FilterField::Phone), Some("1-770-736-8031 x56442"));
    }

    #[test]
    fn missing_text_fields_decode_as_absent() {
        let record: Record = serde_json::from_str(r#"{"id": 7, "name": "Solo"}"#).unwrap();
        assert_eq!(record.field(FilterField::Name), Some("Solo"));
        assert_eq!(record.field(FilterField::Email), None);
        assert_eq!(record.field(FilterField::Phone), None);
    }

    #[test]
    fn missing_id_is_rejected() {
        let result: Result<Record, _> = serde_json::from_str(r#"{"name": "Nobody"}"#);
        assert!(result.is_err());
    }
}
