use serde::{Deserialize, Serialize};

use crate::error::ContactError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    // presence only, whitespace kept
    pub fn validated(name: &str, email: &str) -> Result<Self, ContactError> {
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        Ok(Self::new(name, email))
    }

    pub fn matches(&self, name: &str, email: &str) -> bool {
        self.name == name && self.email == email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_model_001_validated_requires_both_fields() {
        assert_eq!(
            Contact::validated("", "a@e.com"),
            Err(ContactError::MissingName)
        );
        assert_eq!(Contact::validated("Ann", ""), Err(ContactError::MissingEmail));
        assert_eq!(Contact::validated("", ""), Err(ContactError::MissingName));

        let contact = Contact::validated(" Ann ", "a@e.com").expect("valid");
        assert_eq!(contact.name, " Ann ");
    }

    #[test]
    fn t_model_002_structural_match_is_case_sensitive() {
        let contact = Contact::new("Ann", "a@e.com");
        assert!(contact.matches("Ann", "a@e.com"));
        assert!(!contact.matches("ann", "a@e.com"));
        assert!(!contact.matches("Ann", "A@e.com"));
    }

    #[test]
    fn t_model_003_serde_field_names() {
        let contact = Contact::new("Ann", "a@e.com");
        let json = serde_json::to_string(&contact).expect("encode");
        assert_eq!(json, r#"{"name":"Ann","email":"a@e.com"}"#);
    }
}
