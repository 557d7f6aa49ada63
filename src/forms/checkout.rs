use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::order::ContactInfo;

fn default_delivery_method() -> String {
    "delivery".to_string()
}

fn default_payment_method() -> String {
    "cash".to_string()
}

/// Raw checkout form as submitted by the UI, camelCase on the wire.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    #[validate(length(min = 1))]
    pub full_name: String,
    #[validate(length(min = 7))]
    pub phone: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub address: String,
    #[serde(default = "default_delivery_method")]
    pub delivery_method: String,
    #[serde(default = "default_payment_method")]
    pub payment_method: String,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

/// Validated checkout data ready for order assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutPayload {
    pub contact: ContactInfo,
}

#[derive(Debug, Error)]
pub enum CheckoutFormError {
    #[error("Checkout form validation failed: {0}")]
    Validation(String),
}

impl From<ValidationErrors> for CheckoutFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl TryFrom<CheckoutForm> for CheckoutPayload {
    type Error = CheckoutFormError;

    fn try_from(value: CheckoutForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let special_instructions = value
            .special_instructions
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Self {
            contact: ContactInfo {
                full_name: value.full_name.trim().to_string(),
                phone: value.phone.trim().to_string(),
                email: value.email.trim().to_string(),
                address: value.address.trim().to_string(),
                delivery_method: value.delivery_method,
                payment_method: value.payment_method,
                special_instructions,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_json(email: &str, phone: &str) -> String {
        format!(
            r#"{{"fullName": "Alice Uwase", "phone": "{phone}",
                 "email": "{email}", "address": "KG 11 Ave, Kigali",
                 "specialInstructions": "  "}}"#
        )
    }

    #[test]
    fn valid_form_converts_with_defaults() {
        let form: CheckoutForm =
            serde_json::from_str(&form_json("alice@example.com", "0788123456")).unwrap();
        let payload = CheckoutPayload::try_from(form).unwrap();

        assert_eq!(payload.contact.full_name, "Alice Uwase");
        assert_eq!(payload.contact.delivery_method, "delivery");
        assert_eq!(payload.contact.payment_method, "cash");
        // whitespace-only instructions collapse to none
        assert!(payload.contact.special_instructions.is_none());
    }

    #[test]
    fn invalid_email_is_rejected() {
        let form: CheckoutForm =
            serde_json::from_str(&form_json("not-an-email", "0788123456")).unwrap();
        assert!(matches!(
            CheckoutPayload::try_from(form),
            Err(CheckoutFormError::Validation(_))
        ));
    }

    #[test]
    fn short_phone_is_rejected() {
        let form: CheckoutForm = serde_json::from_str(&form_json("alice@example.com", "123")).unwrap();
        assert!(CheckoutPayload::try_from(form).is_err());
    }
}
