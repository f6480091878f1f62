// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{Error, Result};
use crate::models::TransactionRequest;
use crate::utils::parse_decimal;

pub const REQUIRED_FIELDS: &str = "Amount and category are required!";

/// Raw input for a new expense, exactly as typed.
#[derive(Debug, Clone, Default)]
pub struct TransactionForm {
    pub amount: String,
    pub category_name: String,
    pub note: String,
}

impl TransactionForm {
    pub fn new(amount: impl Into<String>, category_name: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            category_name: category_name.into(),
            note: String::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Checks that amount and category are present and builds the request.
    /// Range and length checks are left to the server.
    pub fn submit(&self) -> Result<TransactionRequest> {
        let amount = self.amount.trim();
        let category_name = self.category_name.trim();
        if amount.is_empty() || category_name.is_empty() {
            return Err(Error::Validation(REQUIRED_FIELDS.to_string()));
        }
        let note = self.note.trim();
        Ok(TransactionRequest {
            amount: parse_decimal(amount)?,
            category_name: category_name.to_string(),
            note: (!note.is_empty()).then(|| note.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn missing_fields_block_submission() {
        for form in [
            TransactionForm::new("", "Food"),
            TransactionForm::new("50", "   "),
            TransactionForm::default(),
        ] {
            match form.submit() {
                Err(Error::Validation(msg)) => assert_eq!(msg, REQUIRED_FIELDS),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn trims_and_drops_blank_note() {
        let req = TransactionForm::new("50.00", "  Food ")
            .with_note("   ")
            .submit()
            .unwrap();
        assert_eq!(req.amount, Decimal::new(5000, 2));
        assert_eq!(req.category_name, "Food");
        assert_eq!(req.note, None);

        let req = TransactionForm::new("12", "Transport")
            .with_note(" matatu ")
            .submit()
            .unwrap();
        assert_eq!(req.note.as_deref(), Some("matatu"));
    }

    #[test]
    fn request_serializes_amount_as_number() {
        let req = TransactionForm::new("50.5", "Food").submit().unwrap();
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["amount"], serde_json::json!(50.5));
        assert_eq!(v["categoryName"], "Food");
        assert!(v.get("note").is_none());
    }
}
