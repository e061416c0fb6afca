//! Request bodies for the JSON API
//!
//! Fields are optional at the serde level so a missing field becomes a
//! `Validation` error with a readable message instead of an extractor
//! rejection.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::LedgerResult;
use crate::models::input::{amount_from_decimal, parse_amount, parse_optional_date, required_text};
use crate::models::{Money, TransactionType};

/// Amounts arrive either as JSON numbers or as strings from form fields
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AmountField {
    Number(f64),
    Text(String),
}

impl AmountField {
    fn to_money(&self, field: &str) -> LedgerResult<Money> {
        match self {
            Self::Number(n) => amount_from_decimal(field, *n),
            Self::Text(s) => parse_amount(field, s),
        }
    }
}

fn required_amount(field: &str, value: Option<&AmountField>) -> LedgerResult<Money> {
    match value {
        Some(v) => v.to_money(field),
        None => required_text(field, None).map(|_| Money::zero()),
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddTransactionRequest {
    pub amount: Option<AmountField>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub transaction_type: Option<String>,
    pub date: Option<String>,
}

/// A validated add-transaction request
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub amount: Money,
    pub category: String,
    pub description: String,
    pub transaction_type: TransactionType,
    pub date: Option<NaiveDate>,
}

impl AddTransactionRequest {
    pub fn validate(self) -> LedgerResult<NewTransaction> {
        let amount = required_amount("amount", self.amount.as_ref())?;
        let category = required_text("category", self.category.as_deref())?;
        let transaction_type = required_text("transaction_type", self.transaction_type.as_deref())?
            .parse::<TransactionType>()?;
        let date = parse_optional_date(self.date.as_deref())?;

        Ok(NewTransaction {
            amount,
            category,
            description: self.description.unwrap_or_default(),
            transaction_type,
            date,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetBudgetRequest {
    pub category: Option<String>,
    pub monthly_limit: Option<AmountField>,
}

impl SetBudgetRequest {
    pub fn validate(self) -> LedgerResult<(String, Money)> {
        let category = required_text("category", self.category.as_deref())?;
        let limit = required_amount("monthly_limit", self.monthly_limit.as_ref())?;
        Ok((category, limit))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteTransactionRequest {
    pub transaction_id: Option<String>,
}

impl DeleteTransactionRequest {
    pub fn validate(self) -> LedgerResult<String> {
        required_text("transaction_id", self.transaction_id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_request(json: &str) -> AddTransactionRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_add_accepts_number_or_string_amount() {
        let a = add_request(r#"{"amount": 12.5, "category": "food", "transaction_type": "expense"}"#)
            .validate()
            .unwrap();
        let b = add_request(r#"{"amount": "12.50", "category": "food", "transaction_type": "expense"}"#)
            .validate()
            .unwrap();

        assert_eq!(a, b);
        assert_eq!(a.amount.cents(), 1250);
        assert_eq!(a.description, "");
        assert_eq!(a.date, None);
    }

    #[test]
    fn test_add_empty_date_means_today() {
        let req = add_request(
            r#"{"amount": 1, "category": "food", "transaction_type": "income", "date": ""}"#,
        );
        assert_eq!(req.validate().unwrap().date, None);
    }

    #[test]
    fn test_add_rejects_missing_fields() {
        let err = add_request(r#"{"category": "food", "transaction_type": "expense"}"#)
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "Validation error: amount is required");

        let err = add_request(r#"{"amount": 1, "transaction_type": "expense"}"#)
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "Validation error: category is required");
    }

    #[test]
    fn test_add_rejects_unknown_type() {
        let err = add_request(r#"{"amount": 1, "category": "food", "transaction_type": "loan"}"#)
            .validate()
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_add_rejects_negative_amount() {
        let err = add_request(r#"{"amount": -3, "category": "food", "transaction_type": "expense"}"#)
            .validate()
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_set_budget_validation() {
        let req: SetBudgetRequest =
            serde_json::from_str(r#"{"category": "food", "monthly_limit": "200"}"#).unwrap();
        let (category, limit) = req.validate().unwrap();
        assert_eq!(category, "food");
        assert_eq!(limit.cents(), 20000);

        let req: SetBudgetRequest = serde_json::from_str(r#"{"category": "food"}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_delete_requires_id() {
        let req: DeleteTransactionRequest = serde_json::from_str("{}").unwrap();
        assert!(req.validate().unwrap_err().is_validation());
    }
}
