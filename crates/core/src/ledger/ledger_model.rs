//! Ledger domain models: the four entity kinds a financial position is built from.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ledger_traits::{Category, LedgerEntity};
use crate::constants::MAX_AMOUNT;
use crate::errors::ValidationError;

// =============================================================================
// Categories
// =============================================================================

/// Asset category. Declaration order is the breakdown order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    Checking,
    Savings,
    Investment,
    Retirement,
    Property,
    Vehicle,
    Cryptocurrency,
    Commodity,
}

impl AssetCategory {
    pub const COUNT: usize = 8;

    /// Categories counted as liquid (cash-equivalent) assets.
    pub fn is_liquid(self) -> bool {
        matches!(self, AssetCategory::Checking | AssetCategory::Savings)
    }

    /// Categories counted as invested assets.
    pub fn is_invested(self) -> bool {
        matches!(
            self,
            AssetCategory::Investment | AssetCategory::Retirement | AssetCategory::Cryptocurrency
        )
    }
}

impl Category for AssetCategory {
    const ALL: &'static [Self] = &[
        AssetCategory::Checking,
        AssetCategory::Savings,
        AssetCategory::Investment,
        AssetCategory::Retirement,
        AssetCategory::Property,
        AssetCategory::Vehicle,
        AssetCategory::Cryptocurrency,
        AssetCategory::Commodity,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn as_str(self) -> &'static str {
        match self {
            AssetCategory::Checking => "checking",
            AssetCategory::Savings => "savings",
            AssetCategory::Investment => "investment",
            AssetCategory::Retirement => "retirement",
            AssetCategory::Property => "property",
            AssetCategory::Vehicle => "vehicle",
            AssetCategory::Cryptocurrency => "cryptocurrency",
            AssetCategory::Commodity => "commodity",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AssetCategory::Checking => "Checking",
            AssetCategory::Savings => "Savings",
            AssetCategory::Investment => "Investments",
            AssetCategory::Retirement => "Retirement",
            AssetCategory::Property => "Properties",
            AssetCategory::Vehicle => "Vehicles",
            AssetCategory::Cryptocurrency => "Cryptocurrency",
            AssetCategory::Commodity => "Commodities",
        }
    }
}

/// Liability category. Declaration order is the breakdown order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiabilityCategory {
    Mortgage,
    CarLoan,
    StudentLoan,
    CreditCard,
    PersonalLoan,
    Other,
}

impl LiabilityCategory {
    pub const COUNT: usize = 6;
}

impl Category for LiabilityCategory {
    const ALL: &'static [Self] = &[
        LiabilityCategory::Mortgage,
        LiabilityCategory::CarLoan,
        LiabilityCategory::StudentLoan,
        LiabilityCategory::CreditCard,
        LiabilityCategory::PersonalLoan,
        LiabilityCategory::Other,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn as_str(self) -> &'static str {
        match self {
            LiabilityCategory::Mortgage => "mortgage",
            LiabilityCategory::CarLoan => "car_loan",
            LiabilityCategory::StudentLoan => "student_loan",
            LiabilityCategory::CreditCard => "credit_card",
            LiabilityCategory::PersonalLoan => "personal_loan",
            LiabilityCategory::Other => "other",
        }
    }

    fn label(self) -> &'static str {
        match self {
            LiabilityCategory::Mortgage => "Mortgage",
            LiabilityCategory::CarLoan => "Car Loan",
            LiabilityCategory::StudentLoan => "Student Loan",
            LiabilityCategory::CreditCard => "Credit Card",
            LiabilityCategory::PersonalLoan => "Personal Loan",
            LiabilityCategory::Other => "Other",
        }
    }
}

// =============================================================================
// Entities
// =============================================================================

/// Something the user owns, valued in the reporting currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub category: AssetCategory,
    /// Current value (must be >= 0)
    #[serde(with = "rust_decimal::serde::str")]
    pub value: Decimal,
    pub currency: String,
    pub last_updated: DateTime<Utc>,
    /// Free-form metadata supplied by the caller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Something the user owes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Liability {
    pub id: String,
    pub name: String,
    pub category: LiabilityCategory,
    /// Outstanding balance (must be >= 0)
    #[serde(with = "rust_decimal::serde::str")]
    pub balance: Decimal,
    /// Annual interest rate in percent (must be >= 0)
    #[serde(with = "rust_decimal::serde::str")]
    pub interest_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub monthly_payment: Decimal,
    pub currency: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// A recurring source of monthly income.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStream {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub monthly_amount: Decimal,
    pub currency: String,
    pub category: String,
    /// Inactive streams are kept but excluded from monthly income.
    pub is_active: bool,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// A monthly spending bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCategory {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub monthly_amount: Decimal,
    pub currency: String,
    pub category: String,
    pub is_recurring: bool,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

// =============================================================================
// Validation
// =============================================================================

fn require_text(value: &str, field: &'static str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

fn require_within_bound(
    value: Decimal,
    field: &'static str,
) -> std::result::Result<(), ValidationError> {
    if value.abs() > MAX_AMOUNT {
        return Err(ValidationError::InvalidInput(format!(
            "Field '{}' exceeds the maximum amount of {} (got {})",
            field, MAX_AMOUNT, value
        )));
    }
    Ok(())
}

fn require_non_negative(
    value: Decimal,
    field: &'static str,
) -> std::result::Result<(), ValidationError> {
    if value < Decimal::ZERO {
        return Err(ValidationError::NegativeAmount { field, value });
    }
    require_within_bound(value, field)
}

impl LedgerEntity for Asset {
    const KIND: &'static str = "asset";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text(&self.id, "id")?;
        require_text(&self.name, "name")?;
        require_non_negative(self.value, "value")
    }
}

impl LedgerEntity for Liability {
    const KIND: &'static str = "liability";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text(&self.id, "id")?;
        require_text(&self.name, "name")?;
        require_non_negative(self.balance, "balance")?;
        require_non_negative(self.interest_rate, "interestRate")?;
        require_within_bound(self.monthly_payment, "monthlyPayment")
    }
}

impl LedgerEntity for IncomeStream {
    const KIND: &'static str = "income stream";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text(&self.id, "id")?;
        require_text(&self.name, "name")?;
        require_non_negative(self.monthly_amount, "monthlyAmount")
    }
}

impl LedgerEntity for ExpenseCategory {
    const KIND: &'static str = "expense";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text(&self.id, "id")?;
        require_text(&self.name, "name")?;
        require_non_negative(self.monthly_amount, "monthlyAmount")
    }
}
