//! Risk assessment domain models.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

// =============================================================================
// Risk Level
// =============================================================================

/// Overall risk level, ordered from lowest to highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    /// Step function over the number of factors that fired.
    pub fn from_factor_count(count: usize) -> Self {
        match count {
            0 => RiskLevel::Low,
            1..=2 => RiskLevel::Moderate,
            3..=4 => RiskLevel::High,
            _ => RiskLevel::Critical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Risk Factor
// =============================================================================

/// A single triggered risk rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    HighDebtToIncome,
    ElevatedDebtToIncome,
    LowLiquidity,
    InsufficientEmergencyFund,
    EmergencyFundShortfall,
    LowSavingsRate,
    NegativeNetWorth,
}

impl RiskFactor {
    pub fn label(&self) -> &'static str {
        match self {
            RiskFactor::HighDebtToIncome => "high debt-to-income",
            RiskFactor::ElevatedDebtToIncome => "elevated debt-to-income",
            RiskFactor::LowLiquidity => "low liquidity",
            RiskFactor::InsufficientEmergencyFund => "insufficient emergency fund",
            RiskFactor::EmergencyFundShortfall => "emergency fund insufficient",
            RiskFactor::LowSavingsRate => "low savings rate",
            RiskFactor::NegativeNetWorth => "negative net worth",
        }
    }

    /// Advice paired with this factor.
    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskFactor::HighDebtToIncome => {
                "Reduce outstanding debt or increase income to bring monthly debt payments below 43% of income"
            }
            RiskFactor::ElevatedDebtToIncome => {
                "Monitor your debt-to-income ratio and avoid taking on new debt"
            }
            RiskFactor::LowLiquidity => {
                "Build an emergency fund covering at least one month of expenses"
            }
            RiskFactor::InsufficientEmergencyFund => {
                "Save 3 to 6 months of expenses in liquid accounts"
            }
            RiskFactor::EmergencyFundShortfall => {
                "Prioritize savings until your emergency fund covers 3 months of expenses"
            }
            RiskFactor::LowSavingsRate => "Aim to save 10-15% of your monthly income",
            RiskFactor::NegativeNetWorth => {
                "Focus on paying down debt and building assets to reach a positive net worth"
            }
        }
    }
}

impl std::fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Risk Assessment
// =============================================================================

/// Result of running every risk rule once.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    /// Factors in rule order
    pub risk_factors: Vec<RiskFactor>,
    /// One recommendation per factor, same order
    pub recommendations: Vec<String>,
    /// The debt-to-income ratio, in percent
    pub debt_burden: Decimal,
    pub liquidity_concern: bool,
    pub emergency_fund_sufficiency: bool,
}

impl RiskAssessment {
    pub fn has_factor(&self, factor: RiskFactor) -> bool {
        self.risk_factors.contains(&factor)
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Thresholds used by the risk rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RiskConfig {
    /// Debt-to-income percentage above which debt is high (default: 43)
    pub high_debt_to_income: Decimal,

    /// Debt-to-income percentage above which debt is elevated (default: 35)
    pub elevated_debt_to_income: Decimal,

    /// Liquidity ratio below which liquidity is low (default: 1)
    pub low_liquidity: Decimal,

    /// Liquidity ratio below which the emergency fund is insufficient (default: 3)
    pub adequate_liquidity: Decimal,

    /// Minimum months of expenses held in liquid assets (default: 3)
    pub min_emergency_fund_months: Decimal,

    /// Savings rate percentage below which savings are low (default: 10)
    pub min_savings_rate: Decimal,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            high_debt_to_income: dec!(43),
            elevated_debt_to_income: dec!(35),
            low_liquidity: dec!(1),
            adequate_liquidity: dec!(3),
            min_emergency_fund_months: dec!(3),
            min_savings_rate: dec!(10),
        }
    }
}
