use log::debug;
use rust_decimal::Decimal;

use super::risk_model::{RiskAssessment, RiskConfig, RiskFactor, RiskLevel};
use crate::metrics::KpiMetrics;

pub struct RiskAssessor;

impl RiskAssessor {
    /// Runs the risk rules in order and derives the level from the factor count.
    ///
    /// Rules are independent except the liquidity pair, where only the lower
    /// band fires. The liquidity and emergency-fund rules may both fire for the
    /// same shortfall.
    pub fn assess(metrics: &KpiMetrics, net_worth: Decimal, config: &RiskConfig) -> RiskAssessment {
        let mut factors = Vec::new();

        if metrics.debt_to_income_ratio > config.high_debt_to_income {
            factors.push(RiskFactor::HighDebtToIncome);
        }
        if metrics.debt_to_income_ratio > config.elevated_debt_to_income {
            factors.push(RiskFactor::ElevatedDebtToIncome);
        }

        if metrics.liquidity_ratio < config.low_liquidity {
            factors.push(RiskFactor::LowLiquidity);
        } else if metrics.liquidity_ratio < config.adequate_liquidity {
            factors.push(RiskFactor::InsufficientEmergencyFund);
        }

        if metrics.emergency_fund_months < config.min_emergency_fund_months {
            factors.push(RiskFactor::EmergencyFundShortfall);
        }
        if metrics.savings_rate < config.min_savings_rate {
            factors.push(RiskFactor::LowSavingsRate);
        }
        if net_worth < Decimal::ZERO {
            factors.push(RiskFactor::NegativeNetWorth);
        }

        let risk_level = RiskLevel::from_factor_count(factors.len());
        debug!(
            "Risk assessment: {} ({} factors: {:?})",
            risk_level,
            factors.len(),
            factors
        );

        RiskAssessment {
            risk_level,
            recommendations: factors
                .iter()
                .map(|f| f.recommendation().to_string())
                .collect(),
            risk_factors: factors,
            debt_burden: metrics.debt_to_income_ratio,
            liquidity_concern: metrics.liquidity_ratio < config.adequate_liquidity,
            emergency_fund_sufficiency: metrics.emergency_fund_months
                >= config.min_emergency_fund_months,
        }
    }
}
