//! Subscription plan definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::catalog::MovieSummary;
use crate::domain::foundation::ValidationError;

/// Plan tier reported by the subscription status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    Basic,
    Premium,
}

impl PlanType {
    pub fn is_premium(&self) -> bool {
        matches!(self, PlanType::Premium)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Basic => "basic",
            PlanType::Premium => "premium",
        }
    }

    /// Parses a persisted or wire value; anything unrecognised is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "basic" => Some(PlanType::Basic),
            "premium" => Some(PlanType::Premium),
            _ => None,
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// True when `movie` must be shown locked for a caller on `plan`.
///
/// An unknown plan is treated as basic, the more restrictive assumption.
pub fn is_locked(movie: &MovieSummary, plan: Option<PlanType>) -> bool {
    movie.premium && !plan.map(|p| p.is_premium()).unwrap_or(false)
}

/// Purchasable premium passes offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutPlan {
    #[serde(rename = "1_day")]
    OneDay,
    #[serde(rename = "1_month")]
    OneMonth,
    #[serde(rename = "3_months")]
    ThreeMonths,
}

impl CheckoutPlan {
    pub const ALL: [CheckoutPlan; 3] = [
        CheckoutPlan::OneDay,
        CheckoutPlan::OneMonth,
        CheckoutPlan::ThreeMonths,
    ];

    /// Identifier sent as `plan_type` when creating a checkout.
    pub fn id(&self) -> &'static str {
        match self {
            CheckoutPlan::OneDay => "1_day",
            CheckoutPlan::OneMonth => "1_month",
            CheckoutPlan::ThreeMonths => "3_months",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutPlan::OneDay => "1 Day Pass",
            CheckoutPlan::OneMonth => "1 Month Pass",
            CheckoutPlan::ThreeMonths => "3 Month Premium",
        }
    }

    pub fn price(&self) -> &'static str {
        match self {
            CheckoutPlan::OneDay => "$1.99",
            CheckoutPlan::OneMonth => "$7.99",
            CheckoutPlan::ThreeMonths => "$19.99",
        }
    }
}

impl FromStr for CheckoutPlan {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CheckoutPlan::ALL
            .into_iter()
            .find(|p| p.id() == s.trim())
            .ok_or_else(|| ValidationError::rule("plan_type", "Please select a plan."))
    }
}
