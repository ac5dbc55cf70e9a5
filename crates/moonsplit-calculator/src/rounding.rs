//! Cent-exact rounding of a distribution.
//!
//! Rounding every share on its own can leave the rounded rows a cent or two
//! away from the rounded group total. `redistribute_cents` rounds each share,
//! then hands the whole leftover to the tenant with the largest effective area
//! (private area plus an equal share of the common area), so the rounded rows
//! add up exactly. This runs after the engine and never changes its result.

use crate::currency::checked_cents;
use crate::error::{SplitError, SplitResult};
use moonsplit_types::DistributionResult;
use serde::Serialize;

/// How exports turn full-precision values into cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum RoundingMode {
    /// Each value is rounded independently.
    #[default]
    PerValue,
    /// Leftover cents go to the tenant with the largest effective area.
    LargestShareAbsorbs,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundedShare {
    pub id: String,
    pub display_name: String,
    pub private_rent_cents: i64,
    pub common_rent_cents: i64,
    pub rent_cents: i64,
    pub expense_cents: i64,
    pub monthly_cents: i64,
    pub annual_savings_cents: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RoundedDistribution {
    pub tenants: Vec<RoundedShare>,
    pub rent_cents: i64,
    pub expense_cents: i64,
    pub monthly_cents: i64,
}

fn cents(value: f64) -> SplitResult<i64> {
    checked_cents(value).ok_or_else(|| {
        SplitError::export("cents", format!("amount {value} is too large to express in cents"))
    })
}

fn overflow() -> SplitError {
    SplitError::export("cents", "cent arithmetic overflowed")
}

/// Adds cent amounts, failing instead of wrapping.
pub fn sum_cents(values: impl IntoIterator<Item = i64>) -> SplitResult<i64> {
    values.into_iter().try_fold(0i64, |total, value| total.checked_add(value).ok_or_else(overflow))
}

/// Rounds every value independently. Group totals are the rounded group
/// figures of the result, which may differ from the row sums by a cent.
pub fn round_per_value(result: &DistributionResult) -> SplitResult<RoundedDistribution> {
    if !result.validation.is_valid {
        return Ok(RoundedDistribution::default());
    }

    let tenants = result
        .tenants
        .iter()
        .map(|tenant| {
            Ok(RoundedShare {
                id: tenant.id.clone(),
                display_name: tenant.display_name.clone(),
                private_rent_cents: cents(tenant.private_rent_share)?,
                common_rent_cents: cents(tenant.common_rent_share)?,
                rent_cents: cents(tenant.total_rent_share)?,
                expense_cents: cents(tenant.total_expense_share)?,
                monthly_cents: cents(tenant.total_monthly)?,
                annual_savings_cents: tenant.annual_savings.map(cents).transpose()?,
            })
        })
        .collect::<SplitResult<Vec<_>>>()?;

    Ok(RoundedDistribution {
        tenants,
        rent_cents: cents(result.total_rent_distributed)?,
        expense_cents: cents(result.total_expenses_distributed)?,
        monthly_cents: cents(result.total_monthly_group)?,
    })
}

/// Rounds to cents and assigns rounding leftovers to the largest effective
/// area so rows sum exactly to the rounded group totals.
///
/// Each row stays consistent with itself afterwards: the rent column is split
/// into private and common cents (all private when the tenant has no common
/// share) and savings are recomputed from the adjusted monthly figure.
pub fn redistribute_cents(
    result: &DistributionResult,
    common_area_m2: f64,
) -> SplitResult<RoundedDistribution> {
    let mut rounded = round_per_value(result)?;
    let Some(absorber) = largest_effective_area(result, common_area_m2) else {
        return Ok(rounded);
    };

    let rent_rows = sum_cents(rounded.tenants.iter().map(|t| t.rent_cents))?;
    let expense_rows = sum_cents(rounded.tenants.iter().map(|t| t.expense_cents))?;
    let rent_leftover = rounded.rent_cents.checked_sub(rent_rows).ok_or_else(overflow)?;
    let expense_leftover = rounded.expense_cents.checked_sub(expense_rows).ok_or_else(overflow)?;

    let share = &mut rounded.tenants[absorber];
    share.rent_cents = share.rent_cents.checked_add(rent_leftover).ok_or_else(overflow)?;
    share.expense_cents = share.expense_cents.checked_add(expense_leftover).ok_or_else(overflow)?;

    for (share, tenant) in rounded.tenants.iter_mut().zip(&result.tenants) {
        if tenant.common_rent_share > 0.0 {
            share.common_rent_cents =
                share.rent_cents.checked_sub(share.private_rent_cents).ok_or_else(overflow)?;
        } else {
            share.common_rent_cents = 0;
            share.private_rent_cents = share.rent_cents;
        }
        share.monthly_cents = share.rent_cents.checked_add(share.expense_cents).ok_or_else(overflow)?;
        share.annual_savings_cents = match tenant.solo_rent_baseline {
            Some(baseline) => {
                let monthly_gap = cents(baseline)?.checked_sub(share.monthly_cents).ok_or_else(overflow)?;
                Some(monthly_gap.max(0).checked_mul(12).ok_or_else(overflow)?)
            }
            None => None,
        };
    }
    rounded.monthly_cents = rounded.rent_cents.checked_add(rounded.expense_cents).ok_or_else(overflow)?;
    Ok(rounded)
}

fn largest_effective_area(result: &DistributionResult, common_area_m2: f64) -> Option<usize> {
    if result.tenants.is_empty() || !result.validation.is_valid {
        return None;
    }
    let common_share = common_area_m2.max(0.0) / result.tenants.len() as f64;
    let mut best: Option<(usize, f64)> = None;
    for (index, tenant) in result.tenants.iter().enumerate() {
        let effective = tenant.private_area_m2 + common_share;
        match best {
            Some((_, area)) if effective <= area => {}
            _ => best = Some((index, effective)),
        }
    }
    best.map(|(index, _)| index)
}
