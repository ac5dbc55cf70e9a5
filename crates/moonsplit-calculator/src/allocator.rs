//! Rent and expense allocation.
//!
//! Rent is split proportionally to each tenant's effective area: the private
//! room plus an equal share of the common area. The two components are kept
//! apart so callers can show the private and common breakdown, and a single
//! normalization factor scales both so the shares add up to the rent.
//!
//! With `S` the total private area, `C` the common area and `N` tenants:
//!
//! ```text
//! R        = C / S
//! base(t)  = area(t) / S + R / N
//! norm     = rent / Σ base(t)
//! private  = area(t) / S * norm
//! common   = R / N * norm
//! ```
//!
//! No rounding happens here. All values stay at full precision.

use crate::allocation::{AllocationContext, rule_for};
use moonsplit_types::{ExpenseAllocation, ExpenseInput, TenantInput, TenantResult};

/// Per-tenant rows plus the group figures the weighting produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub tenants: Vec<TenantResult>,
    pub total_private_area_sum: f64,
    pub normalization_factor: f64,
}

/// Runs the weighting math over sanitized, validated input.
pub fn allocate(
    tenants: &[TenantInput],
    expenses: &[ExpenseInput],
    total_rent: f64,
    common_area_m2: f64,
) -> Allocation {
    let count = tenants.len();
    let total_private_area: f64 = tenants.iter().map(|tenant| tenant.private_area_m2).sum();
    if count == 0 {
        return zero_filled(tenants, expenses);
    }

    let ratio = if total_private_area > 0.0 { common_area_m2 / total_private_area } else { 0.0 };
    let common_weight = 1.0 / count as f64;
    let private_weight = |tenant: &TenantInput| {
        if total_private_area > 0.0 { tenant.private_area_m2 / total_private_area } else { 0.0 }
    };

    let base_sum: f64 =
        tenants.iter().map(|tenant| private_weight(tenant) + common_weight * ratio).sum();
    let norm = if base_sum > 0.0 { total_rent / base_sum } else { 0.0 };

    let context = AllocationContext { tenant_count: count, total_private_area };

    let rows = tenants
        .iter()
        .map(|tenant| {
            let private_rent_share = private_weight(tenant) * norm;
            let common_rent_share = common_weight * ratio * norm;
            let total_rent_share = private_rent_share + common_rent_share;

            let expense_allocations: Vec<ExpenseAllocation> = expenses
                .iter()
                .map(|expense| ExpenseAllocation {
                    expense_id: expense.id.clone(),
                    label: expense.label.clone(),
                    allocation_method: expense.allocation_method,
                    amount: rule_for(expense.allocation_method).share(
                        expense.amount,
                        tenant,
                        &context,
                    ),
                })
                .collect();
            let total_expense_share = expense_allocations.iter().map(|a| a.amount).sum::<f64>();
            let total_monthly = total_rent_share + total_expense_share;

            TenantResult {
                id: tenant.id.clone(),
                display_name: tenant.display_name.clone(),
                private_area_m2: tenant.private_area_m2,
                private_rent_share,
                common_rent_share,
                total_rent_share,
                expense_allocations,
                total_expense_share,
                total_monthly,
                solo_rent_baseline: tenant.solo_rent_baseline,
                annual_savings: tenant
                    .solo_rent_baseline
                    .map(|baseline| (baseline - total_monthly).max(0.0) * 12.0),
            }
        })
        .collect();

    Allocation {
        tenants: rows,
        total_private_area_sum: total_private_area,
        normalization_factor: norm,
    }
}

/// The result returned when validation fails: every share is zero and no
/// savings are reported.
pub fn zero_filled(tenants: &[TenantInput], expenses: &[ExpenseInput]) -> Allocation {
    let rows = tenants
        .iter()
        .map(|tenant| TenantResult {
            id: tenant.id.clone(),
            display_name: tenant.display_name.clone(),
            private_area_m2: tenant.private_area_m2,
            private_rent_share: 0.0,
            common_rent_share: 0.0,
            total_rent_share: 0.0,
            expense_allocations: expenses
                .iter()
                .map(|expense| ExpenseAllocation {
                    expense_id: expense.id.clone(),
                    label: expense.label.clone(),
                    allocation_method: expense.allocation_method,
                    amount: 0.0,
                })
                .collect(),
            total_expense_share: 0.0,
            total_monthly: 0.0,
            solo_rent_baseline: tenant.solo_rent_baseline,
            annual_savings: None,
        })
        .collect();

    Allocation {
        tenants: rows,
        total_private_area_sum: tenants.iter().map(|tenant| tenant.private_area_m2).sum(),
        normalization_factor: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moonsplit_types::AllocationMethod;

    fn tenant(id: &str, area: f64, baseline: Option<f64>) -> TenantInput {
        TenantInput {
            id: id.to_string(),
            display_name: id.to_string(),
            private_area_m2: area,
            solo_rent_baseline: baseline,
        }
    }

    #[test]
    fn test_rent_follows_effective_area() {
        let tenants = vec![tenant("a", 10.0, None), tenant("b", 20.0, None)];
        let allocation = allocate(&tenants, &[], 1000.0, 10.0);

        // Effective areas 15 and 25 out of 40.
        let a = &allocation.tenants[0];
        let b = &allocation.tenants[1];
        assert!((a.total_rent_share - 375.0).abs() < 1e-9);
        assert!((b.total_rent_share - 625.0).abs() < 1e-9);
        assert!((a.common_rent_share - b.common_rent_share).abs() < 1e-9);
        assert!((a.common_rent_share - 125.0).abs() < 1e-9);
    }

    #[test]
    fn test_shares_sum_exactly_per_tenant() {
        let tenants = vec![tenant("a", 12.0, Some(900.0)), tenant("b", 15.0, None)];
        let expenses = vec![ExpenseInput {
            id: "e".to_string(),
            label: "Internet".to_string(),
            amount: 50.0,
            allocation_method: AllocationMethod::EqualSplit,
        }];
        let allocation = allocate(&tenants, &expenses, 1500.0, 25.0);
        for row in &allocation.tenants {
            assert_eq!(row.total_rent_share, row.private_rent_share + row.common_rent_share);
            assert_eq!(row.total_monthly, row.total_rent_share + row.total_expense_share);
            assert_eq!(row.expense_allocations[0].amount, 25.0);
        }
    }

    #[test]
    fn test_savings_never_negative() {
        let tenants = vec![tenant("a", 10.0, Some(100.0)), tenant("b", 10.0, None)];
        let allocation = allocate(&tenants, &[], 1000.0, 0.0);
        assert_eq!(allocation.tenants[0].annual_savings, Some(0.0));
        assert_eq!(allocation.tenants[1].annual_savings, None);
    }

    #[test]
    fn test_no_tenants_is_zero_filled() {
        let allocation = allocate(&[], &[], 1000.0, 10.0);
        assert!(allocation.tenants.is_empty());
        assert_eq!(allocation.normalization_factor, 0.0);
    }

    #[test]
    fn test_zero_filled_keeps_rows_and_expense_slots() {
        let tenants = vec![tenant("a", 0.0, Some(900.0))];
        let expenses = vec![ExpenseInput {
            id: "e".to_string(),
            label: "Gas".to_string(),
            amount: 30.0,
            allocation_method: AllocationMethod::AreaWeighted,
        }];
        let allocation = zero_filled(&tenants, &expenses);
        let row = &allocation.tenants[0];
        assert_eq!(row.total_monthly, 0.0);
        assert_eq!(row.expense_allocations.len(), 1);
        assert_eq!(row.expense_allocations[0].amount, 0.0);
        assert_eq!(row.annual_savings, None);
    }
}
