//! Group totals over the allocator's rows.
//!
//! Plain sums of the per-tenant values, so the headline figures can never
//! disagree with the rows they summarize.

use crate::allocator::Allocation;
use moonsplit_types::{DistributionResult, ValidationReport};

/// Combines allocated rows and the validation report into the final result.
pub fn aggregate(allocation: Allocation, validation: ValidationReport) -> DistributionResult {
    let total_rent_distributed = allocation.tenants.iter().map(|t| t.total_rent_share).sum();
    let total_expenses_distributed = allocation.tenants.iter().map(|t| t.total_expense_share).sum();
    let total_monthly_group = allocation.tenants.iter().map(|t| t.total_monthly).sum();

    DistributionResult {
        tenants: allocation.tenants,
        total_private_area_sum: allocation.total_private_area_sum,
        normalization_factor: allocation.normalization_factor,
        total_rent_distributed,
        total_expenses_distributed,
        total_monthly_group,
        validation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::allocate;
    use moonsplit_types::TenantInput;

    #[test]
    fn test_totals_are_row_sums() {
        let tenants: Vec<TenantInput> = [8.0, 11.0, 14.0]
            .iter()
            .map(|area| TenantInput { private_area_m2: *area, ..Default::default() })
            .collect();
        let allocation = allocate(&tenants, &[], 1350.0, 18.0);
        let expected: f64 = allocation.tenants.iter().map(|t| t.total_monthly).sum();

        let result = aggregate(allocation, ValidationReport::from_issues(Vec::new()));

        assert_eq!(result.total_monthly_group, expected);
        assert!((result.total_rent_distributed - 1350.0).abs() < 1e-9);
        assert_eq!(result.total_expenses_distributed, 0.0);
        assert!(result.validation.is_valid);
    }
}
