//! Input sanitation.
//!
//! Coerces raw form values into non-negative finite numbers and fills in
//! placeholder ids and names. Nothing here fails; every input maps to a
//! usable value.

use moonsplit_types::{ExpenseInput, TenantInput};

/// Returns `value` when it is finite and non-negative, otherwise `0.0`.
pub fn sanitize_non_negative_number(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 { value } else { 0.0 }
}

/// Repairs one tenant row; `position` is its zero-based index.
pub fn sanitize_tenant(input: &TenantInput, position: usize) -> TenantInput {
    let ordinal = position + 1;
    let id = if input.id.trim().is_empty() { format!("tenant-{ordinal}") } else { input.id.clone() };
    let name = input.display_name.trim();
    let display_name = if name.is_empty() { format!("Tenant {ordinal}") } else { name.to_string() };

    TenantInput {
        id,
        display_name,
        private_area_m2: sanitize_non_negative_number(input.private_area_m2),
        solo_rent_baseline: input
            .solo_rent_baseline
            .filter(|baseline| baseline.is_finite() && *baseline >= 0.0),
    }
}

/// Repairs one expense row; `position` is its zero-based index.
pub fn sanitize_expense(input: &ExpenseInput, position: usize) -> ExpenseInput {
    let ordinal = position + 1;
    let id = if input.id.trim().is_empty() { format!("expense-{ordinal}") } else { input.id.clone() };
    let label = input.label.trim();
    let label = if label.is_empty() { format!("Expense {ordinal}") } else { label.to_string() };

    ExpenseInput {
        id,
        label,
        amount: sanitize_non_negative_number(input.amount),
        allocation_method: input.allocation_method,
    }
}

/// Sanitizes every tenant row in order.
pub fn sanitize_tenants(inputs: &[TenantInput]) -> Vec<TenantInput> {
    inputs.iter().enumerate().map(|(position, tenant)| sanitize_tenant(tenant, position)).collect()
}

/// Sanitizes every expense row in order.
pub fn sanitize_expenses(inputs: &[ExpenseInput]) -> Vec<ExpenseInput> {
    inputs.iter().enumerate().map(|(position, expense)| sanitize_expense(expense, position)).collect()
}
