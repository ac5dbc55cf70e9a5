//! Structural precondition checks.
//!
//! Errors block the allocation; warnings are reported alongside a normal
//! result.

use crate::policy::TenantCountPolicy;
use moonsplit_types::{IssueCode, TenantInput, ValidationIssue, ValidationReport};

/// Raw values the validator needs besides the sanitized tenant rows.
#[derive(Debug, Clone, Copy)]
pub struct ValidationInput<'a> {
    /// Rent as supplied by the caller, before sanitation.
    pub total_rent: f64,
    /// Common area as supplied by the caller, before sanitation.
    pub common_area_m2: f64,
    /// Number of tenant rows the caller sent.
    pub raw_row_count: usize,
    /// Sanitized effective tenants.
    pub tenants: &'a [TenantInput],
}

/// Checks the request against the tenant policy and the numeric preconditions.
pub fn validate(input: &ValidationInput<'_>, policy: &TenantCountPolicy) -> ValidationReport {
    let mut issues = Vec::new();
    let count = input.tenants.len();

    if count < policy.min() {
        issues.push(ValidationIssue::error(
            IssueCode::MinTenants,
            format!("tenant count must be {}", policy.describe()),
        ));
    } else if count > policy.max() {
        issues.push(ValidationIssue::error(
            IssueCode::MaxTenants,
            format!("tenant count must be {}", policy.describe()),
        ));
    }

    if input.total_rent.is_nan() || input.total_rent <= 0.0 {
        issues.push(ValidationIssue::error(
            IssueCode::RentPositive,
            "rent must be greater than zero",
        ));
    } else if input.total_rent.is_infinite() {
        issues.push(ValidationIssue::error(IssueCode::RentPositive, "rent must be a finite amount"));
    }

    // Finite areas can still sum to infinity.
    let private_area: f64 = input.tenants.iter().map(|tenant| tenant.private_area_m2).sum();
    if private_area <= 0.0 {
        issues.push(ValidationIssue::error(
            IssueCode::PrivateAreaPositive,
            "total private area must be greater than zero",
        ));
    } else if !private_area.is_finite() {
        issues.push(ValidationIssue::error(
            IssueCode::PrivateAreaPositive,
            "total private area is too large",
        ));
    }

    if input.common_area_m2 < 0.0 {
        issues.push(ValidationIssue::error(
            IssueCode::CommonAreaNegative,
            "common area cannot be negative",
        ));
    } else if input.common_area_m2.is_infinite() {
        issues.push(ValidationIssue::error(
            IssueCode::CommonAreaFinite,
            "common area must be a finite number",
        ));
    }

    if input.raw_row_count != count {
        issues.push(ValidationIssue::warning(
            IssueCode::TenantRowMismatch,
            format!("row count mismatch: {} rows for {} tenants", input.raw_row_count, count),
        ));
    }

    ValidationReport::from_issues(issues)
}
