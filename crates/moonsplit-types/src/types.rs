use crate::loose;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule governing how a variable expense is divided among tenants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum AllocationMethod {
    /// Every tenant pays the same share.
    #[default]
    EqualSplit,
    /// Shares follow each tenant's fraction of the total private area.
    AreaWeighted,
}

impl AllocationMethod {
    /// Stable wire name of the method.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EqualSplit => "EQUAL_SPLIT",
            Self::AreaWeighted => "AREA_WEIGHTED",
        }
    }

    /// Reads a raw method name. Anything other than exactly `AREA_WEIGHTED`
    /// falls back to an equal split.
    pub fn from_raw(raw: &str) -> Self {
        if raw == "AREA_WEIGHTED" { Self::AreaWeighted } else { Self::EqualSplit }
    }
}

impl From<String> for AllocationMethod {
    fn from(value: String) -> Self {
        Self::from_raw(&value)
    }
}

impl fmt::Display for AllocationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tenant row as entered in the calculator form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantInput {
    /// Caller-supplied identifier, stable across edits.
    #[serde(default)]
    pub id: String,
    /// Name shown in results and summaries.
    #[serde(default)]
    pub display_name: String,
    /// Private room area in square metres.
    #[serde(default = "loose::missing_number", deserialize_with = "loose::number")]
    pub private_area_m2: f64,
    /// What the tenant would pay living alone, if known.
    #[serde(
        default,
        deserialize_with = "loose::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub solo_rent_baseline: Option<f64>,
}

/// A variable shared expense as entered in the calculator form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseInput {
    /// Caller-supplied identifier.
    #[serde(default)]
    pub id: String,
    /// Human-readable expense name.
    #[serde(default)]
    pub label: String,
    /// Monthly amount of the expense.
    #[serde(default = "loose::missing_number", deserialize_with = "loose::number")]
    pub amount: f64,
    /// How the amount is divided.
    #[serde(default)]
    pub allocation_method: AllocationMethod,
}

/// Immutable snapshot of the calculator form handed to the engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionRequest {
    /// Total monthly rent of the unit.
    #[serde(default = "loose::missing_number", deserialize_with = "loose::number")]
    pub total_rent: f64,
    /// Shared floor area in square metres.
    #[serde(default = "loose::missing_number", deserialize_with = "loose::number")]
    pub common_area_m2: f64,
    /// Tenant rows in display order.
    #[serde(default)]
    pub tenants: Vec<TenantInput>,
    /// Variable expenses in display order.
    #[serde(default)]
    pub expenses: Vec<ExpenseInput>,
    /// Tenant count chosen in the UI selector, when it drives the row list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_count: Option<usize>,
}

impl DistributionRequest {
    /// Number of tenant rows the engine should consider.
    pub fn effective_tenant_count(&self) -> usize {
        match self.tenant_count {
            Some(count) => count.min(self.tenants.len()),
            None => self.tenants.len(),
        }
    }
}

/// Severity of a validation diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Blocks the computation.
    Error,
    /// Reported only.
    Warning,
}

/// Stable diagnostic codes emitted by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueCode {
    /// Fewer tenants than the policy allows.
    MinTenants,
    /// More tenants than the policy allows.
    MaxTenants,
    /// Rent is not a positive finite amount.
    RentPositive,
    /// Total private area is zero or not finite.
    PrivateAreaPositive,
    /// Common area is negative.
    CommonAreaNegative,
    /// Common area is infinite.
    CommonAreaFinite,
    /// Row list and effective tenant count disagree.
    TenantRowMismatch,
}

impl IssueCode {
    /// The kebab-case code string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MinTenants => "min-tenants",
            Self::MaxTenants => "max-tenants",
            Self::RentPositive => "rent-positive",
            Self::PrivateAreaPositive => "private-area-positive",
            Self::CommonAreaNegative => "common-area-negative",
            Self::CommonAreaFinite => "common-area-finite",
            Self::TenantRowMismatch => "tenant-row-mismatch",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Stable code of the issue.
    pub id: IssueCode,
    /// Whether the issue blocks computation.
    pub severity: Severity,
    /// Message for display.
    pub message: String,
}

impl ValidationIssue {
    /// Creates an error-level issue.
    pub fn error(id: IssueCode, message: impl Into<String>) -> Self {
        Self { id, severity: Severity::Error, message: message.into() }
    }

    /// Creates a warning-level issue.
    pub fn warning(id: IssueCode, message: impl Into<String>) -> Self {
        Self { id, severity: Severity::Warning, message: message.into() }
    }
}

/// Validator output split by severity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Blocking issues.
    pub errors: Vec<ValidationIssue>,
    /// Non-blocking issues.
    pub warnings: Vec<ValidationIssue>,
    /// `true` when `errors` is empty.
    pub is_valid: bool,
}

impl ValidationReport {
    /// Builds a report from an unsorted issue list.
    pub fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            issues.into_iter().partition(|issue| issue.severity == Severity::Error);
        let is_valid = errors.is_empty();
        Self { errors, warnings, is_valid }
    }

    /// Whether an issue with `code` was reported at any severity.
    pub fn has_issue(&self, code: IssueCode) -> bool {
        self.errors.iter().chain(self.warnings.iter()).any(|issue| issue.id == code)
    }
}

/// A tenant's share of one expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseAllocation {
    /// Id of the expense this share belongs to.
    pub expense_id: String,
    /// Expense label, copied for rendering.
    pub label: String,
    /// Method used for this expense.
    pub allocation_method: AllocationMethod,
    /// The tenant's share.
    pub amount: f64,
}

/// Per-tenant computation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantResult {
    /// Sanitized tenant id.
    pub id: String,
    /// Sanitized display name.
    pub display_name: String,
    /// Sanitized private area.
    pub private_area_m2: f64,
    /// Rent attributable to the private room.
    pub private_rent_share: f64,
    /// Rent attributable to the common area.
    pub common_rent_share: f64,
    /// `private_rent_share + common_rent_share`.
    pub total_rent_share: f64,
    /// One entry per expense, in expense order.
    pub expense_allocations: Vec<ExpenseAllocation>,
    /// Sum of `expense_allocations`.
    pub total_expense_share: f64,
    /// `total_rent_share + total_expense_share`.
    pub total_monthly: f64,
    /// Sanitized solo baseline the savings were computed from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solo_rent_baseline: Option<f64>,
    /// Yearly savings against the solo baseline; absent when no baseline was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_savings: Option<f64>,
}

/// Full engine output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionResult {
    /// Rows in input order.
    pub tenants: Vec<TenantResult>,
    /// Sum of sanitized private areas.
    pub total_private_area_sum: f64,
    /// Factor scaling the combined weights onto the rent.
    pub normalization_factor: f64,
    /// Sum of tenant rent shares.
    pub total_rent_distributed: f64,
    /// Sum of tenant expense shares.
    pub total_expenses_distributed: f64,
    /// Sum of tenant monthly totals.
    pub total_monthly_group: f64,
    /// Diagnostics of this computation.
    pub validation: ValidationReport,
}
