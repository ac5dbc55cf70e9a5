//! Expense allocation rules provided by the engine.

use moonsplit_types::{AllocationMethod, TenantInput};

pub mod area_weighted;
pub mod equal_split;

pub use area_weighted::AreaWeightedRule;
pub use equal_split::EqualSplitRule;

/// Group-level figures an allocation rule may need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationContext {
    /// Number of effective tenants.
    pub tenant_count: usize,
    /// Sum of sanitized private areas.
    pub total_private_area: f64,
}

/// A rule dividing one expense amount among tenants.
/// Rules are stateless and thread-safe.
pub trait AllocationRule: Send + Sync {
    /// The method this rule implements.
    fn method(&self) -> AllocationMethod;

    /// The share of `amount` owed by `tenant`.
    fn share(&self, amount: f64, tenant: &TenantInput, context: &AllocationContext) -> f64;
}

/// Looks up the built-in rule for `method`.
pub fn rule_for(method: AllocationMethod) -> &'static dyn AllocationRule {
    match method {
        AllocationMethod::EqualSplit => &EqualSplitRule,
        AllocationMethod::AreaWeighted => &AreaWeightedRule,
    }
}
