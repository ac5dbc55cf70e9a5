//! Equal Split Rule
//!
//! Every tenant pays the same share of the expense.
//!
//! share = amount / tenant_count
//!
//! Returns 0 when there are no tenants.

use super::{AllocationContext, AllocationRule};
use moonsplit_types::{AllocationMethod, TenantInput};

#[derive(Debug, Default)]
pub struct EqualSplitRule;

impl AllocationRule for EqualSplitRule {
    fn method(&self) -> AllocationMethod {
        AllocationMethod::EqualSplit
    }

    fn share(&self, amount: f64, _tenant: &TenantInput, context: &AllocationContext) -> f64 {
        if context.tenant_count == 0 {
            return 0.0;
        }
        amount / context.tenant_count as f64
    }
}
