//! Area Weighted Rule
//!
//! Distributes the expense proportionally to each tenant's private area
//! relative to the total private area.
//!
//! share = amount * (private_area / total_private_area)
//!
//! Returns 0 when the total private area is 0.

use super::{AllocationContext, AllocationRule};
use moonsplit_types::{AllocationMethod, TenantInput};

#[derive(Debug, Default)]
pub struct AreaWeightedRule;

impl AllocationRule for AreaWeightedRule {
    fn method(&self) -> AllocationMethod {
        AllocationMethod::AreaWeighted
    }

    fn share(&self, amount: f64, tenant: &TenantInput, context: &AllocationContext) -> f64 {
        if context.total_private_area <= 0.0 {
            return 0.0;
        }
        (tenant.private_area_m2 / context.total_private_area) * amount
    }
}
