//! Plain-text summary of a distribution.
//!
//! The same text is shown on screen, copied to the clipboard and used as the
//! reference layout for exports. It is a pure function of the result: equal
//! inputs always produce byte-identical output.

use crate::currency::CurrencyFormat;
use moonsplit_types::{AllocationMethod, DistributionResult, TenantResult};

pub const SUMMARY_TITLE: &str = "MoOn Split - Rent distribution summary";
pub const SUMMARY_DESCRIPTION: &str =
    "Rent split by private room area plus an equal share of the common area.";

/// Renders distribution results as text with a given currency format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryProjector {
    format: CurrencyFormat,
}

impl SummaryProjector {
    pub fn new(format: CurrencyFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> &CurrencyFormat {
        &self.format
    }

    /// Returns an empty string when the result did not pass validation.
    pub fn project(&self, result: &DistributionResult, common_area_m2: f64) -> String {
        if !result.validation.is_valid {
            return String::new();
        }

        let fmt = &self.format;
        let mut lines = vec![
            SUMMARY_TITLE.to_string(),
            SUMMARY_DESCRIPTION.to_string(),
            String::new(),
            format!("Common area: {}", fmt.format_area(common_area_m2)),
            format!("Rent distributed: {}", fmt.format_amount(result.total_rent_distributed)),
            format!("Variable expenses: {}", fmt.format_amount(result.total_expenses_distributed)),
            format!("Group total: {}", fmt.format_amount(result.total_monthly_group)),
            String::new(),
            "Breakdown per tenant:".to_string(),
        ];

        for (position, tenant) in result.tenants.iter().enumerate() {
            self.push_tenant(&mut lines, position + 1, tenant);
        }

        lines.join("\n")
    }

    fn push_tenant(&self, lines: &mut Vec<String>, ordinal: usize, tenant: &TenantResult) {
        let fmt = &self.format;
        lines.push(format!(
            "{ordinal}. {} ({}): {}/month",
            tenant.display_name,
            fmt.format_area(tenant.private_area_m2),
            fmt.format_amount(tenant.total_monthly),
        ));
        lines.push(format!(
            "   Rent: {} private + {} common",
            fmt.format_amount(tenant.private_rent_share),
            fmt.format_amount(tenant.common_rent_share),
        ));

        if tenant.expense_allocations.is_empty() {
            lines.push("   No variable expenses".to_string());
        }
        for allocation in &tenant.expense_allocations {
            lines.push(format!(
                "   {}: {} ({})",
                allocation.label,
                fmt.format_amount(allocation.amount),
                method_label(allocation.allocation_method),
            ));
        }

        match tenant.annual_savings {
            Some(savings) if savings > 0.0 => {
                lines.push(format!("   Annual savings: {}", fmt.format_amount(savings)));
            }
            Some(_) => lines.push("   No savings vs. living alone".to_string()),
            None => {}
        }
    }
}

pub fn method_label(method: AllocationMethod) -> &'static str {
    match method {
        AllocationMethod::EqualSplit => "equal split",
        AllocationMethod::AreaWeighted => "by private area",
    }
}

/// Projects a result with the default currency format.
pub fn project(result: &DistributionResult, common_area_m2: f64) -> String {
    SummaryProjector::default().project(result, common_area_m2)
}
