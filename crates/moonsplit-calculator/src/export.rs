//! CSV and printable-table exports.
//!
//! Both renderings read the same rounded figures, so a CSV and a printout of
//! one result always agree with each other.

use crate::currency::{CurrencyFormat, plain_cents, plain_decimal};
use crate::error::{SplitError, SplitResult};
use crate::rounding::{
    RoundedDistribution, RoundingMode, redistribute_cents, round_per_value, sum_cents,
};
use moonsplit_types::DistributionResult;
use tracing::debug;

pub const CSV_HEADER: [&str; 8] = [
    "tenant",
    "private_area_m2",
    "private_rent",
    "common_rent",
    "total_rent",
    "expenses",
    "total_monthly",
    "annual_savings",
];

const TABLE_HEADER: [&str; 8] =
    ["Tenant", "Area", "Private rent", "Common rent", "Rent", "Expenses", "Monthly", "Annual savings"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exporter {
    format: CurrencyFormat,
    rounding: RoundingMode,
}

impl Exporter {
    /// Create an exporter rendering amounts with `format`.
    pub fn new(format: CurrencyFormat, rounding: RoundingMode) -> Self {
        Self { format, rounding }
    }

    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    fn rounded(&self, result: &DistributionResult, common_area_m2: f64) -> SplitResult<RoundedDistribution> {
        if !result.validation.is_valid {
            return Err(SplitError::InvalidDistribution { errors: result.validation.errors.len() });
        }
        match self.rounding {
            RoundingMode::PerValue => round_per_value(result),
            RoundingMode::LargestShareAbsorbs => redistribute_cents(result, common_area_m2),
        }
    }

    /// Comma-separated export with one row per tenant and a final `TOTAL` row.
    pub fn csv(&self, result: &DistributionResult, common_area_m2: f64) -> SplitResult<String> {
        let rounded = self.rounded(result, common_area_m2)?;
        let private_total = sum_cents(rounded.tenants.iter().map(|t| t.private_rent_cents))?;
        let common_total = sum_cents(rounded.tenants.iter().map(|t| t.common_rent_cents))?;
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(CSV_HEADER)?;

        for (share, tenant) in rounded.tenants.iter().zip(&result.tenants) {
            writer.write_record([
                share.display_name.clone(),
                plain_decimal(tenant.private_area_m2),
                plain_cents(share.private_rent_cents),
                plain_cents(share.common_rent_cents),
                plain_cents(share.rent_cents),
                plain_cents(share.expense_cents),
                plain_cents(share.monthly_cents),
                share.annual_savings_cents.map(plain_cents).unwrap_or_default(),
            ])?;
        }

        writer.write_record([
            "TOTAL".to_string(),
            plain_decimal(result.total_private_area_sum),
            plain_cents(private_total),
            plain_cents(common_total),
            plain_cents(rounded.rent_cents),
            plain_cents(rounded.expense_cents),
            plain_cents(rounded.monthly_cents),
            String::new(),
        ])?;

        let bytes = writer.into_inner().map_err(|err| SplitError::export("csv", err.to_string()))?;
        let text = String::from_utf8(bytes).map_err(|err| SplitError::export("csv", err.to_string()))?;
        debug!(rows = rounded.tenants.len(), bytes = text.len(), "CSV export rendered");
        Ok(text)
    }

    /// Fixed-width table for printing.
    pub fn table(&self, result: &DistributionResult, common_area_m2: f64) -> SplitResult<String> {
        let rounded = self.rounded(result, common_area_m2)?;
        let private_total = sum_cents(rounded.tenants.iter().map(|t| t.private_rent_cents))?;
        let common_total = sum_cents(rounded.tenants.iter().map(|t| t.common_rent_cents))?;
        let fmt = &self.format;

        let mut rows: Vec<Vec<String>> = rounded
            .tenants
            .iter()
            .zip(&result.tenants)
            .map(|(share, tenant)| {
                vec![
                    share.display_name.clone(),
                    fmt.format_area(tenant.private_area_m2),
                    fmt.format_cents(share.private_rent_cents),
                    fmt.format_cents(share.common_rent_cents),
                    fmt.format_cents(share.rent_cents),
                    fmt.format_cents(share.expense_cents),
                    fmt.format_cents(share.monthly_cents),
                    share
                        .annual_savings_cents
                        .map(|cents| fmt.format_cents(cents))
                        .unwrap_or_else(|| "-".to_string()),
                ]
            })
            .collect();
        let total = vec![
            "TOTAL".to_string(),
            fmt.format_area(result.total_private_area_sum),
            fmt.format_cents(private_total),
            fmt.format_cents(common_total),
            fmt.format_cents(rounded.rent_cents),
            fmt.format_cents(rounded.expense_cents),
            fmt.format_cents(rounded.monthly_cents),
            String::new(),
        ];

        let header: Vec<String> = TABLE_HEADER.iter().map(|h| h.to_string()).collect();
        let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
        for row in rows.iter().chain(std::iter::once(&total)) {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        let separator =
            widths.iter().map(|w| "-".repeat(w + 2)).collect::<Vec<_>>().join("+");

        let mut lines = vec![render_row(&header, &widths), separator.clone()];
        lines.extend(rows.drain(..).map(|row| render_row(&row, &widths)));
        lines.push(separator);
        lines.push(render_row(&total, &widths));
        Ok(lines.join("\n"))
    }
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(column, (cell, width))| {
            if column == 0 { format!(" {cell:<width$} ") } else { format!(" {cell:>width$} ") }
        })
        .collect::<Vec<_>>()
        .join("|")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_row_alignment() {
        let cells = vec!["Ana".to_string(), "12,00 m²".to_string()];
        assert_eq!(render_row(&cells, &[6, 9]), " Ana    |  12,00 m²");
    }
}
