use crate::modules::analytics::models::SalesReport;

/// Placeholder total until the order pipeline feeds real aggregates.
const TOTAL_SALES_PLACEHOLDER: i64 = 105000;

/// Service for generating analytics reports
///
/// Stateless: every call builds a fresh report, so concurrent requests never
/// share mutable state.
#[derive(Debug, Clone, Default)]
pub struct ReportService;

impl ReportService {
    /// Create a new report service
    pub fn new() -> Self {
        Self
    }

    /// Total sales across the platform
    pub fn total_sales(&self) -> SalesReport {
        SalesReport::new(TOTAL_SALES_PLACEHOLDER)
    }
}
