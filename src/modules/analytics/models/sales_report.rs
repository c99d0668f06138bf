use serde::{Deserialize, Serialize};

/// Aggregate sales report returned by the analytics endpoint
///
/// Amounts are in whole currency units. The report is transient: it is built
/// per request and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesReport {
    pub total_sales: i64,
}

impl SalesReport {
    pub fn new(total_sales: i64) -> Self {
        Self { total_sales }
    }
}
