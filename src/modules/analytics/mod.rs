pub mod controllers;
pub mod models;
pub mod services;

pub use models::SalesReport;
pub use services::ReportService;
