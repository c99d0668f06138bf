mod analytics_controller;

pub use analytics_controller::get_total_sales;

// Re-export configure for main.rs
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    analytics_controller::configure(cfg);
}
