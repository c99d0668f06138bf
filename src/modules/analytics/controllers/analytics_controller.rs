use actix_web::{web, HttpResponse};

use crate::modules::analytics::services::ReportService;

/// GET /analytics/total-sales
///
/// Returns the platform-wide sales total. Consumes no request input and
/// performs no I/O; the response is identical for every request.
pub async fn get_total_sales() -> HttpResponse {
    let report = ReportService::new().total_sales();
    HttpResponse::Ok().json(report)
}

/// Configure routes for the analytics module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/analytics").route("/total-sales", web::get().to(get_total_sales)),
    );
}
