use actix_web::{HttpRequest, HttpResponse, web};
use uuid::Uuid;

pub mod command;
pub mod domain;
pub mod page;
pub mod preview;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Body size limit for both endpoints. Long exclude/include lists must
/// still preview, so this sits well above actix-web's defaults.
pub const PAYLOAD_LIMIT: usize = 4 * 1024 * 1024;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().limit(PAYLOAD_LIMIT))
        .app_data(web::JsonConfig::default().limit(PAYLOAD_LIMIT))
        .route("/", web::get().to(page::index))
        .route("/api/preview", web::post().to(preview::preview_form))
        .route("/api/command", web::post().to(command::build));
}

pub async fn not_found(req: HttpRequest) -> HttpResponse {
    log::info!("404 Not Found: {}", req.path());
    HttpResponse::NotFound().body("Not Found")
}

fn new_request_id() -> String {
    Uuid::new_v4().to_string()
}
