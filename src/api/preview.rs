use actix_web::{HttpResponse, Responder, web};

use super::{REQUEST_ID_HEADER, new_request_id};
use crate::appstate::appstate::AppState;
use crate::form::{self, Origin};

/// Name of the form field carrying the name of the field that changed.
pub const ORIGIN_FIELD: &str = "origin";

pub async fn preview_form(
    state: web::Data<AppState>,
    fields: web::Form<Vec<(String, String)>>,
) -> impl Responder {
    let pairs = fields.into_inner();
    let origin = Origin::from_field_name(
        pairs
            .iter()
            .rev()
            .find(|(name, _)| name == ORIGIN_FIELD)
            .map(|(_, value)| value.as_str()),
    );

    let request_id = new_request_id();
    let preview = form::preview(pairs, origin, &state.program);
    log::debug!("[{request_id}] {origin:?} preview: {}", preview.command);

    HttpResponse::Ok()
        .insert_header((REQUEST_ID_HEADER, request_id))
        .json(preview)
}
