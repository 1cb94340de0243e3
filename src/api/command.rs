use actix_web::{HttpResponse, Responder, web};

use super::domain::response::CommandResponse;
use super::{REQUEST_ID_HEADER, new_request_id};
use crate::appstate::appstate::AppState;
use crate::command::{TransferRequest, build_command_for};

pub async fn build(
    state: web::Data<AppState>,
    req: web::Json<TransferRequest>,
) -> impl Responder {
    let request_id = new_request_id();
    let command = build_command_for(&state.program, &req.into_inner());
    log::debug!("[{request_id}] built command: {command}");

    HttpResponse::Ok()
        .insert_header((REQUEST_ID_HEADER, request_id))
        .json(CommandResponse { command })
}
