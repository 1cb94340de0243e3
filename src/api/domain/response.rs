use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub command: String,
}
