use crate::config::ServerConfig;

pub struct AppState {
    pub program: String,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            program: config.program.clone(),
        }
    }
}
