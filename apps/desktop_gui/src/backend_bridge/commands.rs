//! Backend commands queued from UI to backend worker.

use shared::{domain::RequestMode, protocol::WorldRequest};

#[derive(Debug)]
pub enum BackendCommand {
    GenerateWorld {
        mode: RequestMode,
        request: WorldRequest,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::GenerateWorld { .. } => "generate_world",
        }
    }
}
