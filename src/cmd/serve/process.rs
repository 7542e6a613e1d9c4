// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde::Serialize;

use crate::cmd::serve::state::ServerState;

#[derive(Debug, Deserialize, Serialize)]
pub struct ProcessRequest {
    #[serde(default)]
    pub raw_text: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ProcessResponse {
    pub processed_text: String,
}

pub async fn process_handler(
    State(state): State<ServerState>,
    Json(request): Json<ProcessRequest>,
) -> Json<ProcessResponse> {
    log::debug!("POST /process ({} bytes)", request.raw_text.len());
    let processed_text = state.format(&request.raw_text);
    Json(ProcessResponse { processed_text })
}
