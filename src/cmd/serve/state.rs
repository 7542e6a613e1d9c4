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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use cardstyle_core::TinyRng;
use cardstyle_core::format_raw_text;

#[derive(Clone)]
pub struct ServerState {
    /// Shared generator, present only when the server was started with a
    /// seed. Otherwise every request uses its thread's own generator.
    seeded: Option<Arc<Mutex<TinyRng>>>,
}

impl ServerState {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            seeded: seed.map(|seed| Arc::new(Mutex::new(TinyRng::from_seed(seed)))),
        }
    }

    /// Format raw card text into the fenced, styled output.
    pub fn format(&self, raw: &str) -> String {
        match &self.seeded {
            Some(rng) => {
                let mut rng = rng.lock().unwrap_or_else(PoisonError::into_inner);
                format_raw_text(raw, &mut *rng)
            }
            None => format_raw_text(raw, &mut rand::thread_rng()),
        }
    }
}
