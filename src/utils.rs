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

use std::time::Duration;
use std::time::Instant;

use tokio::net::TcpStream;
use tokio::time::sleep;

use crate::error::Fallible;
use crate::error::fail;

/// Block until something accepts connections on `host:port`, or give up after
/// `timeout`.
pub async fn wait_for_server(host: &str, port: u16, timeout: Duration) -> Fallible<()> {
    let started = Instant::now();
    loop {
        if let Ok(stream) = TcpStream::connect(format!("{host}:{port}")).await {
            drop(stream);
            return Ok(());
        }
        if started.elapsed() > timeout {
            return fail(format!("server on {host}:{port} did not come up"));
        }
        sleep(Duration::from_millis(1)).await;
    }
}
