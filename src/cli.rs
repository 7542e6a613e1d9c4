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

use clap::Parser;

use crate::cmd::format::format_cards;
use crate::cmd::serve::server::ServerConfig;
use crate::cmd::serve::server::start_server;
use crate::error::Fallible;

#[derive(Parser, Debug, PartialEq)]
#[command(version, about, long_about = None)]
enum Command {
    /// Serve the formatting endpoint over HTTP.
    Serve {
        /// The host address to bind to. Default is all interfaces.
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        /// The port to listen on. Falls back to the PORT environment variable, then 8000.
        #[arg(long, env = "PORT", default_value_t = 8000)]
        port: u16,
        /// Seed the style generator so output is reproducible.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Format cards from a file and print the result.
    Format {
        /// Path to the input file. By default, standard input is read.
        input: Option<String>,
        /// Seed the style generator so output is reproducible.
        #[arg(long)]
        seed: Option<u64>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Serve { host, port, seed } => {
            let config = ServerConfig { host, port, seed };
            start_server(config).await
        }
        Command::Format { input, seed } => format_cards(input, seed),
    }
}
