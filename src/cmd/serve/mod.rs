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

mod process;
pub mod server;
mod state;

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use portpicker::pick_unused_port;
    use reqwest::StatusCode;
    use serde_json::Value;
    use serde_json::json;
    use tokio::net::TcpListener;
    use tokio::spawn;

    use crate::cmd::serve::process::ProcessResponse;
    use crate::cmd::serve::server::ServerConfig;
    use crate::cmd::serve::server::start_server;
    use crate::error::Fallible;
    use crate::utils::wait_for_server;

    const TEST_HOST: &str = "127.0.0.1";

    /// Start a server on a free port and return its base URL.
    async fn spawn_server(seed: Option<u64>) -> Fallible<String> {
        let port = pick_unused_port().unwrap();
        let config = ServerConfig {
            host: TEST_HOST.to_string(),
            port,
            seed,
        };
        spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port, Duration::from_secs(10)).await?;
        Ok(format!("http://{TEST_HOST}:{port}"))
    }

    async fn post_process(base: &str, body: Value) -> Fallible<String> {
        let response = reqwest::Client::new()
            .post(format!("{base}/process"))
            .json(&body)
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::OK);
        let response: ProcessResponse = response.json().await?;
        Ok(response.processed_text)
    }

    #[tokio::test]
    async fn test_e2e() -> Fallible<()> {
        let base = spawn_server(None).await?;
        let raw = "**Hi** there\n\n{{c1::X}} foo.<br><br>{{c2::Y}} bar.";
        let text = post_process(&base, json!({ "raw_text": raw })).await?;

        assert!(text.starts_with("```\n"));
        assert!(text.ends_with("\n```"));
        let cards: Vec<&str> = text
            .trim_start_matches("```\n")
            .trim_end_matches("\n```")
            .lines()
            .collect();
        assert_eq!(cards.len(), 2);
        assert!(cards[0].starts_with("<span style=\"color: #"));
        assert!(cards[0].ends_with("\"><b>Hi</b> there</span>"));
        assert!(cards[1].ends_with("\">X foo.<br><br>{{c1::Y}} bar.</span>"));
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_raw_text() -> Fallible<()> {
        let base = spawn_server(None).await?;
        let text = post_process(&base, json!({})).await?;
        assert_eq!(text, "```\n\n```");
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_raw_text() -> Fallible<()> {
        let base = spawn_server(None).await?;
        let text = post_process(&base, json!({ "raw_text": "" })).await?;
        assert_eq!(text, "```\n\n```");
        Ok(())
    }

    #[tokio::test]
    async fn test_seeded_servers_agree() -> Fallible<()> {
        let a = spawn_server(Some(1234)).await?;
        let b = spawn_server(Some(1234)).await?;
        let body = json!({ "raw_text": "one\n\ntwo\n\nthree" });
        let from_a = post_process(&a, body.clone()).await?;
        let from_b = post_process(&b, body).await?;
        assert_eq!(from_a, from_b);
        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() -> Fallible<()> {
        let base = spawn_server(None).await?;
        let response = reqwest::Client::new()
            .post(format!("{base}/process"))
            .header("content-type", "application/json")
            .body("{not json")
            .send()
            .await?;
        assert!(response.status().is_client_error());
        Ok(())
    }

    #[tokio::test]
    async fn test_port_in_use() -> Fallible<()> {
        let taken = TcpListener::bind(format!("{TEST_HOST}:0")).await?;
        let config = ServerConfig {
            host: TEST_HOST.to_string(),
            port: taken.local_addr()?.port(),
            seed: None,
        };
        let result = start_server(config).await;
        let err = result.err().unwrap();
        assert!(err.to_string().starts_with("error: failed to bind"));
        Ok(())
    }

    #[tokio::test]
    async fn test_not_found() -> Fallible<()> {
        let base = spawn_server(None).await?;
        let response = reqwest::get(format!("{base}/nope")).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_process_not_allowed() -> Fallible<()> {
        let base = spawn_server(None).await?;
        let response = reqwest::get(format!("{base}/process")).await?;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        Ok(())
    }
}
