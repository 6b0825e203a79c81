#![allow(dead_code)]

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use planner_api::config::AppConfig;
use planner_api::database::Repositories;
use planner_api::domain::{Token, Username};
use planner_api::{app, AppState};

pub const TOKEN_HEADER: &str = "Token";

/// An in-process server over fresh in-memory stores
pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
    state: AppState,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        let config = AppConfig::default();
        let state = AppState::new(Repositories::in_memory(), &config);
        let router = app(state.clone(), &config);

        // Port 0 lets the OS pick a free port for isolation
        let listener = TcpListener::bind("127.0.0.1:0").await.context("failed to bind test listener")?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            client: reqwest::Client::new(),
            state,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Register a session token for `username` directly in the store
    pub async fn grant(&self, username: &str, token: &str) -> Result<()> {
        self.state
            .auth
            .grant(Username::new(username)?, Token::new(token))
            .await?;
        Ok(())
    }

    pub fn get(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.client.get(self.url(path)).header(TOKEN_HEADER, token)
    }

    pub fn post(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.client.post(self.url(path)).header(TOKEN_HEADER, token)
    }

    pub fn put(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.client.put(self.url(path)).header(TOKEN_HEADER, token)
    }

    pub fn delete(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.client.delete(self.url(path)).header(TOKEN_HEADER, token)
    }
}
