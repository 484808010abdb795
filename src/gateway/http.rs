//! HTTP implementation of the marketplace gateway.
//!
//! JSON over HTTPS with a global per-request timeout. HTTP 404 maps to
//! the contract's "falsy" outcomes (`None` / empty feed); every other
//! non-2xx status or transport failure becomes `MarketError::Gateway`.

use std::time::Duration;

use ureq::Agent;

use crate::analytics::CreatorAnalytics;
use crate::config::Settings;
use crate::error::{MarketError, MarketResult};
use crate::gateway::MarketplaceGateway;
use crate::post::FeedPost;
use crate::program::ProgramSummary;

pub struct HttpGateway {
    agent: Agent,
    base_url: String,
    api_token: Option<String>,
}

impl HttpGateway {
    pub fn new(base_url: &str, api_token: Option<&str>, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.map(str::to_string),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            &settings.gateway_url,
            settings.api_token.as_deref(),
            Duration::from_secs(settings.timeout_secs),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn auth_header(&self) -> Option<String> {
        self.api_token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, ureq::Error> {
        let mut req = self.agent.get(self.url(path));
        if let Some(auth) = self.auth_header() {
            req = req.header("Authorization", &auth);
        }
        match req.call() {
            Ok(mut resp) => Ok(Some(resp.body_mut().read_json::<T>()?)),
            Err(ureq::Error::StatusCode(404)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, ureq::Error> {
        let mut req = self.agent.post(self.url(path));
        if let Some(auth) = self.auth_header() {
            req = req.header("Authorization", &auth);
        }
        match req.send_json(body) {
            Ok(mut resp) => Ok(Some(resp.body_mut().read_json::<T>()?)),
            Err(ureq::Error::StatusCode(404)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn post_unit<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<(), ureq::Error> {
        let mut req = self.agent.post(self.url(path));
        if let Some(auth) = self.auth_header() {
            req = req.header("Authorization", &auth);
        }
        req.send_json(body)?;
        Ok(())
    }
}

fn gateway_err(op: &str, err: ureq::Error) -> MarketError {
    MarketError::Gateway(format!("{}: {}", op, err))
}

impl MarketplaceGateway for HttpGateway {
    fn resolve_invite(&self, token: &str) -> MarketResult<Option<ProgramSummary>> {
        self.post_json("/invites/resolve", &serde_json::json!({ "token": token }))
            .map_err(|e| gateway_err("resolve_invite", e))
    }

    fn subscribe(&self, program_id: i64) -> MarketResult<()> {
        self.post_unit(
            &format!("/programs/{}/subscribe", program_id),
            &serde_json::json!({}),
        )
        .map_err(|e| gateway_err("subscribe", e))
    }

    fn get_feed(&self, program_id: i64) -> MarketResult<Vec<FeedPost>> {
        let posts = self
            .get_json::<Vec<FeedPost>>(&format!("/programs/{}/feed", program_id))
            .map_err(|e| gateway_err("get_feed", e))?;
        Ok(posts.unwrap_or_default())
    }

    fn post_to_feed(&self, program_id: i64, message: &str) -> MarketResult<()> {
        self.post_unit(
            &format!("/programs/{}/feed", program_id),
            &serde_json::json!({ "message": message }),
        )
        .map_err(|e| gateway_err("post_to_feed", e))
    }

    fn get_analytics(&self) -> MarketResult<Option<CreatorAnalytics>> {
        self.get_json::<CreatorAnalytics>("/creator/analytics")
            .map_err(|e| gateway_err("get_analytics", e))
    }

    fn my_published(&self) -> MarketResult<Vec<ProgramSummary>> {
        let programs = self
            .get_json::<Vec<ProgramSummary>>("/creator/programs")
            .map_err(|e| gateway_err("my_published", e))?;
        Ok(programs.unwrap_or_default())
    }
}
