//! Mock backend server for testing
//!
//! Wraps a wiremock server with convenience mounts for the plan,
//! profile and invitation endpoints the core talks to.

use serde_json::Value;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use quedada_core::{ServiceFactory, Settings};

/// Mock backend for the Quedada store of record
pub struct BackendMock {
    pub server: MockServer,
}

impl BackendMock {
    /// Start a fresh mock backend
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Settings pointed at this mock, with retries disabled so request
    /// counts stay deterministic
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        settings.api.base_url = self.server.uri();
        settings.api.max_retries = 0;
        settings.api.retry_backoff_ms = 10;
        settings.verification.api_url = self.server.uri();
        settings.images.upload_url = format!("{}/upload", self.server.uri());
        settings
    }

    /// A service factory wired against this mock
    pub fn factory(&self) -> ServiceFactory {
        ServiceFactory::new(self.settings()).expect("factory from mock settings")
    }

    /// Mount `GET /plans?status=active` returning the given records
    pub async fn mount_active_plans(&self, plans: Vec<Value>) {
        Mock::given(method("GET"))
            .and(path("/plans"))
            .and(query_param("status", "active"))
            .respond_with(ResponseTemplate::new(200).set_body_json(plans))
            .mount(&self.server)
            .await;
    }

    /// Mount a participant update that echoes the requested participant
    /// list back inside `template`, as the real backend does on success
    pub async fn mount_set_participants(&self, plan_id: i64, template: Value) {
        Mock::given(method("PUT"))
            .and(path(format!("/plans/{}/participants", plan_id)))
            .respond_with(EchoParticipants { template })
            .mount(&self.server)
            .await;
    }

    /// Mount a participant update that fails with the given status
    pub async fn mount_set_participants_failure(&self, plan_id: i64, status: u16) {
        Mock::given(method("PUT"))
            .and(path(format!("/plans/{}/participants", plan_id)))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Mount `GET /plans/{id}` returning the given record
    pub async fn mount_plan(&self, plan_id: i64, plan: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/plans/{}", plan_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(plan))
            .mount(&self.server)
            .await;
    }
}

/// Responds to a conditional participant update by copying the requested
/// participant list into the plan template
struct EchoParticipants {
    template: Value,
}

impl Respond for EchoParticipants {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = match serde_json::from_slice(&request.body) {
            Ok(body) => body,
            Err(_) => return ResponseTemplate::new(400),
        };

        let mut plan = self.template.clone();
        plan["participants"] = body["participants"].clone();
        ResponseTemplate::new(200).set_body_json(plan)
    }
}
