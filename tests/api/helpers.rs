use reqwest::Response;
use serde_json::Value;
use shift_roster::{
    app_state::{AppState, RosterStoreType, SessionStoreType},
    services::data_stores::{HashmapSessionStore, InMemoryRosterStore},
    utils::constants::test,
    Application,
};
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::sync::RwLock;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub roster_store: RosterStoreType,
    pub session_store: SessionStoreType,
}

impl TestApp {
    pub async fn new() -> Self {
        let roster_store: RosterStoreType =
            Arc::new(RwLock::new(InMemoryRosterStore::default()));
        let session_store: SessionStoreType =
            Arc::new(RwLock::new(HashmapSessionStore::default()));

        let app_state =
            AppState::new(roster_store.clone(), session_store.clone());

        let app = Application::build(app_state, test::APP_ADDRESS)
            .await
            .expect("Failed to build app");
        let address = format!("http://{}", app.address.clone());

        #[allow(clippy::let_underscore_future)]
        let _ = tokio::spawn(app.run());

        let http_client = reqwest::Client::new();

        Self {
            address,
            http_client,
            roster_store,
            session_store,
        }
    }

    pub async fn post_new_group(&self) -> Response {
        self.http_client
            .post(format!("{}/groups/new", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_group_list(&self) -> Response {
        self.http_client
            .get(format!("{}/groups/list", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn put_group<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .put(format!("{}/groups/update", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_group(&self, group_id: &str) -> Response {
        self.http_client
            .delete(format!(
                "{}/groups/delete?groupId={}",
                &self.address, group_id
            ))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_add_member<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/groups/add-member", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn put_member<Body>(
        &self,
        group_id: &str,
        member_id: &str,
        body: &Body,
    ) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .put(format!(
                "{}/groups/update-member?groupId={}&memberId={}",
                &self.address, group_id, member_id
            ))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_member(
        &self,
        group_id: &str,
        member_id: &str,
    ) -> Response {
        self.http_client
            .delete(format!(
                "{}/groups/delete-member?groupId={}&memberId={}",
                &self.address, group_id, member_id
            ))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_move_member<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/groups/move-member", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_save(&self) -> Response {
        self.http_client
            .post(format!("{}/roster/save", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_load(&self) -> Response {
        self.http_client
            .get(format!("{}/roster/load", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_export(&self) -> Response {
        self.http_client
            .get(format!("{}/roster/export", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_import(&self, body: String) -> Response {
        self.http_client
            .post(format!("{}/roster/import", &self.address))
            .body(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_generate(&self) -> Response {
        self.http_client
            .post(format!("{}/schedule/generate", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

impl AsyncTestContext for TestApp {
    async fn setup() -> TestApp {
        TestApp::new().await
    }

    async fn teardown(self) {}
}

pub async fn get_json_response_body(response: Response) -> Value {
    let body: Value = response
        .json()
        .await
        .expect("failed to parse response body JSON");
    body
}

/// Adds a group and returns the new group's id.
pub async fn add_group(app: &mut TestApp) -> String {
    let response = app.post_new_group().await;
    assert_eq!(response.status().as_u16(), 201, "Failed to add group");

    let roster = get_json_response_body(response).await;
    roster
        .as_array()
        .and_then(|groups| groups.last())
        .and_then(|group| group["id"].as_str())
        .expect("Failed to read new group id from roster")
        .to_owned()
}

/// Adds a member to the given group and returns the new member's id.
pub async fn add_member(app: &mut TestApp, group_id: &str) -> String {
    let response = app
        .post_add_member(&serde_json::json!({ "groupId": group_id }))
        .await;
    assert_eq!(response.status().as_u16(), 201, "Failed to add member");

    let roster = get_json_response_body(response).await;
    roster
        .as_array()
        .and_then(|groups| {
            groups.iter().find(|g| g["id"].as_str() == Some(group_id))
        })
        .and_then(|group| group["members"].as_array())
        .and_then(|members| members.last())
        .and_then(|member| member["id"].as_str())
        .expect("Failed to read new member id from roster")
        .to_owned()
}

/// The roster as the list endpoint currently reports it.
pub async fn current_roster(app: &TestApp) -> Value {
    let response = app.get_group_list().await;
    assert_eq!(response.status().as_u16(), 200);
    get_json_response_body(response).await
}
