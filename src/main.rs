use std::sync::Arc;

use tokio::sync::RwLock;

use shift_roster::{
    app_state::AppState,
    services::data_stores::{FileSessionStore, InMemoryRosterStore},
    utils::{
        constants::{prod, ROSTER_DATA_DIR},
        tracing::init_tracing,
    },
    Application,
};

#[tokio::main]
async fn main() {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialise tracing");

    let roster_store = Arc::new(RwLock::new(InMemoryRosterStore::default()));
    let session_store = Arc::new(RwLock::new(FileSessionStore::new(
        ROSTER_DATA_DIR.clone(),
    )));

    let app_state = AppState::new(roster_store, session_store);

    let app = Application::build(app_state, prod::APP_ADDRESS)
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
