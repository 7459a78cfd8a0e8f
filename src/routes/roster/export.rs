use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
};

use crate::{
    domain::RosterAPIError, services::persistence::serialize_roster,
    utils::constants::EXPORT_FILE_NAME, AppState,
};

/// Serves the current roster as a downloadable `schedule-groups.json`.
#[tracing::instrument(name = "Export roster route handler", skip_all)]
pub async fn export_roster(
    State(state): State<AppState>,
) -> Result<(StatusCode, HeaderMap, String), RosterAPIError> {
    let roster = state.roster_store.read().await.snapshot().await;
    let body = serialize_roster(&roster)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!(
            "attachment; filename=\"{EXPORT_FILE_NAME}\""
        ))
        .map_err(|e| {
            RosterAPIError::UnexpectedError(color_eyre::eyre::eyre!(e))
        })?,
    );

    Ok((StatusCode::OK, headers, body))
}
