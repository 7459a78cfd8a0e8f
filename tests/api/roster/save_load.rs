use crate::helpers::{
    add_group, add_member, current_roster, get_json_response_body, TestApp,
};
use shift_roster::ErrorResponse;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn load_without_a_save_should_return_404(app: &mut TestApp) {
    let response = app.get_load().await;
    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(
        response
            .json::<ErrorResponse>()
            .await
            .expect("Could not deserialise response body to ErrorResponse")
            .error,
        "No saved roster"
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn save_then_load_should_round_trip(app: &mut TestApp) {
    let group_id = add_group(app).await;
    add_member(app, &group_id).await;
    let saved = current_roster(app).await;

    let response = app.post_save().await;
    assert_eq!(response.status().as_u16(), 200);

    let response = app.get_load().await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(get_json_response_body(response).await, saved);
}

#[test_context(TestApp)]
#[tokio::test]
async fn load_should_discard_changes_made_after_the_save(app: &mut TestApp) {
    let group_id = add_group(app).await;
    let saved = current_roster(app).await;

    assert_eq!(app.post_save().await.status().as_u16(), 200);

    // mutate after saving
    add_member(app, &group_id).await;
    add_group(app).await;
    assert_ne!(current_roster(app).await, saved);

    let response = app.get_load().await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(get_json_response_body(response).await, saved);
    assert_eq!(current_roster(app).await, saved);
}

#[test_context(TestApp)]
#[tokio::test]
async fn saving_is_explicit_not_automatic(app: &mut TestApp) {
    add_group(app).await;
    assert_eq!(app.post_save().await.status().as_u16(), 200);
    let saved = current_roster(app).await;

    // a later mutation must not leak into the session store
    add_group(app).await;

    let response = app.get_load().await;
    assert_eq!(get_json_response_body(response).await, saved);
}
