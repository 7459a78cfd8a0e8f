use crate::helpers::{
    add_group, add_member, current_roster, get_json_response_body, TestApp,
};
use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn new_member_should_get_default_constraints(app: &mut TestApp) {
    let group_id = add_group(app).await;

    let response = app
        .post_add_member(&json!({ "groupId": group_id }))
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let roster = get_json_response_body(response).await;
    let member = &roster[0]["members"][0];
    assert_eq!(member["name"], "Member 1");
    assert_eq!(member["maxShifts"], 8);
    assert_eq!(member["minShifts"], 6);
    assert_eq!(member["holidayShifts"], 0);
    assert_eq!(member["workingDays"], json!([]));
    assert_eq!(member["nonWorkingDays"], json!([]));
}

#[test_context(TestApp)]
#[tokio::test]
async fn members_should_be_auto_named_per_group(app: &mut TestApp) {
    let first = add_group(app).await;
    let second = add_group(app).await;

    add_member(app, &first).await;
    add_member(app, &first).await;
    add_member(app, &second).await;

    let roster = current_roster(app).await;
    assert_eq!(roster[0]["members"][0]["name"], "Member 1");
    assert_eq!(roster[0]["members"][1]["name"], "Member 2");
    assert_eq!(roster[1]["members"][0]["name"], "Member 1");
}

#[test_context(TestApp)]
#[tokio::test]
async fn add_member_to_unknown_group_should_be_a_silent_noop(
    app: &mut TestApp,
) {
    add_group(app).await;
    let before = current_roster(app).await;

    let response = app
        .post_add_member(
            &json!({ "groupId": "5e90ca28-e1ad-4795-a190-089959c16e0b" }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 201);
    assert_eq!(get_json_response_body(response).await, before);
}

#[test_context(TestApp)]
#[tokio::test]
async fn update_member_should_replace_fields_and_sort_days(
    app: &mut TestApp,
) {
    let group_id = add_group(app).await;
    let member_id = add_member(app, &group_id).await;

    let response = app
        .put_member(
            &group_id,
            &member_id,
            &json!({
                "name": "Mrs Doyle",
                "workingDays": ["2025-03-10", "2025-03-01", "2025-03-10"],
                "nonWorkingDays": ["2025-03-02"],
                "maxShifts": 10,
                "minShifts": 4,
                "holidayShifts": 1
            }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let roster = get_json_response_body(response).await;
    let member = &roster[0]["members"][0];
    assert_eq!(member["id"], member_id);
    assert_eq!(member["name"], "Mrs Doyle");
    assert_eq!(member["workingDays"], json!(["2025-03-01", "2025-03-10"]));
    assert_eq!(member["nonWorkingDays"], json!(["2025-03-02"]));
    assert_eq!(member["maxShifts"], 10);
    assert_eq!(member["minShifts"], 4);
    assert_eq!(member["holidayShifts"], 1);
}

#[test_context(TestApp)]
#[tokio::test]
async fn update_member_with_unknown_ids_should_be_a_silent_noop(
    app: &mut TestApp,
) {
    let group_id = add_group(app).await;
    add_member(app, &group_id).await;
    let before = current_roster(app).await;

    let body = json!({
        "name": "ghost",
        "workingDays": [],
        "nonWorkingDays": [],
        "maxShifts": 8,
        "minShifts": 6,
        "holidayShifts": 0
    });

    let response = app
        .put_member(
            "5e90ca28-e1ad-4795-a190-089959c16e0b",
            "6e90ca28-e1ad-4795-a190-089959c16e0b",
            &body,
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(get_json_response_body(response).await, before);
}

#[test_context(TestApp)]
#[tokio::test]
async fn update_member_should_reject_invalid_numbers(app: &mut TestApp) {
    let group_id = add_group(app).await;
    let member_id = add_member(app, &group_id).await;

    let test_cases = [
        json!({
            "name": "x",
            "maxShifts": -1,
            "minShifts": 6,
            "holidayShifts": 0
        }),
        json!({
            "name": "x",
            "maxShifts": "eight",
            "minShifts": 6,
            "holidayShifts": 0
        }),
    ];

    for test_case in test_cases.iter() {
        let response =
            app.put_member(&group_id, &member_id, &test_case).await;
        assert_eq!(
            response.status().as_u16(),
            422,
            "Failed for input: {:?}",
            test_case
        );
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn delete_member_should_remove_only_that_member(app: &mut TestApp) {
    let group_id = add_group(app).await;
    let first = add_member(app, &group_id).await;
    add_member(app, &group_id).await;

    let response = app.delete_member(&group_id, &first).await;
    assert_eq!(response.status().as_u16(), 200);

    let roster = get_json_response_body(response).await;
    let members = roster[0]["members"].as_array().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["name"], "Member 2");
}

#[test_context(TestApp)]
#[tokio::test]
async fn delete_member_with_unknown_ids_should_be_a_silent_noop(
    app: &mut TestApp,
) {
    let group_id = add_group(app).await;
    add_member(app, &group_id).await;
    let before = current_roster(app).await;

    let response = app
        .delete_member(&group_id, "6e90ca28-e1ad-4795-a190-089959c16e0b")
        .await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(get_json_response_body(response).await, before);
}
