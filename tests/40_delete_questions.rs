mod common;

use anyhow::Result;
use prepx_admin_api::database::store::QuestionStore;
use reqwest::StatusCode;

fn delete_url(base_url: &str, password: &str, ids: &str) -> String {
    format!(
        "{}/api/admin/delete-questions?password={}&ids={}",
        base_url, password, ids
    )
}

#[tokio::test]
async fn delete_with_wrong_password_is_forbidden() -> Result<()> {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();

    let res = client
        .delete(delete_url(&app.base_url, "wrong", "1,2"))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        res.text().await?,
        "Error: Unauthorized access. Invalid admin password."
    );
    Ok(())
}

#[tokio::test]
async fn delete_with_empty_id_list_is_rejected() -> Result<()> {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();

    let res = client
        .delete(delete_url(&app.base_url, common::ADMIN_PASSWORD, ""))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.text().await?, "Error: No question IDs provided.");

    // Same when the parameter is missing entirely
    let res = client
        .delete(format!(
            "{}/api/admin/delete-questions?password={}",
            app.base_url,
            common::ADMIN_PASSWORD
        ))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.text().await?, "Error: No question IDs provided.");
    Ok(())
}

#[tokio::test]
async fn deletes_existing_ids_and_ignores_unknown_ones() -> Result<()> {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();

    app.store
        .insert_all(vec![
            common::sample_question("one"),
            common::sample_question("two"),
            common::sample_question("three"),
        ])
        .await?;

    // ids 1 and 3 exist, 999 does not
    let res = client
        .delete(delete_url(&app.base_url, common::ADMIN_PASSWORD, "1,3,999"))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await?, "Questions deleted successfully!");

    let remaining = app.store.list_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].question_text, "two");
    Ok(())
}

#[tokio::test]
async fn duplicate_ids_are_passed_through() -> Result<()> {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();

    app.store
        .insert_all(vec![common::sample_question("one")])
        .await?;

    let res = client
        .delete(delete_url(&app.base_url, common::ADMIN_PASSWORD, "1,1"))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(app.store.list_all().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn non_numeric_ids_are_rejected() -> Result<()> {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();

    let res = client
        .delete(delete_url(&app.base_url, common::ADMIN_PASSWORD, "1,abc"))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
