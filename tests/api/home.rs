use crate::helpers::spawn_app;

/// The landing page renders idle: hero copy and the signup form, but no
/// outcome message yet
#[tokio::test]
async fn home_serves_the_landing_page() {
    let app = spawn_app().await;

    let resp = app.get_home().await;
    assert!(resp.status().is_success());
    assert!(resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let body = resp.text().await.unwrap();
    assert!(body.contains("Blaze toward the stars"));
    assert!(body.contains(r#"action="/waitlist""#));
    assert!(body.contains("Orbital Luxury"));
    assert!(body.contains("NovaVoyage. All rights reserved."));
    // no submission has happened, so no status line
    assert!(!body.contains(r#"class="status"#));
}

/// The email input starts out empty
#[tokio::test]
async fn home_renders_an_empty_email_field() {
    let app = spawn_app().await;

    let body = app.get_home().await.text().await.unwrap();

    assert!(body.contains(r#"value="""#));
}
