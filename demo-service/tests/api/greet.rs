use crate::helpers::TestApp;

#[tokio::test]
async fn greet_returns_hello_world() {
    let app = TestApp::new().await;

    let response = app.get_greet().await;

    assert_eq!(response.status().as_u16(), 200);
    let content_type = response.headers()[reqwest::header::CONTENT_TYPE].to_str().unwrap().to_owned();
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(response.text().await.unwrap(), "Hello, World!");
}

#[tokio::test]
async fn greet_is_idempotent() {
    let app = TestApp::new().await;

    for _ in 0..3 {
        let response = app.get_greet().await;
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(response.text().await.unwrap(), "Hello, World!");
    }
}

#[tokio::test]
async fn greet_rejects_post() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/greet", &app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 405);
}
