use crate::helpers::TestApp;

#[tokio::test]
async fn should_return_sum_of_operands() {
    let app = TestApp::new().await;

    let cases = [("?a=2&b=3", "5"), ("?a=-1&b=1", "0"), ("?b=10&a=-30", "-20")];
    for (query, expected) in cases {
        let response = app.get_add(query).await;
        assert_eq!(response.status().as_u16(), 200, "query {}", query);
        assert_eq!(response.text().await.unwrap(), expected, "query {}", query);
    }
}

#[tokio::test]
async fn should_wrap_on_overflow() {
    let app = TestApp::new().await;

    let response = app.get_add("?a=2147483647&b=1").await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.json::<i32>().await.unwrap(), i32::MIN);
}

#[tokio::test]
async fn should_return_400_if_operand_missing() {
    let app = TestApp::new().await;

    for query in ["?a=2", "?b=3", ""] {
        let response = app.get_add(query).await;
        assert_eq!(response.status().as_u16(), 400, "query {:?}", query);
    }
}

#[tokio::test]
async fn should_return_400_if_operand_not_an_integer() {
    let app = TestApp::new().await;

    for query in ["?a=two&b=3", "?a=2.5&b=3", "?a=2&b=", "?a=2147483648&b=0"] {
        let response = app.get_add(query).await;
        assert_eq!(response.status().as_u16(), 400, "query {:?}", query);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["status"], 400);
        assert_eq!(body["error"], "Bad Request");
    }
}

#[tokio::test]
async fn repeated_requests_yield_identical_responses() {
    let app = TestApp::new().await;

    let first = app.get_add("?a=40&b=2").await.text().await.unwrap();
    for _ in 0..3 {
        assert_eq!(app.get_add("?a=40&b=2").await.text().await.unwrap(), first);
    }
}
