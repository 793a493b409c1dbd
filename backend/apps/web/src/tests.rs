//! Router tests for the demo page

#[cfg(test)]
mod page_tests {
    use crate::web_router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn body_text(resp: Response) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn get(uri: &str) -> Response {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        web_router().oneshot(req).await.unwrap()
    }

    #[tokio::test]
    async fn page_renders_without_result() {
        let resp = get("/").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(
            resp.headers()
                .get(header::CONTENT_TYPE)
                .unwrap()
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
        let html = body_text(resp).await;
        assert!(html.contains("Shared Validator Demo"));
        assert!(!html.contains("<pre"));
    }

    #[tokio::test]
    async fn valid_sample_renders_success() {
        let html = body_text(get("/?sample=valid").await).await;
        assert!(html.contains("result success"));
        assert!(html.contains("&quot;Valid User&quot; is valid!"));
        assert!(html.contains("&quot;john@example.com&quot;"));
    }

    #[tokio::test]
    async fn invalid_sample_renders_failure() {
        let html = body_text(get("/?sample=invalid").await).await;
        assert!(html.contains("result failure"));
        assert!(html.contains("Name must be at least 2 characters"));
        assert!(html.contains("Invalid email address"));
        assert!(html.contains("Age must be a positive number"));
    }

    #[tokio::test]
    async fn unknown_sample_renders_plain_page() {
        let resp = get("/?sample=other").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(!body_text(resp).await.contains("<pre"));
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let resp = get("/missing").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
