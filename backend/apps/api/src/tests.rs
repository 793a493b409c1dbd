//! Router tests for the API

#[cfg(test)]
mod handler_tests {
    use crate::api_router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn body_json(resp: Response) -> Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_users(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/users")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let resp = api_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["message"], "API is running 🚀");
    }

    #[tokio::test]
    async fn valid_user_returns_200_with_data() {
        let req = post_users(r#"{"name":"John Doe","email":"john@example.com","age":25}"#);
        let resp = api_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "User validated successfully ✅");
        assert_eq!(
            body["data"],
            json!({"name": "John Doe", "email": "john@example.com", "age": 25})
        );
    }

    #[tokio::test]
    async fn extra_fields_are_stripped_from_data() {
        let req = post_users(r#"{"name":"Ann","email":"ann@example.com","admin":true}"#);
        let resp = api_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["data"], json!({"name": "Ann", "email": "ann@example.com"}));
    }

    #[tokio::test]
    async fn invalid_user_returns_400_with_field_errors() {
        let req = post_users(r#"{"name":"J","email":"not-an-email","age":-5}"#);
        let resp = api_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "success": false,
                "errors": {
                    "name": ["Name must be at least 2 characters"],
                    "email": ["Invalid email address"],
                    "age": ["Age must be a positive number"]
                }
            })
        );
    }

    #[tokio::test]
    async fn empty_object_reports_required_fields() {
        let resp = api_router().oneshot(post_users("{}")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = body_json(resp).await;
        assert_eq!(body["errors"], json!({"name": ["Required"], "email": ["Required"]}));
        assert!(body.get("formErrors").is_none());
    }

    #[tokio::test]
    async fn non_object_body_reports_form_error() {
        let resp = api_router().oneshot(post_users("[1,2,3]")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["errors"], json!({}));
        assert_eq!(body["formErrors"], json!(["Expected object, received array"]));
    }

    #[tokio::test]
    async fn malformed_json_returns_problem_document() {
        let resp = api_router()
            .oneshot(post_users(r#"{"name": "#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/problem+json"
        );

        let body = body_json(resp).await;
        assert_eq!(body["status"], 400);
        assert_eq!(body["title"], "Bad Request");
    }

    #[tokio::test]
    async fn missing_content_type_returns_415() {
        let req = Request::builder()
            .method("POST")
            .uri("/users")
            .body(Body::from(r#"{"name":"Ann","email":"ann@example.com"}"#))
            .unwrap();
        let resp = api_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let req = Request::builder()
            .uri("/nope")
            .body(Body::empty())
            .unwrap();
        let resp = api_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = body_json(resp).await;
        assert_eq!(body["detail"], "No route for GET /nope");
    }

    #[tokio::test]
    async fn same_body_twice_gives_same_response() {
        let raw = r#"{"name":"J","email":"x","age":1.5}"#;
        let first = body_json(api_router().oneshot(post_users(raw)).await.unwrap()).await;
        let second = body_json(api_router().oneshot(post_users(raw)).await.unwrap()).await;
        assert_eq!(first, second);
        assert_eq!(first["errors"]["age"], json!(["Age must be a whole number"]));
    }
}

#[cfg(test)]
mod cors_tests {
    use crate::{api_router, cors_layer};
    use axum::body::Body;
    use axum::http::{Request, header};
    use tower::ServiceExt;

    #[tokio::test]
    async fn allowed_origin_is_echoed() {
        let app = api_router().layer(cors_layer(&["http://localhost:3000".to_string()]));
        let req = Request::builder()
            .uri("/")
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "http://localhost:3000"
        );
    }

    #[tokio::test]
    async fn invalid_origins_are_skipped() {
        let app = api_router().layer(cors_layer(&["bad\norigin".to_string()]));
        let req = Request::builder()
            .uri("/")
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
