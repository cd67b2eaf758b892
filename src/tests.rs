mod integration_tests {
    use crate::config::{ServeError, initialize_app_state};
    use crate::schemas::HealthResponse;
    use crate::test_utils::{TEST_INDEX, TEST_SCRIPT, setup_test_app, setup_test_bundle};
    use axum::http::StatusCode;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_health_check() {
        let (app, _, _bundle) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.bundle, "present");
    }

    #[tokio::test]
    async fn test_health_response_shape() {
        let (app, _, _bundle) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let body: serde_json::Value = server.get("/health").await.json();
        let mut keys: Vec<&str> = body
            .as_object()
            .expect("health body is an object")
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["bundle", "status", "version"]);
    }

    #[tokio::test]
    async fn test_health_reports_removed_bundle() {
        let (app, state, _bundle) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        std::fs::remove_file(state.dist_dir.join("index.html")).unwrap();

        let body: HealthResponse = server.get("/health").await.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.bundle, "missing");
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let (app, _, _bundle) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), TEST_INDEX);
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let (app, _, _bundle) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        for path in ["/transactions", "/forecasting", "/accounts", "/reports", "/settings", "/unknown/deep/link"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::OK);
            assert_eq!(response.text(), TEST_INDEX, "fallback for {}", path);
        }
    }

    #[tokio::test]
    async fn test_static_assets_served() {
        let (app, _, _bundle) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/assets/app.js").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), TEST_SCRIPT);
    }

    #[test]
    fn test_missing_bundle_rejected() {
        let bundle = setup_test_bundle();
        let dir = bundle.path().to_path_buf();
        std::fs::remove_file(dir.join("index.html")).unwrap();

        match initialize_app_state(dir.clone()) {
            Err(ServeError::MissingBundle(path)) => assert_eq!(path, dir),
            other => panic!("Expected MissingBundle, got {:?}", other),
        }
    }

    #[test]
    fn test_bundle_removed_after_test() {
        let bundle = setup_test_bundle();
        let dir = bundle.path().to_path_buf();
        assert!(dir.join("index.html").is_file());

        drop(bundle);
        assert!(!dir.exists());
    }
}
