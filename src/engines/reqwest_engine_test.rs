// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use crate::engines::reqwest_engine::ReqwestEngine;
    use crate::engines::traits::PollEngine;
    use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
    use tokio::net::TcpListener;

    async fn start_test_server() -> String {
        let app = Router::new()
            .route("/rank", get(|| async { Json(serde_json::json!({"rank": 5})) }))
            .route(
                "/missing",
                get(|| async { StatusCode::NOT_FOUND.into_response() }),
            )
            .route("/broken", get(|| async { "{not json".to_string() }));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_fetch_returns_status_and_body() {
        let server_url = start_test_server().await;
        let engine = ReqwestEngine::new().unwrap();

        let response = engine
            .fetch(&format!("{}/rank", server_url))
            .await
            .unwrap();

        assert_eq!(response.status_code, 200);
        let value: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(value, serde_json::json!({"rank": 5}));
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let server_url = start_test_server().await;
        let engine = ReqwestEngine::new().unwrap();

        let response = engine
            .fetch(&format!("{}/missing", server_url))
            .await
            .unwrap();

        // A non-200 status is a normal response at the engine level, not an error
        assert_eq!(response.status_code, 404);
    }

    #[tokio::test]
    async fn test_fetch_returns_raw_body_unparsed() {
        let server_url = start_test_server().await;
        let engine = ReqwestEngine::new().unwrap();

        let response = engine
            .fetch(&format!("{}/broken", server_url))
            .await
            .unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "{not json");
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_error() {
        // Bind then drop a listener so the port is free but nothing is listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let engine = ReqwestEngine::new().unwrap();
        let result = engine.fetch(&format!("http://{}/rank", addr)).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_engine_name() {
        let engine = ReqwestEngine::new().unwrap();
        assert_eq!(engine.name(), "reqwest");
    }
}
