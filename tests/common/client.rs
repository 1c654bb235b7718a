//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per albums endpoint.
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::Value;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET /albums
    pub async fn get_albums(&self) -> Response {
        self.client
            .get(format!("{}/albums", self.base_url))
            .send()
            .await
            .expect("Get albums request failed")
    }

    /// GET /albums/{id}
    pub async fn get_album(&self, id: &str) -> Response {
        self.client
            .get(format!("{}/albums/{}", self.base_url, id))
            .send()
            .await
            .expect("Get album request failed")
    }

    /// POST /albums
    pub async fn post_album(&self, album: &Value) -> Response {
        self.client
            .post(format!("{}/albums", self.base_url))
            .json(album)
            .send()
            .await
            .expect("Post album request failed")
    }

    /// POST /albums with a raw, possibly malformed, JSON body
    pub async fn post_raw_album(&self, body: &'static str) -> Response {
        self.client
            .post(format!("{}/albums", self.base_url))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .expect("Post album request failed")
    }

    /// PUT /albums/{id}
    pub async fn replace_album(&self, id: &str, album: &Value) -> Response {
        self.client
            .put(format!("{}/albums/{}", self.base_url, id))
            .json(album)
            .send()
            .await
            .expect("Replace album request failed")
    }

    /// DELETE /albums/{id}
    pub async fn delete_album(&self, id: &str) -> Response {
        self.client
            .delete(format!("{}/albums/{}", self.base_url, id))
            .send()
            .await
            .expect("Delete album request failed")
    }

    /// Fetches the current album list as JSON values
    pub async fn album_list(&self) -> Vec<Value> {
        let response = self.get_albums().await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        response
            .json::<Vec<Value>>()
            .await
            .expect("Album list is not a JSON array")
    }
}
