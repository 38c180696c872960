#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use chrono::NaiveDate;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use exchange_rate_backend::clock::FixedClock;
use exchange_rate_backend::models::{NewDailyExchangeRate, NewExchangeRate};
use exchange_rate_backend::store::{ExchangeRateStore, MemoryStore};
use exchange_rate_backend::{create_app, AppState};

pub const SEEDED_PAIRS: [(&str, &str); 4] =
    [("GBP", "USD"), ("USD", "GBP"), ("USD", "IDR"), ("JPY", "IDR")];

pub struct TestApp {
    pub router: Router,
    pub store: MemoryStore,
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

impl TestApp {
    pub fn new(today: &str) -> Self {
        let store = MemoryStore::new();
        let state = AppState::new(Arc::new(store.clone()), Arc::new(FixedClock(date(today))));
        Self {
            router: create_app(state),
            store,
        }
    }

    /// App with the four standard pairs, ids 1..=4 in seeding order.
    pub async fn seeded(today: &str) -> Self {
        let app = Self::new(today);
        for (from, to) in SEEDED_PAIRS {
            app.store
                .insert_pair(NewExchangeRate { from_code: from.into(), to_code: to.into() })
                .await
                .unwrap();
        }
        app
    }

    pub async fn observe(&self, exchange_rate_id: i64, on: &str, rate: f64) {
        self.store
            .insert_observation(NewDailyExchangeRate {
                exchange_rate_id,
                rate,
                date: date(on),
            })
            .await
            .unwrap();
    }

    pub async fn request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Request::delete(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn send_json(&self, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(request).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send_json("POST", uri, body).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send_json("PUT", uri, body).await
    }
}

pub fn assert_close(actual: &Value, expected: f64) {
    let actual = actual
        .as_f64()
        .unwrap_or_else(|| panic!("expected a number, got {}", actual));
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
