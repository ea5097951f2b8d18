//! Shared harness: a migrated in-memory SQLite database behind the real router.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::ConnectOptions;
use serde_json::{json, Value};
use tower::ServiceExt;

use sekolah_api::api::{create_router, AppState};
use sekolah_api::infra::Database;

pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub async fn spawn() -> Self {
        // One connection keeps every query on the same in-memory database
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1).sqlx_logging(false);

        let database = Database::connect_with_options(options)
            .await
            .expect("connect sqlite");
        database.run_migrations().await.expect("run migrations");

        let state = AppState::from_database(Arc::new(database));
        Self {
            router: create_router(state, &[]),
        }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    /// POST and return the ID under `key`, asserting 201.
    pub async fn create(&self, uri: &str, body: Value, key: &str) -> String {
        let (status, body) = self.post(uri, body).await;
        assert_eq!(status, StatusCode::CREATED, "POST {} failed: {}", uri, body);
        body[key].as_str().expect("created id").to_string()
    }

    pub async fn subject(&self, name: &str) -> String {
        self.create("/api/subjects", json!({ "name": name }), "subjectId")
            .await
    }

    pub async fn teacher_staff(&self, name: &str, subject_id: &str, class_ids: &[&str]) -> String {
        self.create(
            "/api/staff",
            json!({
                "name": name,
                "role": "teacher",
                "nip": "198706152010012003",
                "subjectId": subject_id,
                "taughtClassIds": class_ids,
            }),
            "staffId",
        )
        .await
    }

    pub async fn employee(&self, name: &str, job_title: &str) -> String {
        self.create(
            "/api/staff",
            json!({ "name": name, "role": "employee", "jobTitle": job_title }),
            "staffId",
        )
        .await
    }

    pub async fn class(&self, name: &str, walikelas_id: &str) -> String {
        self.create(
            "/api/classes",
            json!({ "name": name, "walikelasId": walikelas_id }),
            "classId",
        )
        .await
    }

    pub async fn student(&self, name: &str, class_id: &str) -> String {
        self.create(
            "/api/students",
            json!({ "name": name, "classId": class_id }),
            "studentId",
        )
        .await
    }
}

/// Subject, homeroom teacher and one class.
pub struct School {
    pub subject_id: String,
    pub teacher_id: String,
    pub class_id: String,
}

impl School {
    pub async fn seed(app: &TestApp) -> Self {
        let subject_id = app.subject("Matematika").await;
        let teacher_id = app.teacher_staff("Siti Rahmawati", &subject_id, &[]).await;
        let class_id = app.class("X IPA 1", &teacher_id).await;
        Self {
            subject_id,
            teacher_id,
            class_id,
        }
    }
}
