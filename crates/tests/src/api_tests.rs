use client::StudentApi;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, StudentRequest};

use crate::common;

fn request(name: &str, email: &str) -> StudentRequest {
    StudentRequest {
        name: name.to_string(),
        email: email.to_string(),
        department: "Computer Science".to_string(),
        year: Some(2),
        phone_number: "0123456789".to_string(),
    }
}

#[tokio::test]
async fn test_list_students_decodes_camel_case() {
    let backend = common::spawn_backend(common::seed_roster(3)).await;
    let api = client::HttpStudentApi::new(backend.base_url.clone());

    let students = api.list_students().await.unwrap();
    assert_eq!(students.len(), 3);
    assert_eq!(students[0].student_id, 1);
    assert_eq!(students[0].phone_number, "5550000001");
    assert!(students[0].created_at_parsed().is_some());
}

#[tokio::test]
async fn test_get_missing_student_is_not_found() {
    let backend = common::spawn_backend(common::seed_roster(1)).await;
    let api = client::HttpStudentApi::new(backend.base_url.clone());

    let err = api.get_student(99).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "Student not found with id: 99");
}

#[tokio::test]
async fn test_create_sends_camel_case_body() {
    let backend = common::spawn_backend(vec![]).await;
    let api = client::HttpStudentApi::new(backend.base_url.clone());

    let created = api
        .create_student(&request("Ada Lovelace", "ada@university.edu"))
        .await
        .unwrap();
    assert_eq!(created.student_id, 1);
    assert_eq!(created.phone_number, "0123456789");
    assert_eq!(created.year, 2);
    assert!(created.created_at_parsed().is_some());
}

#[tokio::test]
async fn test_departments_are_distinct() {
    let backend = common::spawn_backend(common::seed_roster(9)).await;
    let api = client::HttpStudentApi::new(format!("{}/", backend.base_url));

    let departments = api.list_departments().await.unwrap();
    assert_eq!(
        departments,
        vec!["Computer Science", "Mathematics", "Physics"]
    );
}

#[tokio::test]
async fn test_delete_ignores_empty_body() {
    let backend = common::spawn_backend(common::seed_roster(2)).await;
    let api = client::HttpStudentApi::new(backend.base_url.clone());

    api.delete_student(2).await.unwrap();
    assert_eq!(backend.student_count().await, 1);
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let api = client::HttpStudentApi::new("http://127.0.0.1:9/api");
    let err = api.list_students().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Network);
}

#[tokio::test]
async fn test_raw_http_matches_backend_contract() {
    let backend = common::spawn_backend(common::seed_roster(1)).await;
    let response = reqwest::get(format!("{}/students/1", backend.base_url))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["studentId"], 1);
    assert_eq!(body["phoneNumber"], "5550000001");
}
