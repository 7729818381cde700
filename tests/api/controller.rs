//! The client controller driven against a live server.

use student_records::client::{HttpStudentApi, Outcome, StudentController};
use student_records::view::SortDirection;

use crate::support::start_memory_server;

async fn controller() -> StudentController<HttpStudentApi> {
    let base = start_memory_server().await;
    StudentController::new(HttpStudentApi::new(format!("{base}/api/students")))
}

async fn add(controller: &mut StudentController<HttpStudentApi>, name: &str, age: &str, class: &str) {
    controller.set_name(name);
    controller.set_age(age);
    controller.set_class(class);
    assert_eq!(controller.submit().await, Outcome::Completed);
}

#[tokio::test]
async fn local_list_tracks_server_through_writes() {
    let mut controller = controller().await;
    assert_eq!(controller.refresh().await, Outcome::Completed);
    assert!(controller.records().is_empty());

    add(&mut controller, "Nguyễn Văn A", "18", "12A1").await;
    add(&mut controller, "Trần Thị B", "17", "11B2").await;
    assert_eq!(controller.records().len(), 2);

    // Edit the first record
    let first = controller.records()[0].clone();
    controller.begin_edit(&first);
    controller.set_age("19");
    assert_eq!(controller.submit().await, Outcome::Completed);
    assert_eq!(controller.records()[0].age, 19);
    assert_eq!(controller.records()[0].id, first.id);

    // Delete the second
    let second_id = controller.records()[1].id.clone();
    assert_eq!(controller.remove(&second_id, || true).await, Outcome::Completed);

    let local = controller.records().to_vec();
    controller.refresh().await;
    assert_eq!(controller.records(), local.as_slice());
}

#[tokio::test]
async fn server_rejection_surfaces_as_submit_error() {
    let mut controller = controller().await;
    controller.set_name("An");
    controller.set_age("mười");
    controller.set_class("12A1");

    assert_eq!(controller.submit().await, Outcome::Failed);
    assert!(controller.last_error().is_some());
    assert!(controller.records().is_empty());
    assert_eq!(controller.form().name, "An");
}

#[tokio::test]
async fn deleting_a_vanished_record_keeps_the_list() {
    let mut controller = controller().await;
    add(&mut controller, "Lê Văn C", "16", "10C3").await;
    let id = controller.records()[0].id.clone();

    let mut other = StudentController::new(controller.api().clone());
    other.remove(&id, || true).await;

    assert_eq!(controller.remove(&id, || true).await, Outcome::Failed);
    assert_eq!(controller.records().len(), 1);
}

#[tokio::test]
async fn search_and_sort_over_fetched_records() {
    let mut controller = controller().await;
    for name in ["Bình", "an", "Ân", "Đức"] {
        add(&mut controller, name, "15", "9A").await;
    }

    controller.set_search_term("an");
    let names: Vec<&str> = controller
        .visible_records()
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["an", "Ân"]);

    controller.set_search_term("");
    controller.set_sort_direction(SortDirection::Descending);
    let names: Vec<&str> = controller
        .visible_records()
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["Đức", "Bình", "Ân", "an"]);
}
