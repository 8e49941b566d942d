use chrono::NaiveDate;
use whattodo_core::{
    AppError, BoardService, FixedClock, JsonFileStore, TaskStatus, TaskUpdate,
};

fn clock() -> FixedClock {
    FixedClock::new(
        NaiveDate::from_ymd_opt(2020, 12, 26)
            .unwrap()
            .and_hms_opt(15, 13, 45)
            .unwrap(),
    )
}

#[test]
fn commands_against_a_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let service = BoardService::new(JsonFileStore::new(dir.path().join("data.json")), clock());

    assert!(matches!(service.count_tasks(), Err(AppError::NoBoard)));

    service.create_board("personal").unwrap();
    service.add_task("my first task").unwrap();
    service.add_task("my second task").unwrap();
    service
        .update_task(1, TaskUpdate::status(TaskStatus::Done))
        .unwrap();

    let board = service.load_board().unwrap();
    assert_eq!(board.count_tasks(), 2);
    assert!(!board.retrieve_task(0).unwrap().is_done());
    assert!(board.retrieve_task(1).unwrap().is_done());
    assert_eq!(
        board.retrieve_task(0).unwrap().created_at_display(),
        "2020-12-26 15:13:45"
    );

    service.remove_task(0).unwrap();
    assert_eq!(service.count_tasks().unwrap(), 1);

    service.clean_tasks().unwrap();
    let listing = service.list_tasks().unwrap();
    assert!(listing.contains("personal"));
    assert!(listing.contains("No tasks on this board!"));
}
