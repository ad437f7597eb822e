use chrono::NaiveDate;
use traction_core::{decode_snapshot, DashboardService, Pacing, ProgressSource};

const PAYLOAD: &str = r#"{
    "projects": [
        {
            "id": "11111111-2222-4333-8444-555555555555",
            "title": "Website relaunch",
            "status": "In Progress",
            "priority": "High",
            "dueDate": "2024-04-10",
            "createdAt": "2024-01-01T08:00:00Z"
        },
        {
            "id": "12111111-2222-4333-8444-555555555555",
            "title": "CRM cleanup",
            "status": "Done",
            "priority": "Low",
            "dueDate": "TBD",
            "createdAt": "2024-02-01T08:00:00Z"
        }
    ],
    "tasks": [
        {
            "id": "21111111-2222-4333-8444-555555555555",
            "title": "Draft copy",
            "done": true,
            "projectId": "11111111-2222-4333-8444-555555555555"
        },
        {
            "id": "22111111-2222-4333-8444-555555555555",
            "title": "Review design",
            "done": false,
            "projectId": "11111111-2222-4333-8444-555555555555"
        },
        {
            "id": "23111111-2222-4333-8444-555555555555",
            "title": "Standalone todo",
            "done": false
        }
    ]
}"#;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

#[test]
fn overview_combines_counts_time_and_deadline() {
    let snapshot = decode_snapshot(PAYLOAD).expect("payload decodes");
    let service = DashboardService::new(snapshot);
    // Day 66 of a 100-day window.
    let cards = service.project_cards(date(2024, 3, 7));

    let relaunch = &cards[0];
    assert_eq!(relaunch.title, "Website relaunch");
    assert_eq!(relaunch.progress.percent, 50);
    assert_eq!(relaunch.progress_source, ProgressSource::TaskCounts);

    let time = relaunch.time.expect("time window exists");
    assert_eq!(time.percent, 66);
    assert_eq!(relaunch.pacing, Some(Pacing::Behind));

    let deadline = relaunch.deadline.as_ref().expect("deadline exists");
    assert_eq!(deadline.days_remaining, 34);
    assert_eq!(deadline.label, "In 34 days");
    assert!(!deadline.urgent);
}

#[test]
fn sentinel_due_date_suppresses_time_and_deadline() {
    let snapshot = decode_snapshot(PAYLOAD).expect("payload decodes");
    let service = DashboardService::new(snapshot);
    let cards = service.project_cards(date(2024, 3, 7));

    let crm = &cards[1];
    assert_eq!(crm.title, "CRM cleanup");
    // No linked tasks: progress falls back to status Done.
    assert_eq!(crm.progress.percent, 100);
    assert_eq!(crm.progress_source, ProgressSource::StatusFallback);
    assert_eq!(crm.time, None);
    assert_eq!(crm.pacing, None);
    assert_eq!(crm.deadline, None);
}

#[test]
fn unlinked_tasks_stay_out_of_project_counts() {
    let snapshot = decode_snapshot(PAYLOAD).expect("payload decodes");
    let relaunch_id = snapshot.projects[0].id;
    assert_eq!(snapshot.tasks_for_project(relaunch_id).len(), 2);
    assert_eq!(snapshot.tasks.len(), 3);
}

#[test]
fn overdue_deadline_appears_on_cards() {
    let snapshot = decode_snapshot(PAYLOAD).expect("payload decodes");
    let service = DashboardService::new(snapshot);
    let cards = service.project_cards(date(2024, 4, 15));

    let deadline = cards[0].deadline.as_ref().expect("deadline exists");
    assert_eq!(deadline.days_remaining, -5);
    assert!(deadline.overdue);
    assert_eq!(deadline.label, "5 days ago");
}

#[test]
fn card_wire_format_is_camel_case() {
    let snapshot = decode_snapshot(PAYLOAD).expect("payload decodes");
    let service = DashboardService::new(snapshot);
    let cards = service.project_cards(date(2024, 3, 7));

    let json = serde_json::to_value(&cards[0]).expect("card serializes");
    assert_eq!(json["progressSource"], "task_counts");
    assert_eq!(json["progress"]["percent"], 50);
    assert_eq!(json["time"]["elapsedDays"], 66);
    assert_eq!(json["pacing"], "behind");
    assert_eq!(json["deadline"]["daysRemaining"], 34);
}
