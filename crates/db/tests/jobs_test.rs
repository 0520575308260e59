// Integration tests for the job store against an in-memory database.

use jobly_db::{Database, DbError, JobFilter, JobUpdate, NewCompany, NewJob};
use pretty_assertions::assert_eq;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn company(handle: &str, name: &str, employees: i64) -> NewCompany {
    NewCompany {
        handle: handle.to_string(),
        name: name.to_string(),
        description: format!("Desc{}", &handle[1..]),
        num_employees: Some(employees),
        logo_url: Some(format!("http://{handle}.img")),
    }
}

fn new_job(title: &str, salary: Option<i64>, equity: Option<&str>, handle: &str) -> NewJob {
    NewJob {
        title: title.to_string(),
        salary,
        equity: equity.map(str::to_string),
        company_handle: handle.to_string(),
    }
}

/// Two companies and four jobs, all under c1:
/// Job1 (100, 0.1), Job2 (200, 0.2), Job3 (300, 0), Job4 (null, null).
async fn seeded_db() -> (Database, Vec<i64>) {
    let db = Database::new_in_memory().await.unwrap();
    db.create_company(&company("c1", "C1", 1)).await.unwrap();
    db.create_company(&company("c2", "C2", 2)).await.unwrap();

    let mut ids = Vec::new();
    for job in [
        new_job("Job1", Some(100), Some("0.1"), "c1"),
        new_job("Job2", Some(200), Some("0.2"), "c1"),
        new_job("Job3", Some(300), Some("0"), "c1"),
        new_job("Job4", None, None, "c1"),
    ] {
        ids.push(db.create_job(&job).await.unwrap().id);
    }
    (db, ids)
}

fn titles(jobs: &[jobly_db::JobSummary]) -> Vec<&str> {
    jobs.iter().map(|j| j.title.as_str()).collect()
}

// ---------------------------------------------------------------------------
// create / get
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_then_get_round_trips_fields_and_company() {
    let (db, _) = seeded_db().await;

    let created = db
        .create_job(&new_job("Test", Some(100), Some("0.2"), "c2"))
        .await
        .unwrap();
    assert_eq!(created.title, "Test");
    assert_eq!(created.salary, Some(100));
    assert_eq!(created.equity.as_deref(), Some("0.2"));
    assert_eq!(created.company_handle, "c2");

    let detail = db.get_job(created.id).await.unwrap();
    assert_eq!(detail.id, created.id);
    assert_eq!(detail.title, "Test");
    assert_eq!(detail.salary, Some(100));
    assert_eq!(detail.equity.as_deref(), Some("0.2"));
    assert_eq!(detail.company.handle, "c2");
    assert_eq!(detail.company.name, "C2");
    assert_eq!(detail.company.description, "Desc2");
    assert_eq!(detail.company.num_employees, Some(2));
    assert_eq!(detail.company.logo_url.as_deref(), Some("http://c2.img"));
}

#[tokio::test]
async fn create_with_unknown_company_is_constraint_error() {
    let (db, _) = seeded_db().await;
    let err = db
        .create_job(&new_job("Orphan", None, None, "nope"))
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::Constraint(_)), "got {err:?}");
}

#[tokio::test]
async fn create_with_negative_salary_is_constraint_error() {
    let (db, _) = seeded_db().await;
    let err = db
        .create_job(&new_job("Broke", Some(-1), None, "c1"))
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::Constraint(_)), "got {err:?}");
}

#[tokio::test]
async fn get_missing_job_is_not_found() {
    let (db, _) = seeded_db().await;
    let err = db.get_job(0).await.unwrap_err();
    assert!(matches!(err, DbError::JobNotFound(0)));
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_without_filters_returns_all_sorted_by_title() {
    let (db, ids) = seeded_db().await;
    let jobs = db.list_jobs(&JobFilter::default()).await.unwrap();

    assert_eq!(titles(&jobs), ["Job1", "Job2", "Job3", "Job4"]);
    assert_eq!(jobs.iter().map(|j| j.id).collect::<Vec<_>>(), ids);
    assert!(jobs
        .iter()
        .all(|j| j.company_handle == "c1" && j.company_name.as_deref() == Some("C1")));
    assert_eq!(jobs[3].salary, None);
    assert_eq!(jobs[3].equity, None);
}

#[tokio::test]
async fn list_orders_by_title_not_insertion() {
    let db = Database::new_in_memory().await.unwrap();
    db.create_company(&company("c1", "C1", 1)).await.unwrap();
    for title in ["Zeta", "Alpha", "Mid"] {
        db.create_job(&new_job(title, None, None, "c1")).await.unwrap();
    }
    let jobs = db.list_jobs(&JobFilter::default()).await.unwrap();
    assert_eq!(titles(&jobs), ["Alpha", "Mid", "Zeta"]);
}

#[tokio::test]
async fn list_min_salary() {
    let (db, _) = seeded_db().await;
    let jobs = db
        .list_jobs(&JobFilter {
            min_salary: Some(300),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(titles(&jobs), ["Job3"]);
}

#[tokio::test]
async fn list_has_equity_excludes_zero_and_null() {
    let (db, _) = seeded_db().await;
    let jobs = db
        .list_jobs(&JobFilter {
            has_equity: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(titles(&jobs), ["Job1", "Job2"]);
}

#[tokio::test]
async fn list_has_equity_false_applies_no_constraint() {
    let (db, _) = seeded_db().await;
    let jobs = db
        .list_jobs(&JobFilter {
            has_equity: Some(false),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(jobs.len(), 4);
}

#[tokio::test]
async fn list_min_salary_and_has_equity_conjoin() {
    let (db, _) = seeded_db().await;
    let jobs = db
        .list_jobs(&JobFilter {
            min_salary: Some(150),
            has_equity: Some(true),
            title: None,
        })
        .await
        .unwrap();
    assert_eq!(titles(&jobs), ["Job2"]);
}

#[tokio::test]
async fn list_title_is_case_insensitive_substring() {
    let (db, _) = seeded_db().await;
    let jobs = db
        .list_jobs(&JobFilter {
            title: Some("OB1".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(titles(&jobs), ["Job1"]);
}

#[tokio::test]
async fn list_title_matches_non_ascii_substrings() {
    let (db, _) = seeded_db().await;
    db.create_job(&new_job("ÉCOLE Teacher", Some(50), None, "c2"))
        .await
        .unwrap();

    for needle in ["ÉCOLE", "ÉCOLE Teacher", "cole teacher"] {
        let jobs = db
            .list_jobs(&JobFilter {
                title: Some(needle.to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(titles(&jobs), ["ÉCOLE Teacher"], "needle {needle:?}");
    }
}

#[tokio::test]
async fn list_all_three_filters() {
    let (db, _) = seeded_db().await;
    let jobs = db
        .list_jobs(&JobFilter {
            min_salary: Some(100),
            has_equity: Some(true),
            title: Some("2".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(titles(&jobs), ["Job2"]);
}

#[tokio::test]
async fn list_title_treats_wildcards_literally() {
    let (db, _) = seeded_db().await;
    let jobs = db
        .list_jobs(&JobFilter {
            title: Some("%".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(jobs.is_empty());
}

// ---------------------------------------------------------------------------
// update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_title_only_leaves_other_fields() {
    let (db, ids) = seeded_db().await;
    let job = db
        .update_job(
            ids[0],
            &JobUpdate {
                title: Some("New".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(job.id, ids[0]);
    assert_eq!(job.title, "New");
    assert_eq!(job.salary, Some(100));
    assert_eq!(job.equity.as_deref(), Some("0.1"));
    assert_eq!(job.company_handle, "c1");

    let stored = db.find_job(ids[0]).await.unwrap();
    assert_eq!(stored, job);
}

#[tokio::test]
async fn update_all_fields() {
    let (db, ids) = seeded_db().await;
    let job = db
        .update_job(
            ids[0],
            &JobUpdate {
                title: Some("New".to_string()),
                salary: Some(500),
                equity: Some("0.5".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(job.title, "New");
    assert_eq!(job.salary, Some(500));
    assert_eq!(job.equity.as_deref(), Some("0.5"));
    assert_eq!(job.company_handle, "c1");
}

#[tokio::test]
async fn update_missing_job_is_not_found() {
    let (db, _) = seeded_db().await;
    let err = db
        .update_job(
            0,
            &JobUpdate {
                title: Some("test".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::JobNotFound(0)));
}

#[tokio::test]
async fn update_with_no_fields_is_rejected() {
    let (db, ids) = seeded_db().await;
    let err = db
        .update_job(ids[0], &JobUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::NoUpdateFields));
}

// ---------------------------------------------------------------------------
// remove
// ---------------------------------------------------------------------------

#[tokio::test]
async fn remove_then_get_is_not_found() {
    let (db, ids) = seeded_db().await;
    db.remove_job(ids[0]).await.unwrap();

    let err = db.get_job(ids[0]).await.unwrap_err();
    assert!(matches!(err, DbError::JobNotFound(id) if id == ids[0]));

    let remaining = db.list_jobs(&JobFilter::default()).await.unwrap();
    assert_eq!(remaining.len(), 3);
}

#[tokio::test]
async fn remove_missing_job_is_not_found() {
    let (db, _) = seeded_db().await;
    let err = db.remove_job(0).await.unwrap_err();
    assert!(matches!(err, DbError::JobNotFound(0)));
}

#[tokio::test]
async fn ids_are_not_reused_after_remove() {
    let (db, ids) = seeded_db().await;
    let last = *ids.last().unwrap();
    db.remove_job(last).await.unwrap();

    let job = db
        .create_job(&new_job("Job5", None, None, "c1"))
        .await
        .unwrap();
    assert!(job.id > last);
}

// ---------------------------------------------------------------------------
// companies
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_missing_company_is_not_found() {
    let (db, _) = seeded_db().await;
    let err = db.get_company("nope").await.unwrap_err();
    assert!(matches!(err, DbError::CompanyNotFound(ref h) if h == "nope"));
}
