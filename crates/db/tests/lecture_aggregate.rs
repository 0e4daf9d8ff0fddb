//! Integration tests for the lecture aggregate repository.
//!
//! Exercises the transactional create / detail / update / delete sequence
//! against a real database: validation short-circuits, child-row upserts,
//! full slide replacement, cascade delete, and listing filters.

use sqlx::PgPool;

use lectern_core::error::CoreError;
use lectern_db::models::lecture::{CreateLecture, LectureFilter, UpdateLecture};
use lectern_db::models::slide::SlideInput;
use lectern_db::repositories::{AggregateError, LectureRepo, SlideRepo, SummaryRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn manual_lecture(title: &str, category: &str, summary: &str) -> CreateLecture {
    CreateLecture {
        title: Some(title.to_string()),
        category: Some(category.to_string()),
        summary: Some(summary.to_string()),
        ..Default::default()
    }
}

fn slide(url: &str, timestamp: Option<i32>) -> SlideInput {
    SlideInput {
        image_url: url.to_string(),
        timestamp_seconds: timestamp,
        ocr_text: None,
        ai_summary: None,
    }
}

async fn count(pool: &PgPool, table: &str) -> i64 {
    let row: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_requires_url_or_title(pool: PgPool) {
    let input = CreateLecture {
        url: Some("   ".to_string()),
        title: Some("".to_string()),
        ..Default::default()
    };
    let err = LectureRepo::create(&pool, &input).await.unwrap_err();
    assert!(matches!(
        err,
        AggregateError::Core(CoreError::Validation(_))
    ));

    // Validation failures must write nothing.
    assert_eq!(count(&pool, "lectures").await, 0);
    assert_eq!(count(&pool, "transcripts").await, 0);
    assert_eq!(count(&pool, "summaries").await, 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_url_only_defaults(pool: PgPool) {
    let input = CreateLecture {
        url: Some("https://example.com/v".to_string()),
        title: Some("".to_string()),
        ..Default::default()
    };
    let lecture = LectureRepo::create(&pool, &input).await.unwrap();

    assert_eq!(lecture.title, "New Lecture");
    assert_eq!(lecture.source_url.as_deref(), Some("https://example.com/v"));
    assert_eq!(lecture.status, "pending");
    assert!(lecture.is_published);
    assert!(lecture.publish_date.is_some());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_with_summary_writes_one_summary_row(pool: PgPool) {
    let lecture = LectureRepo::create(
        &pool,
        &manual_lecture("Diabetes Update", "Endocrinology", "# Key Points\n..."),
    )
    .await
    .unwrap();

    assert_eq!(lecture.status, "completed");
    assert_eq!(count(&pool, "summaries").await, 1);

    let summary = SummaryRepo::find_by_lecture(&pool, lecture.id)
        .await
        .unwrap()
        .expect("summary row should exist");
    assert_eq!(
        summary.full_markdown_content.as_deref(),
        Some("# Key Points\n...")
    );
    assert_eq!(summary.executive_summary, None);
    assert_eq!(summary.tags, Some(vec!["Endocrinology".to_string()]));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_parses_key_takeaways(pool: PgPool) {
    let input = CreateLecture {
        key_takeaways: Some(r#"["SGLT2i for HFpEF", "Rapid titration"]"#.to_string()),
        ..manual_lecture("HF Guidelines", "Cardiology", "body")
    };
    let lecture = LectureRepo::create(&pool, &input).await.unwrap();

    let summary = SummaryRepo::find_by_lecture(&pool, lecture.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        summary.key_takeaways.0,
        vec!["SGLT2i for HFpEF", "Rapid titration"]
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_malformed_key_takeaways_writes_nothing(pool: PgPool) {
    let input = CreateLecture {
        key_takeaways: Some("not json".to_string()),
        ..manual_lecture("Broken", "General", "body")
    };
    let err = LectureRepo::create(&pool, &input).await.unwrap_err();
    assert!(matches!(
        err,
        AggregateError::Core(CoreError::Validation(_))
    ));
    assert_eq!(count(&pool, "lectures").await, 0);
    assert_eq!(count(&pool, "summaries").await, 0);
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_get_detail_merges_children(pool: PgPool) {
    let lecture = LectureRepo::create(
        &pool,
        &manual_lecture("Diabetes Update", "Endocrinology", "# Key Points\n..."),
    )
    .await
    .unwrap();

    let detail = LectureRepo::get_detail(&pool, lecture.id)
        .await
        .unwrap()
        .expect("detail should exist");

    assert_eq!(detail.lecture.title, "Diabetes Update");
    assert_eq!(detail.lecture.category.as_deref(), Some("Endocrinology"));
    assert_eq!(detail.summary, "# Key Points\n...");
    assert_eq!(detail.transcript, "");
    assert!(detail.slides.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_get_detail_missing_returns_none(pool: PgPool) {
    let detail = LectureRepo::get_detail(&pool, uuid::Uuid::new_v4())
        .await
        .unwrap();
    assert!(detail.is_none());
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_partial_leaves_other_fields(pool: PgPool) {
    let lecture = LectureRepo::create(&pool, &manual_lecture("Original", "Cardiology", "body"))
        .await
        .unwrap();

    let input = UpdateLecture {
        title: Some("Renamed".to_string()),
        ..Default::default()
    };
    LectureRepo::update(&pool, lecture.id, &input).await.unwrap();

    let updated = LectureRepo::find_by_id(&pool, lecture.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.category.as_deref(), Some("Cardiology"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_missing_lecture_is_not_found(pool: PgPool) {
    let err = LectureRepo::update(&pool, uuid::Uuid::new_v4(), &UpdateLecture::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AggregateError::Core(CoreError::NotFound { entity: "Lecture", .. })
    ));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_inserts_transcript_lazily(pool: PgPool) {
    let lecture = LectureRepo::create(&pool, &manual_lecture("T", "General", "body"))
        .await
        .unwrap();
    assert_eq!(count(&pool, "transcripts").await, 0);

    let input = UpdateLecture {
        transcript: Some("full transcript text".to_string()),
        ..Default::default()
    };
    LectureRepo::update(&pool, lecture.id, &input).await.unwrap();

    let detail = LectureRepo::get_detail(&pool, lecture.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.transcript, "full transcript text");

    // A second update overwrites in place rather than adding a row.
    let input = UpdateLecture {
        transcript: Some("revised".to_string()),
        ..Default::default()
    };
    LectureRepo::update(&pool, lecture.id, &input).await.unwrap();
    assert_eq!(count(&pool, "transcripts").await, 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_empty_transcript_creates_no_row(pool: PgPool) {
    let lecture = LectureRepo::create(&pool, &manual_lecture("T", "General", "body"))
        .await
        .unwrap();

    let input = UpdateLecture {
        transcript: Some(String::new()),
        ..Default::default()
    };
    LectureRepo::update(&pool, lecture.id, &input).await.unwrap();
    assert_eq!(count(&pool, "transcripts").await, 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_replaces_slide_set(pool: PgPool) {
    let lecture = LectureRepo::create(&pool, &manual_lecture("S", "General", "body"))
        .await
        .unwrap();

    let input = UpdateLecture {
        slides: Some(vec![
            slide("https://cdn.example.com/a.png", Some(60)),
            slide("https://cdn.example.com/b.png", Some(120)),
            slide("https://cdn.example.com/c.png", None),
        ]),
        ..Default::default()
    };
    LectureRepo::update(&pool, lecture.id, &input).await.unwrap();
    assert_eq!(count(&pool, "slides").await, 3);

    // Replacement is total, not a diff.
    let input = UpdateLecture {
        slides: Some(vec![
            slide("https://cdn.example.com/d.png", Some(30)),
            slide("https://cdn.example.com/e.png", None),
        ]),
        ..Default::default()
    };
    LectureRepo::update(&pool, lecture.id, &input).await.unwrap();

    let slides = SlideRepo::list_by_lecture(&pool, lecture.id).await.unwrap();
    assert_eq!(slides.len(), 2);
    assert_eq!(slides[0].image_url, "https://cdn.example.com/e.png");
    assert_eq!(slides[0].timestamp_seconds, 0);
    assert_eq!(slides[1].image_url, "https://cdn.example.com/d.png");
    assert_eq!(slides[1].timestamp_seconds, 30);

    // An explicit empty array clears the set.
    let input = UpdateLecture {
        slides: Some(Vec::new()),
        ..Default::default()
    };
    LectureRepo::update(&pool, lecture.id, &input).await.unwrap();
    assert_eq!(count(&pool, "slides").await, 0);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_cascades_to_children(pool: PgPool) {
    let input = CreateLecture {
        transcript: Some("spoken words".to_string()),
        ..manual_lecture("Doomed", "General", "body")
    };
    let lecture = LectureRepo::create(&pool, &input).await.unwrap();

    let slides_input = UpdateLecture {
        slides: Some(vec![slide("https://cdn.example.com/a.png", Some(10))]),
        ..Default::default()
    };
    LectureRepo::update(&pool, lecture.id, &slides_input)
        .await
        .unwrap();

    let existed = LectureRepo::delete(&pool, lecture.id).await.unwrap();
    assert!(existed);

    assert_eq!(count(&pool, "lectures").await, 0);
    assert_eq!(count(&pool, "transcripts").await, 0);
    assert_eq!(count(&pool, "summaries").await, 0);
    assert_eq!(count(&pool, "slides").await, 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_is_idempotent(pool: PgPool) {
    let lecture = LectureRepo::create(&pool, &manual_lecture("Twice", "General", "body"))
        .await
        .unwrap();

    assert!(LectureRepo::delete(&pool, lecture.id).await.unwrap());
    // Second delete: no error, nothing left to remove.
    assert!(!LectureRepo::delete(&pool, lecture.id).await.unwrap());
    assert_eq!(count(&pool, "lectures").await, 0);
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_filters_published_and_search(pool: PgPool) {
    LectureRepo::create(&pool, &manual_lecture("Intro to Cardiology", "Cardiology", "a"))
        .await
        .unwrap();
    let draft = LectureRepo::create(
        &pool,
        &CreateLecture {
            is_published: Some(false),
            ..manual_lecture("Cardio Draft", "Cardiology", "b")
        },
    )
    .await
    .unwrap();
    LectureRepo::create(&pool, &manual_lecture("Renal Physiology", "Nephrology", "c"))
        .await
        .unwrap();

    let filter = LectureFilter {
        published: Some(true),
        search: Some("cardio".to_string()),
        category: None,
    };
    let results = LectureRepo::list(&pool, &filter).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Intro to Cardiology");
    assert!(results.iter().all(|l| l.id != draft.id));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_admin_sees_drafts(pool: PgPool) {
    LectureRepo::create(
        &pool,
        &CreateLecture {
            is_published: Some(false),
            ..manual_lecture("Hidden", "General", "x")
        },
    )
    .await
    .unwrap();

    let all = LectureRepo::list(&pool, &LectureFilter::default()).await.unwrap();
    assert_eq!(all.len(), 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_category_exact_match(pool: PgPool) {
    LectureRepo::create(&pool, &manual_lecture("A", "Cardiology", "a"))
        .await
        .unwrap();
    LectureRepo::create(&pool, &manual_lecture("B", "cardiology", "b"))
        .await
        .unwrap();

    let filter = LectureFilter {
        category: Some("Cardiology".to_string()),
        ..Default::default()
    };
    let results = LectureRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "A");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_orders_by_publish_date_desc(pool: PgPool) {
    let older = CreateLecture {
        publish_date: Some(chrono::Utc::now() - chrono::Duration::days(7)),
        ..manual_lecture("Older", "General", "a")
    };
    LectureRepo::create(&pool, &older).await.unwrap();
    LectureRepo::create(&pool, &manual_lecture("Newer", "General", "b"))
        .await
        .unwrap();

    let all = LectureRepo::list(&pool, &LectureFilter::default()).await.unwrap();
    assert_eq!(all[0].title, "Newer");
    assert_eq!(all[1].title, "Older");
}
