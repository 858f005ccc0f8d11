use super::*;

/// Tests reading back a created exercise.
///
/// Verifies that all five fields round-trip through the database.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn returns_created_exercise() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_exercise_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ExerciseRepository::new(db);
    let created = repo.create(curl_params()).await?;

    let found = repo.get_by_id(created.id).await?;

    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests reading an id that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_exercise() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_exercise_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ExerciseRepository::new(db);
    let found = repo.get_by_id(999999).await?;

    assert!(found.is_none());

    Ok(())
}
