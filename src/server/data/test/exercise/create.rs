use super::*;

/// Tests creating a new exercise.
///
/// Verifies that the repository persists all five fields and returns the record
/// with a database-assigned id.
///
/// Expected: Ok with exercise created
#[tokio::test]
async fn creates_exercise() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_exercise_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ExerciseRepository::new(db);
    let exercise = repo.create(curl_params()).await?;

    assert_eq!(exercise.name, "Curl");
    assert_eq!(exercise.reps, 10.0);
    assert_eq!(exercise.weight, 20.0);
    assert_eq!(exercise.unit, WeightUnit::Kgs);
    assert_eq!(exercise.date, "01-02-23");

    let stored = entity::prelude::Exercise::find_by_id(exercise.id)
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that each created exercise receives its own id.
///
/// Expected: Ok with distinct ids
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_exercise_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ExerciseRepository::new(db);
    let first = repo.create(curl_params()).await?;
    let second = repo.create(curl_params()).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests that fractional reps and weights are stored as given.
///
/// Expected: Ok with fractional values preserved
#[tokio::test]
async fn preserves_fractional_values() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_exercise_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ExerciseRepository::new(db);
    let exercise = repo
        .create(CreateExerciseParams {
            reps: 2.5,
            weight: 12.75,
            ..curl_params()
        })
        .await?;

    let stored = repo.get_by_id(exercise.id).await?.unwrap();
    assert_eq!(stored.reps, 2.5);
    assert_eq!(stored.weight, 12.75);

    Ok(())
}
