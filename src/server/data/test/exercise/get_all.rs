use super::*;

/// Tests listing exercises from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_exercises() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_exercise_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ExerciseRepository::new(db);
    let exercises = repo.get_all().await?;

    assert!(exercises.is_empty());

    Ok(())
}

/// Tests that listing returns every created exercise.
///
/// Verifies that after creating N exercises the list contains exactly those N,
/// ignoring order.
///
/// Expected: Ok with all exercises returned
#[tokio::test]
async fn returns_all_exercises() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_exercise_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut created_ids = Vec::new();
    for name in ["Squat", "Bench", "Deadlift"] {
        let exercise = factory::exercise::ExerciseFactory::new(db)
            .name(name)
            .build()
            .await?;
        created_ids.push(exercise.id);
    }

    let repo = ExerciseRepository::new(db);
    let exercises = repo.get_all().await?;

    assert_eq!(exercises.len(), 3);
    let mut ids: Vec<i32> = exercises.iter().map(|e| e.id).collect();
    ids.sort();
    created_ids.sort();
    assert_eq!(ids, created_ids);

    let mut names: Vec<&str> = exercises.iter().map(|e| e.name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["Bench", "Deadlift", "Squat"]);

    Ok(())
}
