use sea_orm::DatabaseConnection;

use crate::server::{
    data::exercise::ExerciseRepository,
    error::AppError,
    model::exercise::{CreateExerciseParams, Exercise, UpdateExerciseParams},
    util::parse::parse_exercise_id,
};

pub struct ExerciseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExerciseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new exercise from validated parameters
    pub async fn create(&self, params: CreateExerciseParams) -> Result<Exercise, AppError> {
        let repo = ExerciseRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Gets all exercises
    pub async fn get_all(&self) -> Result<Vec<Exercise>, AppError> {
        let repo = ExerciseRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets an exercise by its path id
    ///
    /// # Returns
    /// - `Ok(Some(Exercise))` - Exercise found
    /// - `Ok(None)` - No exercise with that id
    /// - `Err(AppError::ExerciseErr(MalformedId))` - `id` is not a valid exercise id
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Exercise>, AppError> {
        let id = parse_exercise_id(id)?;
        let repo = ExerciseRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Overwrites an exercise and returns its state afterwards
    ///
    /// The update is issued whether or not the exercise exists; the result reflects
    /// whether the exercise can be read back once the update has run.
    ///
    /// # Returns
    /// - `Ok(Some(Exercise))` - The exercise after the update
    /// - `Ok(None)` - No exercise with that id
    pub async fn update_by_id(
        &self,
        id: &str,
        params: UpdateExerciseParams,
    ) -> Result<Option<Exercise>, AppError> {
        let id = parse_exercise_id(id)?;
        let repo = ExerciseRepository::new(self.db);

        let rows_affected = repo.update_by_id(id, params).await?;
        tracing::debug!("Updated {} exercise(s) with id {}", rows_affected, id);

        Ok(repo.get_by_id(id).await?)
    }

    /// Deletes an exercise by its path id
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of exercises deleted (0 or 1)
    pub async fn delete_by_id(&self, id: &str) -> Result<u64, AppError> {
        let id = parse_exercise_id(id)?;
        let repo = ExerciseRepository::new(self.db);

        Ok(repo.delete_by_id(id).await?)
    }
}
