//! Exercise data repository for database operations
//!
//! Provides the `ExerciseRepository` for managing exercises in the database and converts
//! entity models into domain models for use within services & controllers.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::exercise::{CreateExerciseParams, Exercise, UpdateExerciseParams};

/// Repository providing database operations for exercise records.
pub struct ExerciseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExerciseRepository<'a> {
    /// Creates a new ExerciseRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new exercise
    ///
    /// # Returns
    /// - `Ok(Exercise)` - The persisted exercise including its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateExerciseParams) -> Result<Exercise, DbErr> {
        let exercise = entity::exercise::ActiveModel {
            name: ActiveValue::Set(params.name),
            reps: ActiveValue::Set(params.reps),
            weight: ActiveValue::Set(params.weight),
            unit: ActiveValue::Set(params.unit),
            date: ActiveValue::Set(params.date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Exercise::from_entity(exercise))
    }

    /// Gets every exercise in the order the database returns them
    pub async fn get_all(&self) -> Result<Vec<Exercise>, DbErr> {
        let exercises = entity::prelude::Exercise::find()
            .all(self.db)
            .await?
            .into_iter()
            .map(Exercise::from_entity)
            .collect();

        Ok(exercises)
    }

    /// Gets an exercise by ID
    ///
    /// # Returns
    /// - `Ok(Some(Exercise))` - Exercise found
    /// - `Ok(None)` - No exercise with that id
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Exercise>, DbErr> {
        let exercise = entity::prelude::Exercise::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(exercise.map(Exercise::from_entity))
    }

    /// Overwrites the provided fields of the exercise matching `id`
    ///
    /// Matching no exercise is not an error.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated (0 or 1)
    /// - `Err(DbErr)` - Database error
    pub async fn update_by_id(&self, id: i32, params: UpdateExerciseParams) -> Result<u64, DbErr> {
        let mut active_model = entity::exercise::ActiveModel {
            ..Default::default()
        };

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(reps) = params.reps {
            active_model.reps = ActiveValue::Set(reps);
        }
        if let Some(weight) = params.weight {
            active_model.weight = ActiveValue::Set(weight);
        }
        if let Some(unit) = params.unit {
            active_model.unit = ActiveValue::Set(unit);
        }
        if let Some(date) = params.date {
            active_model.date = ActiveValue::Set(date);
        }

        // An UPDATE without any SET columns is not valid SQL
        if !active_model.is_changed() {
            return Ok(0);
        }

        let result = entity::prelude::Exercise::update_many()
            .set(active_model)
            .filter(entity::exercise::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes the exercise matching `id`
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 or 1)
    /// - `Err(DbErr)` - Database error
    pub async fn delete_by_id(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Exercise::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
