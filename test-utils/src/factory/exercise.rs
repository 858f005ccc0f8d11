//! Exercise factory for creating test exercise entities.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::WeightUnit;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test exercises with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::exercise::ExerciseFactory;
///
/// let exercise = ExerciseFactory::new(&db)
///     .name("Bench Press")
///     .weight(80.0)
///     .build()
///     .await?;
/// ```
pub struct ExerciseFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    reps: f64,
    weight: f64,
    unit: WeightUnit,
    date: String,
}

impl<'a> ExerciseFactory<'a> {
    /// Creates a new ExerciseFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Exercise {id}"` where id is auto-incremented
    /// - reps: `5`
    /// - weight: `100`
    /// - unit: `lbs`
    /// - date: `"04-12-23"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Exercise {}", id),
            reps: 5.0,
            weight: 100.0,
            unit: WeightUnit::Lbs,
            date: "04-12-23".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn reps(mut self, reps: f64) -> Self {
        self.reps = reps;
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn unit(mut self, unit: WeightUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Builds and inserts the exercise entity into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created exercise entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::exercise::Model, DbErr> {
        entity::exercise::ActiveModel {
            name: ActiveValue::Set(self.name),
            reps: ActiveValue::Set(self.reps),
            weight: ActiveValue::Set(self.weight),
            unit: ActiveValue::Set(self.unit),
            date: ActiveValue::Set(self.date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an exercise with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Model)` - The created exercise entity
/// - `Err(DbErr)` - Database error during insertion
pub async fn create_exercise(db: &DatabaseConnection) -> Result<entity::exercise::Model, DbErr> {
    ExerciseFactory::new(db).build().await
}
