//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let exercise = factory::create_exercise(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let exercise = factory::exercise::ExerciseFactory::new(&db)
//!     .name("Deadlift")
//!     .reps(3.0)
//!     .unit(WeightUnit::Kgs)
//!     .build()
//!     .await?;
//! ```

pub mod exercise;
pub mod helpers;

pub use exercise::create_exercise;
