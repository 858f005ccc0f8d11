pub use super::exercise::Entity as Exercise;
