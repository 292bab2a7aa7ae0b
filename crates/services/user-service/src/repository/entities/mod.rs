//! SeaORM entity definitions, separate from the domain models.

pub mod user;
