pub mod metadata;
pub mod repository;
