// src/domain/catalog/mod.rs
pub mod entity;
pub mod invariants;
pub mod views;

pub use entity::Catalog;
pub use invariants::validate_catalog;
pub use views::{
    paginate, FilterKey, FACET_ALL, FACET_FAVORITES, FACET_WATCH_LATER, MAX_RECOMMENDATIONS,
};
