//! Catalog domain module.
//!
//! - `model`: catalog entities (`Title`, `AppTile`, `GameTile`, `HeroSlide`,
//!   `Subscription`, `Shelf`) and the `Platform` enumeration
//! - `source`: the read-only `CatalogSource` collaborator trait

mod model;
mod source;

pub use model::{
    AppTile, GENRE_FILTERS, GameTile, HeroSlide, Platform, Shelf, Subscription, Title,
};
pub use source::CatalogSource;
