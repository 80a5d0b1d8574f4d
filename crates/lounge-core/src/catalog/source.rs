//! Catalog source trait.
//!
//! The read-only collaborator contract between the catalog data and the rest
//! of the application. Implementations own the fixed tables; the provided
//! lookups derive everything else from them.

use super::model::{AppTile, GameTile, HeroSlide, Platform, Shelf, Subscription, Title};

/// Read-only access to the pre-populated catalog.
///
/// The core only ever reads from the catalog; there is no mutation surface.
pub trait CatalogSource: Send + Sync {
    /// All titles, in catalog order.
    fn titles(&self) -> &[Title];

    /// All app tiles, in display order.
    fn apps(&self) -> &[AppTile];

    /// All game tiles, in display order.
    fn games(&self) -> &[GameTile];

    /// Hero-carousel slides for the home view.
    fn hero_slides(&self) -> &[HeroSlide];

    /// Subscription plans (active and available).
    fn subscriptions(&self) -> &[Subscription];

    /// The named home-view shelves, in display order.
    fn shelves(&self) -> &[Shelf];

    // ============================================================================
    // Provided lookups
    // ============================================================================

    /// Looks up a title by id.
    fn title_by_id(&self, id: &str) -> Option<&Title> {
        self.titles().iter().find(|t| t.id == id)
    }

    /// Case-insensitive substring search over title, genres, and description.
    ///
    /// A blank (or whitespace-only) query yields no results.
    fn search(&self, query: &str) -> Vec<&Title> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.titles()
            .iter()
            .filter(|t| {
                t.title.to_lowercase().contains(&query)
                    || t.genres.iter().any(|g| g.to_lowercase().contains(&query))
                    || t.description.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// All titles owned by a platform, matched by display label.
    fn titles_on_platform(&self, platform: &str) -> Vec<&Title> {
        self.titles()
            .iter()
            .filter(|t| t.platform.to_string() == platform)
            .collect()
    }

    /// All titles owned by a platform.
    fn titles_of(&self, platform: Platform) -> Vec<&Title> {
        self.titles()
            .iter()
            .filter(|t| t.platform == platform)
            .collect()
    }

    /// All titles carrying a genre tag. The "All" filter matches everything.
    fn titles_in_genre(&self, genre: &str) -> Vec<&Title> {
        if genre == "All" {
            return self.titles().iter().collect();
        }
        self.titles()
            .iter()
            .filter(|t| t.genres.iter().any(|g| g == genre))
            .collect()
    }

    /// Titles flagged as featured.
    fn featured(&self) -> Vec<&Title> {
        self.titles().iter().filter(|t| t.featured).collect()
    }

    /// Looks up a shelf by name and resolves its title ids.
    fn shelf_titles(&self, name: &str) -> Vec<&Title> {
        self.shelves()
            .iter()
            .find(|s| s.name == name)
            .map(|s| {
                s.title_ids
                    .iter()
                    .filter_map(|id| self.title_by_id(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Looks up an app tile by id.
    fn app_by_id(&self, id: &str) -> Option<&AppTile> {
        self.apps().iter().find(|a| a.id == id)
    }
}
