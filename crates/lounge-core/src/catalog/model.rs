//! Catalog domain models.
//!
//! Everything the static catalog serves: titles, app tiles, game tiles,
//! hero slides, subscription plans, and named shelves. All of these are
//! immutable once loaded; the rest of the application only ever reads them.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The fixed set of streaming services that own titles in the catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Platform {
    Netflix,
    #[serde(rename = "Prime Video")]
    #[strum(serialize = "Prime Video")]
    PrimeVideo,
    Hotstar,
    Aha,
}

/// A single catalog entry (movie or show).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    /// Unique identifier within the catalog
    pub id: String,
    /// Display title
    pub title: String,
    /// Short synopsis shown on detail views
    pub description: String,
    /// Ordered genre tags
    pub genres: Vec<String>,
    /// Duration label, e.g. "2h 10m"
    pub duration: String,
    /// Rating label, e.g. "8.3"
    pub rating: String,
    /// Release year
    pub year: u16,
    /// Artwork reference
    pub image: String,
    /// Owning streaming service
    pub platform: Platform,
    /// Whether this title is promoted on the home view
    #[serde(default)]
    pub featured: bool,
}

/// A launchable app tile on the home row.
///
/// The `platform` label is a free string rather than a [`Platform`]: tiles
/// may reference services the title catalog does not carry (e.g. "Zee5").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppTile {
    pub id: String,
    pub name: String,
    /// Accent color label used by the renderer
    pub color: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

/// A game tile on the games view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTile {
    pub id: String,
    pub name: String,
    /// Icon glyph shown next to the name
    pub icon: String,
    pub color: String,
    pub category: String,
    pub image: String,
}

/// A hero-carousel slide on the home view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSlide {
    pub id: String,
    pub title: String,
    pub image: String,
    /// Content kind label, e.g. "sports", "movies"
    pub kind: String,
}

/// A subscription plan shown on the subscriptions view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub name: String,
    /// Price label, e.g. "$14.99/month"
    pub price: String,
    /// Whether the plan is currently active for the user
    pub active: bool,
    /// Next billing date label, present only for active plans
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_billing: Option<String>,
    pub features: Vec<String>,
}

/// A named, ordered grouping of title ids (a home-view "category row").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shelf {
    pub name: String,
    pub title_ids: Vec<String>,
}

/// Genre filters offered on the categories view.
pub const GENRE_FILTERS: [&str; 12] = [
    "All", "Action", "Adventure", "Comedy", "Crime", "Drama", "Fantasy", "Horror", "Mystery",
    "Romance", "Sci-Fi", "Sports",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn platform_display_uses_catalog_labels() {
        assert_eq!(Platform::PrimeVideo.to_string(), "Prime Video");
        assert_eq!(Platform::Netflix.to_string(), "Netflix");
    }

    #[test]
    fn platform_parses_from_display_label() {
        assert_eq!(
            Platform::from_str("Prime Video").unwrap(),
            Platform::PrimeVideo
        );
        assert!(Platform::from_str("Zee5").is_err());
    }

    #[test]
    fn title_featured_defaults_to_false() {
        let json = r#"{
            "id": "1",
            "title": "RRR",
            "description": "Two legendary revolutionaries.",
            "genres": ["Action", "Drama"],
            "duration": "3h 7m",
            "rating": "7.9",
            "year": 2022,
            "image": "image4",
            "platform": "Aha"
        }"#;
        let title: Title = serde_json::from_str(json).unwrap();
        assert!(!title.featured);
        assert_eq!(title.platform, Platform::Aha);
    }
}
