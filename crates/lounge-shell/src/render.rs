//! Text renderers, one per view.
//!
//! Every renderer is a pure function of the session snapshot and the
//! catalog; the REPL prints whatever the active view yields after each
//! state change.

use colored::Colorize;
use lounge_application::SessionState;
use lounge_core::catalog::{CatalogSource, GENRE_FILTERS, Title};
use lounge_core::nav::View;
use std::fmt::Write;

/// Renders the active view for the current snapshot.
pub fn render(view: View, snap: &SessionState, catalog: &dyn CatalogSource) -> String {
    let body = match view {
        View::Home => home(catalog),
        View::Detail => detail(snap),
        View::Search => search(snap, catalog),
        View::Categories => categories(snap, catalog),
        View::MyList => my_list(snap),
        View::CreateRoom => create_room(snap),
        View::JoinRoom => join_room(snap),
        View::Settings => settings(snap),
        View::Apps => apps(catalog),
        View::Games => games(catalog),
        View::Subscriptions => subscriptions(catalog),
        View::Playlists => playlists(snap),
        View::History => history(catalog),
        View::Friends => friends(snap),
        View::Dashboard => dashboard(snap),
        View::Platform => platform(snap, catalog),
        View::WatchParty => watch_party(snap),
    };
    format!("{}\n{}", heading(view), body)
}

fn heading(view: View) -> String {
    format!("━━ {} ━━", view.title()).bright_yellow().bold().to_string()
}

fn title_line(title: &Title) -> String {
    format!(
        "  [{}] {}  {} · {} · ★{} · {}",
        title.id.bright_black(),
        title.title.bold(),
        title.year,
        title.duration,
        title.rating,
        title.platform.to_string().cyan(),
    )
}

fn title_list(titles: &[&Title]) -> String {
    titles.iter().map(|t| title_line(t)).collect::<Vec<_>>().join("\n")
}

fn home(catalog: &dyn CatalogSource) -> String {
    let mut out = String::new();
    for slide in catalog.hero_slides() {
        let _ = write!(out, "  {}  ", slide.title.on_bright_black().bold());
    }
    out.push('\n');
    if let Some(featured) = catalog.featured().first() {
        let _ = writeln!(out, "{}", "  FEATURED".bright_red().bold());
        let _ = writeln!(out, "{}", title_line(featured));
    }
    for shelf in catalog.shelves().iter().take(5) {
        let _ = writeln!(out, "{}", shelf.name.bright_cyan());
        for title in catalog.shelf_titles(&shelf.name).iter().take(4) {
            let _ = writeln!(out, "{}", title_line(title));
        }
    }
    let _ = write!(
        out,
        "{}",
        format!("  ... and {} more rows", catalog.shelves().len().saturating_sub(5)).bright_black()
    );
    out
}

fn detail(snap: &SessionState) -> String {
    match &snap.selected_title {
        Some(title) => format!(
            "{}\n  {}\n  genres: {}\n",
            title_line(title),
            title.description,
            title.genres.join(", ").bright_black(),
        ),
        None => "  nothing selected - 'open <title-id>' first".bright_black().to_string(),
    }
}

fn search(snap: &SessionState, catalog: &dyn CatalogSource) -> String {
    let results = catalog.search(&snap.search_query);
    if snap.search_query.trim().is_empty() {
        return "  type 'search <text>' to find something to watch".bright_black().to_string();
    }
    if results.is_empty() {
        return format!("  no results for '{}'", snap.search_query).bright_black().to_string();
    }
    format!(
        "{}\n{}",
        format!("  Search Results ({})", results.len()).bright_cyan(),
        title_list(&results),
    )
}

fn categories(snap: &SessionState, catalog: &dyn CatalogSource) -> String {
    let filters = GENRE_FILTERS
        .iter()
        .map(|genre| {
            if *genre == snap.selected_category {
                format!("[{}]", genre).bright_yellow().to_string()
            } else {
                genre.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let titles = catalog.titles_in_genre(&snap.selected_category);
    format!("  {}\n{}", filters, title_list(&titles))
}

fn my_list(snap: &SessionState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "  Wishlist".bright_cyan());
    if snap.wishlist.is_empty() {
        let _ = writeln!(out, "{}", "    empty".bright_black());
    }
    for title in snap.wishlist.iter() {
        let _ = writeln!(out, "  {}", title_line(title));
    }
    let _ = writeln!(out, "{}", "  Watch Later".bright_cyan());
    if snap.watch_later.is_empty() {
        let _ = writeln!(out, "{}", "    empty".bright_black());
    }
    for title in snap.watch_later.iter() {
        let _ = writeln!(out, "  {}", title_line(title));
    }
    out
}

fn create_room(snap: &SessionState) -> String {
    format!(
        "  room name: {}\n  {}",
        snap.room_name.bold(),
        "'room create <name>' starts the party".bright_black(),
    )
}

fn join_room(snap: &SessionState) -> String {
    format!(
        "  last room: {}\n  {}",
        snap.room_name.bold(),
        "'room join <name>' joins a party".bright_black(),
    )
}

fn settings(snap: &SessionState) -> String {
    format!(
        "  room name: {}\n  selected category: {}\n  selected platform: {}",
        snap.room_name,
        snap.selected_category,
        if snap.selected_platform.is_empty() {
            "-"
        } else {
            &snap.selected_platform
        },
    )
}

fn apps(catalog: &dyn CatalogSource) -> String {
    catalog
        .apps()
        .iter()
        .map(|app| {
            format!(
                "  [{}] {}{}",
                app.id.bright_black(),
                app.name.bold(),
                app.platform
                    .as_deref()
                    .map(|p| format!("  ({})", p).bright_black().to_string())
                    .unwrap_or_default(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn games(catalog: &dyn CatalogSource) -> String {
    catalog
        .games()
        .iter()
        .map(|game| {
            format!(
                "  {} {}  {}",
                game.icon,
                game.name.bold(),
                game.category.bright_black(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn subscriptions(catalog: &dyn CatalogSource) -> String {
    catalog
        .subscriptions()
        .iter()
        .map(|plan| {
            let status = if plan.active {
                "ACTIVE".bright_green().to_string()
            } else {
                "available".bright_black().to_string()
            };
            let billing = plan
                .next_billing
                .as_deref()
                .map(|d| format!(" · renews {}", d))
                .unwrap_or_default();
            format!("  {} {}  {}{}", status, plan.name.bold(), plan.price, billing)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn playlists(snap: &SessionState) -> String {
    if snap.playlists.is_empty() {
        return "  no playlists yet - 'playlist new <name>'".bright_black().to_string();
    }
    snap.playlists
        .iter()
        .map(|playlist| {
            let mut out = format!(
                "  {} ({} titles, by {})",
                playlist.name.bold(),
                playlist.len(),
                playlist.owner,
            );
            for title in &playlist.titles {
                let _ = write!(out, "\n  {}", title_line(title));
            }
            out
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn history(catalog: &dyn CatalogSource) -> String {
    let titles = catalog.shelf_titles("Based on Your Watch History");
    if titles.is_empty() {
        return "  nothing watched yet".bright_black().to_string();
    }
    title_list(&titles)
}

fn friends(snap: &SessionState) -> String {
    snap.roster
        .iter()
        .map(|member| {
            let dot = if member.online {
                "●".bright_green().to_string()
            } else {
                "●".bright_black().to_string()
            };
            format!("  {} {} {}", dot, member.avatar, member.name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn dashboard(snap: &SessionState) -> String {
    format!(
        "  queued: {}\n  wishlist: {}\n  watch later: {}\n  playlists: {}\n  chat messages: {}\n  friends online: {}",
        snap.queue.len(),
        snap.wishlist.len(),
        snap.watch_later.len(),
        snap.playlists.len(),
        snap.chat.len(),
        snap.roster.iter().filter(|m| m.online).count(),
    )
}

fn platform(snap: &SessionState, catalog: &dyn CatalogSource) -> String {
    if snap.selected_platform.is_empty() {
        return "  pick one with 'platform <name>' or 'app <id>'".bright_black().to_string();
    }
    let titles = catalog.titles_on_platform(&snap.selected_platform);
    if titles.is_empty() {
        return format!("  no catalog titles on {}", snap.selected_platform)
            .bright_black()
            .to_string();
    }
    format!("  {}\n{}", snap.selected_platform.bold(), title_list(&titles))
}

fn watch_party(snap: &SessionState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  {}", snap.room_name.bold().bright_magenta());
    if let Some(pick) = &snap.selected_room_title {
        let _ = writeln!(out, "  {} {}", "Tonight's pick:".bright_cyan(), pick.title.bold());
    }

    let _ = writeln!(out, "{}", "  Now Playing".bright_cyan());
    match snap.queue.now_playing() {
        Some(title) => {
            let _ = writeln!(out, "  {} {}", "▶".bright_green(), title_line(title));
        }
        None => {
            let _ = writeln!(out, "{}", "    queue is empty".bright_black());
        }
    }
    for title in snap.queue.iter().skip(1) {
        let _ = writeln!(out, "  {}", title_line(title));
    }

    let _ = writeln!(out, "{}", "  Chat".bright_cyan());
    for message in snap.chat.iter().rev().take(6).rev() {
        let _ = writeln!(
            out,
            "    {} {}: {}",
            message.avatar,
            message.author.bold(),
            message.body,
        );
    }

    if !snap.reactions.is_empty() {
        let floats: String = snap.reactions.iter().map(|r| r.glyph.as_str()).collect();
        let _ = writeln!(out, "  {}", floats);
    }

    let _ = writeln!(out, "{}", "  In the room".bright_cyan());
    for member in &snap.roster {
        let dot = if member.online {
            "●".bright_green().to_string()
        } else {
            "●".bright_black().to_string()
        };
        let _ = writeln!(out, "    {} {} {}", dot, member.avatar, member.name);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lounge_infrastructure::StaticCatalog;
    use lounge_core::clock::Clock;
    use lounge_core::library::{Queue, TitleSet};
    use lounge_core::room::{seed_chat, seed_roster};

    struct FixedClock;

    impl Clock for FixedClock {
        fn now_rfc3339(&self) -> String {
            "2024-01-01T00:00:00Z".to_string()
        }
    }

    fn snapshot() -> SessionState {
        SessionState {
            current_page: "home".to_string(),
            selected_title: None,
            selected_room_title: None,
            queue: Queue::new(),
            chat: seed_chat(&FixedClock),
            reactions: Vec::new(),
            roster: seed_roster(),
            in_room: false,
            room_name: "Movie Night Party".to_string(),
            current_room: None,
            wishlist: TitleSet::new(),
            watch_later: TitleSet::new(),
            playlists: Vec::new(),
            search_query: String::new(),
            selected_category: "All".to_string(),
            selected_platform: String::new(),
        }
    }

    #[test]
    fn every_view_renders_from_the_initial_snapshot() {
        colored::control::set_override(false);
        let catalog = StaticCatalog::seeded(7);
        let snap = snapshot();
        for view in [
            View::Home,
            View::Detail,
            View::Search,
            View::Categories,
            View::MyList,
            View::CreateRoom,
            View::JoinRoom,
            View::Settings,
            View::Apps,
            View::Games,
            View::Subscriptions,
            View::Playlists,
            View::History,
            View::Friends,
            View::Dashboard,
            View::Platform,
            View::WatchParty,
        ] {
            let out = render(view, &snap, &catalog);
            assert!(out.contains(view.title()), "{:?}", view);
        }
    }

    #[test]
    fn watch_party_marks_the_head_of_the_queue() {
        colored::control::set_override(false);
        let catalog = StaticCatalog::seeded(7);
        let mut snap = snapshot();
        snap.queue.add(catalog.title_by_id("12").unwrap().clone());
        snap.queue.add(catalog.title_by_id("35").unwrap().clone());

        let out = render(View::WatchParty, &snap, &catalog);
        let now_playing = out.lines().find(|l| l.contains("▶")).unwrap();
        assert!(now_playing.contains("Dune"));
    }

    #[test]
    fn search_view_reports_blank_query() {
        colored::control::set_override(false);
        let catalog = StaticCatalog::seeded(7);
        let mut snap = snapshot();
        let out = render(View::Search, &snap, &catalog);
        assert!(out.contains("search <text>"));

        snap.search_query = "dune".to_string();
        let out = render(View::Search, &snap, &catalog);
        assert!(out.contains("Search Results"));
    }
}
