//! The interactive remote-control REPL.
//!
//! Reads a line, parses it into a [`Command`], dispatches it against the
//! store, and re-renders the active view whenever the revision counter
//! moved. All id validation happens here at the boundary; the store itself
//! treats unknown ids as no-ops.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use lounge_application::{SessionStore, WatchParty};
use lounge_core::catalog::CatalogSource;
use lounge_core::media::MediaCapture;
use lounge_core::nav;
use lounge_core::room::Room;

use crate::commands::{COMMAND_WORDS, Command, ListKind, help_text};
use crate::render;
use crate::splash;

/// Rustyline helper providing completion, hints, and highlighting for the
/// remote-control vocabulary.
#[derive(Clone)]
struct LoungeHelper {
    commands: Vec<String>,
}

impl LoungeHelper {
    fn new() -> Self {
        Self {
            commands: COMMAND_WORDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for LoungeHelper {}

impl Completer for LoungeHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        // Only the first word is a command.
        if line.contains(' ') {
            return Ok((0, vec![]));
        }
        let candidates: Vec<Pair> = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for LoungeHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let head = line.split_whitespace().next().unwrap_or("");
        if self.commands.iter().any(|cmd| cmd == head) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for LoungeHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.is_empty() || line.contains(' ') {
            return None;
        }
        self.commands
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for LoungeHelper {}

/// One interactive shell session over a store, a catalog, and a camera.
pub struct ShellSession {
    store: SessionStore,
    catalog: Arc<dyn CatalogSource>,
    capture: Arc<dyn MediaCapture>,
    party: Option<WatchParty>,
}

impl ShellSession {
    pub fn new(
        store: SessionStore,
        catalog: Arc<dyn CatalogSource>,
        capture: Arc<dyn MediaCapture>,
    ) -> Self {
        Self {
            store,
            catalog,
            capture,
            party: None,
        }
    }

    /// Runs the read-parse-dispatch-render loop until `quit` or EOF.
    pub async fn run(&mut self) -> Result<()> {
        let mut rl = Editor::new()?;
        rl.set_helper(Some(LoungeHelper::new()));

        let mut revision = self.store.subscribe();

        println!(
            "{}",
            "Type 'help' for the remote-control commands, 'quit' to exit.".bright_black()
        );
        println!();
        self.render_active_view().await;

        loop {
            match rl.readline("lounge> ") {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(&line);

                    match Command::parse(trimmed) {
                        Ok(Command::Quit) => break,
                        Ok(command) => self.execute(command).await,
                        Err(message) => println!("{}", message.red()),
                    }

                    // Re-render only when a mutation actually landed.
                    if revision.has_changed().unwrap_or(false) {
                        revision.borrow_and_update();
                        self.render_active_view().await;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => {
                    tracing::error!(error = %err, "readline failed");
                    break;
                }
            }
        }

        // Releases the camera if the session ends inside a room.
        if let Some(party) = self.party.take() {
            party.leave().await;
        }
        println!("{}", "Goodbye!".bright_green());
        Ok(())
    }

    async fn render_active_view(&self) {
        let snap = self.store.snapshot().await;
        let view = nav::resolve(&snap.current_page, snap.in_room);
        println!("{}", render::render(view, &snap, self.catalog.as_ref()));
    }

    async fn execute(&mut self, command: Command) {
        match command {
            Command::Go(page) => self.store.set_current_page(page).await,
            Command::Back => self.store.set_current_page("home").await,
            Command::Open(id) => match self.catalog.title_by_id(&id) {
                Some(title) => {
                    self.store.set_selected_title(Some(title.clone())).await;
                    self.store.set_current_page("detail").await;
                }
                None => println!("{}", format!("no title '{}'", id).red()),
            },
            Command::Search(query) => {
                self.store.set_search_query(query).await;
                self.store.set_current_page("search").await;
            }
            Command::Category(name) => {
                self.store.set_selected_category(name).await;
                self.store.set_current_page("categories").await;
            }
            Command::Platform(name) => {
                self.store.set_selected_platform(name).await;
                self.store.set_current_page("platform").await;
            }
            Command::App(id) => self.launch_app(&id).await,
            Command::QueueAdd(id) => match self.catalog.title_by_id(&id) {
                Some(title) => {
                    if !self.store.add_to_queue(title.clone()).await {
                        println!("{}", format!("'{}' is already queued", title.title).yellow());
                    }
                }
                None => println!("{}", format!("no title '{}'", id).red()),
            },
            Command::QueueRemove(id) => {
                if !self.store.remove_from_queue(&id).await {
                    println!("{}", format!("'{}' is not in the queue", id).yellow());
                }
            }
            Command::QueueNext(id) => {
                if !self.store.promote_to_front(&id).await {
                    println!("{}", format!("'{}' is not in the queue", id).yellow());
                }
            }
            Command::QueueList => {
                let queue = self.store.queue().await;
                if queue.is_empty() {
                    println!("{}", "  queue is empty".bright_black());
                }
                for (index, title) in queue.iter().enumerate() {
                    let marker = if index == 0 { "▶" } else { " " };
                    println!("  {} [{}] {}", marker.bright_green(), title.id, title.title);
                }
            }
            Command::ListAdd(kind, id) => match self.catalog.title_by_id(&id) {
                Some(title) => {
                    let added = match kind {
                        ListKind::Wishlist => self.store.add_to_wishlist(title.clone()).await,
                        ListKind::WatchLater => self.store.add_to_watch_later(title.clone()).await,
                    };
                    if !added {
                        println!("{}", format!("'{}' is already listed", title.title).yellow());
                    }
                }
                None => println!("{}", format!("no title '{}'", id).red()),
            },
            Command::ListRemove(kind, id) => {
                let removed = match kind {
                    ListKind::Wishlist => self.store.remove_from_wishlist(&id).await,
                    ListKind::WatchLater => self.store.remove_from_watch_later(&id).await,
                };
                if !removed {
                    println!("{}", format!("'{}' is not listed", id).yellow());
                }
            }
            Command::PlaylistNew(name) => {
                let id = self.store.create_playlist(name.clone()).await;
                println!("{}", format!("created playlist '{}' ({})", name, id).green());
            }
            Command::PlaylistAdd { playlist, title } => {
                let Some(playlist_id) = self.find_playlist(&playlist).await else {
                    println!("{}", format!("no playlist '{}'", playlist).red());
                    return;
                };
                match self.catalog.title_by_id(&title) {
                    Some(title) => {
                        self.store.add_to_playlist(&playlist_id, title.clone()).await;
                    }
                    None => println!("{}", format!("no title '{}'", title).red()),
                }
            }
            Command::PlaylistRemove { playlist, title } => {
                match self.find_playlist(&playlist).await {
                    Some(playlist_id) => {
                        self.store.remove_from_playlist(&playlist_id, &title).await;
                    }
                    None => println!("{}", format!("no playlist '{}'", playlist).red()),
                }
            }
            Command::PlaylistList => self.store.set_current_page("playlists").await,
            Command::RoomCreate(name) => self.enter_room(name, true).await,
            Command::RoomJoin(name) => self.enter_room(name, false).await,
            Command::RoomLeave => match self.party.take() {
                Some(party) => party.leave().await,
                None => println!("{}", "not in a room".yellow()),
            },
            Command::Invite(name) => {
                if self.require_room() {
                    self.store.add_friend_to_room(name).await;
                }
            }
            Command::Say(text) => {
                if self.require_room() {
                    self.store.add_chat_message(text).await;
                }
            }
            Command::React { glyph, x, y } => {
                if self.require_room() {
                    self.store.add_emoji_reaction(glyph, x, y).await;
                }
            }
            Command::Video => match self.party.as_mut() {
                Some(party) => {
                    let on = party.toggle_video().await;
                    let label = if on {
                        "camera on".green()
                    } else if party.video_unavailable() {
                        "camera unavailable".red()
                    } else {
                        "camera off".yellow()
                    };
                    println!("{}", label);
                }
                None => println!("{}", "not in a room".yellow()),
            },
            Command::Mute => match self.party.as_mut() {
                Some(party) => {
                    let muted = party.toggle_mute();
                    println!("{}", if muted { "muted".yellow() } else { "unmuted".green() });
                }
                None => println!("{}", "not in a room".yellow()),
            },
            Command::Help => println!("{}", help_text()),
            // Quit is handled by the loop.
            Command::Quit => {}
        }
    }

    /// Launches an app tile: brief launch screen, then the platform page
    /// when the tile maps to a catalog platform.
    async fn launch_app(&self, id: &str) {
        let Some(tile) = self.catalog.app_by_id(id).cloned() else {
            println!("{}", format!("no app '{}'", id).red());
            return;
        };
        splash::app_launch(&tile.name).await;
        match tile.platform {
            Some(platform) => {
                self.store.set_selected_platform(platform).await;
                self.store.set_current_page("platform").await;
            }
            None => println!("{}", format!("{} has no catalog here", tile.name).bright_black()),
        }
    }

    /// Enters a watch party under the given room name.
    ///
    /// Creating a room carries the currently selected title in as the
    /// room's pick; joining an existing one starts without a pick.
    async fn enter_room(&mut self, name: String, carry_selection: bool) {
        if self.party.is_some() {
            println!("{}", "already in a room, 'room leave' first".yellow());
            return;
        }
        let pick = if carry_selection {
            self.store.snapshot().await.selected_title
        } else {
            None
        };
        let room = Room {
            id: slug(&name),
            name: name.clone(),
            password: None,
            selected_title: pick.clone(),
            members: Vec::new(),
        };
        self.store.set_room_name(name).await;
        self.store.set_selected_room_title(pick).await;
        self.store.set_current_room(Some(room)).await;
        self.party = Some(WatchParty::join(self.store.clone(), self.capture.clone()).await);
    }

    /// Resolves a playlist argument (id or exact name) to an id.
    async fn find_playlist(&self, key: &str) -> Option<String> {
        self.store
            .playlists()
            .await
            .iter()
            .find(|p| p.id == key || p.name == key)
            .map(|p| p.id.clone())
    }

    fn require_room(&self) -> bool {
        if self.party.is_none() {
            println!("{}", "not in a room, 'room create <name>' first".yellow());
        }
        self.party.is_some()
    }
}

fn slug(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
