//! The remote-control command grammar.
//!
//! Pure parsing: a line of input becomes a [`Command`] or a user-facing
//! error message. Blank names and missing arguments are rejected here, at
//! the input boundary, so the store never sees them.

use lounge_core::room::REACTION_TRAY;

/// Which title set a `list` command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Wishlist,
    WatchLater,
}

/// One parsed remote-control command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `go <page>` — navigate to a page id
    Go(String),
    /// `open <title-id>` — select a title and show its detail view
    Open(String),
    /// `search <text>`
    Search(String),
    /// `category <name>`
    Category(String),
    /// `platform <name>`
    Platform(String),
    /// `app <id>` — launch an app tile
    App(String),
    /// `queue add <title-id>`
    QueueAdd(String),
    /// `queue remove <title-id>`
    QueueRemove(String),
    /// `queue next <title-id>` — promote to the front
    QueueNext(String),
    /// `queue list`
    QueueList,
    /// `list add wish|later <title-id>`
    ListAdd(ListKind, String),
    /// `list remove wish|later <title-id>`
    ListRemove(ListKind, String),
    /// `playlist new <name>`
    PlaylistNew(String),
    /// `playlist add <playlist> <title-id>`
    PlaylistAdd { playlist: String, title: String },
    /// `playlist remove <playlist> <title-id>`
    PlaylistRemove { playlist: String, title: String },
    /// `playlist list`
    PlaylistList,
    /// `room create <name>`
    RoomCreate(String),
    /// `room join <name>`
    RoomJoin(String),
    /// `room leave`
    RoomLeave,
    /// `invite <name>`
    Invite(String),
    /// `say <text>`
    Say(String),
    /// `react <1-8|glyph>` — emoji reaction with tray coordinates
    React { glyph: String, x: f32, y: f32 },
    /// `video` — toggle the camera
    Video,
    /// `mute` — toggle the microphone
    Mute,
    /// `back` — return to the home view
    Back,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. `Err` carries a message for the user.
    pub fn parse(line: &str) -> Result<Command, String> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        match head {
            "go" => Ok(Command::Go(required(rest, "usage: go <page>")?)),
            "open" => Ok(Command::Open(required(rest, "usage: open <title-id>")?)),
            "search" => Ok(Command::Search(required(rest, "usage: search <text>")?)),
            "category" => Ok(Command::Category(required(rest, "usage: category <name>")?)),
            "platform" => Ok(Command::Platform(required(rest, "usage: platform <name>")?)),
            "app" => Ok(Command::App(required(rest, "usage: app <id>")?)),
            "queue" => parse_queue(rest),
            "list" => parse_list(rest),
            "playlist" => parse_playlist(rest),
            "room" => parse_room(rest),
            "invite" => Ok(Command::Invite(required(rest, "usage: invite <name>")?)),
            "say" => Ok(Command::Say(required(rest, "usage: say <text>")?)),
            "react" => parse_react(rest),
            "video" => Ok(Command::Video),
            "mute" => Ok(Command::Mute),
            "back" => Ok(Command::Back),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "" => Err("type 'help' for the command list".to_string()),
            other => Err(format!("unknown command '{}', type 'help'", other)),
        }
    }
}

fn required(value: &str, usage: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err(usage.to_string())
    } else {
        Ok(value.trim().to_string())
    }
}

fn parse_queue(rest: &str) -> Result<Command, String> {
    let (action, arg) = split_action(rest);
    match action {
        "add" => Ok(Command::QueueAdd(required(arg, "usage: queue add <title-id>")?)),
        "remove" => Ok(Command::QueueRemove(required(
            arg,
            "usage: queue remove <title-id>",
        )?)),
        "next" => Ok(Command::QueueNext(required(
            arg,
            "usage: queue next <title-id>",
        )?)),
        "list" | "" => Ok(Command::QueueList),
        _ => Err("usage: queue add|remove|next <title-id> | queue list".to_string()),
    }
}

fn parse_list(rest: &str) -> Result<Command, String> {
    let (action, arg) = split_action(rest);
    let (kind_word, id) = split_action(arg);
    let kind = match kind_word {
        "wish" => ListKind::Wishlist,
        "later" => ListKind::WatchLater,
        _ => return Err("usage: list add|remove wish|later <title-id>".to_string()),
    };
    let id = required(id, "usage: list add|remove wish|later <title-id>")?;
    match action {
        "add" => Ok(Command::ListAdd(kind, id)),
        "remove" => Ok(Command::ListRemove(kind, id)),
        _ => Err("usage: list add|remove wish|later <title-id>".to_string()),
    }
}

fn parse_playlist(rest: &str) -> Result<Command, String> {
    let (action, arg) = split_action(rest);
    match action {
        "new" => Ok(Command::PlaylistNew(required(
            arg,
            "playlist name cannot be empty",
        )?)),
        "add" | "remove" => {
            let (playlist, title) = split_action(arg);
            if playlist.is_empty() || title.trim().is_empty() {
                return Err(format!("usage: playlist {} <playlist> <title-id>", action));
            }
            let playlist = playlist.to_string();
            let title = title.trim().to_string();
            if action == "add" {
                Ok(Command::PlaylistAdd { playlist, title })
            } else {
                Ok(Command::PlaylistRemove { playlist, title })
            }
        }
        "list" | "" => Ok(Command::PlaylistList),
        _ => Err("usage: playlist new <name> | playlist add|remove <playlist> <title-id> | playlist list".to_string()),
    }
}

fn parse_room(rest: &str) -> Result<Command, String> {
    let (action, arg) = split_action(rest);
    match action {
        "create" => Ok(Command::RoomCreate(required(
            arg,
            "room name cannot be empty",
        )?)),
        "join" => Ok(Command::RoomJoin(required(arg, "room name cannot be empty")?)),
        "leave" => Ok(Command::RoomLeave),
        _ => Err("usage: room create|join <name> | room leave".to_string()),
    }
}

fn parse_react(rest: &str) -> Result<Command, String> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Err("usage: react <1-8|glyph>".to_string());
    }
    let (index, glyph) = match rest.parse::<usize>() {
        Ok(n) if (1..=REACTION_TRAY.len()).contains(&n) => (n - 1, REACTION_TRAY[n - 1].to_string()),
        Ok(_) => return Err(format!("react takes 1-{}", REACTION_TRAY.len())),
        Err(_) => {
            let index = REACTION_TRAY
                .iter()
                .position(|g| *g == rest)
                .unwrap_or_default();
            (index, rest.to_string())
        }
    };
    // Coordinates of the tray slot the reaction floats up from.
    Ok(Command::React {
        glyph,
        x: 10.0 + index as f32 * 12.0,
        y: 90.0,
    })
}

fn split_action(rest: &str) -> (&str, &str) {
    match rest.split_once(char::is_whitespace) {
        Some((action, arg)) => (action, arg.trim()),
        None => (rest, ""),
    }
}

/// The help text printed by `help`, and the completion vocabulary.
pub const COMMAND_WORDS: [&str; 18] = [
    "go", "open", "search", "category", "platform", "app", "queue", "list", "playlist", "room",
    "invite", "say", "react", "video", "mute", "back", "help", "quit",
];

pub fn help_text() -> String {
    [
        "  go <page>                        navigate (home, apps, games, settings, ...)",
        "  open <title-id>                  show title details",
        "  search <text>                    search the catalog",
        "  category <name>                  browse by genre",
        "  platform <name>                  browse a streaming service",
        "  app <id>                         launch an app tile",
        "  queue add|remove|next <id>       manage the play queue",
        "  queue list                       show the queue",
        "  list add|remove wish|later <id>  wishlist / watch later",
        "  playlist new <name>              create a playlist",
        "  playlist add|remove <pl> <id>    edit a playlist",
        "  playlist list                    show playlists",
        "  room create|join <name>          start or join a watch party",
        "  room leave                       leave the watch party",
        "  invite <name>                    invite a friend to the room",
        "  say <text>                       send a chat message",
        "  react <1-8|glyph>                send an emoji reaction",
        "  video / mute                     toggle camera / microphone",
        "  back                             return home",
        "  quit                             exit",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_room_name_is_rejected() {
        assert!(Command::parse("room create").is_err());
        assert!(Command::parse("room create    ").is_err());
        assert_eq!(
            Command::parse("room create Movie Night").unwrap(),
            Command::RoomCreate("Movie Night".to_string())
        );
    }

    #[test]
    fn blank_playlist_name_is_rejected() {
        assert!(Command::parse("playlist new").is_err());
        assert_eq!(
            Command::parse("playlist new Friday Favorites").unwrap(),
            Command::PlaylistNew("Friday Favorites".to_string())
        );
    }

    #[test]
    fn queue_subcommands_parse() {
        assert_eq!(
            Command::parse("queue add 12").unwrap(),
            Command::QueueAdd("12".to_string())
        );
        assert_eq!(
            Command::parse("queue next 12").unwrap(),
            Command::QueueNext("12".to_string())
        );
        assert_eq!(Command::parse("queue").unwrap(), Command::QueueList);
        assert!(Command::parse("queue add").is_err());
    }

    #[test]
    fn list_commands_need_a_kind() {
        assert_eq!(
            Command::parse("list add wish 3").unwrap(),
            Command::ListAdd(ListKind::Wishlist, "3".to_string())
        );
        assert_eq!(
            Command::parse("list remove later 3").unwrap(),
            Command::ListRemove(ListKind::WatchLater, "3".to_string())
        );
        assert!(Command::parse("list add 3").is_err());
    }

    #[test]
    fn say_keeps_the_whole_message() {
        assert_eq!(
            Command::parse("say what are we watching first?").unwrap(),
            Command::Say("what are we watching first?".to_string())
        );
        assert!(Command::parse("say").is_err());
    }

    #[test]
    fn react_maps_tray_indexes_to_glyphs() {
        let Command::React { glyph, x, .. } = Command::parse("react 5").unwrap() else {
            panic!("expected React");
        };
        assert_eq!(glyph, "🔥");
        assert!((x - 58.0).abs() < f32::EPSILON);

        assert!(Command::parse("react 9").is_err());
        assert!(matches!(
            Command::parse("react 💯").unwrap(),
            Command::React { .. }
        ));
    }

    #[test]
    fn unknown_commands_are_reported() {
        let err = Command::parse("launch netflix").unwrap_err();
        assert!(err.contains("unknown command"));
    }
}
