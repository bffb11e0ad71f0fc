//! Interactive shell
//!
//! Reads one command per line and multiplexes input with the session's
//! asynchronous sources (widget notifications, debounced searches) on a
//! single task, so every state change happens in arrival order.

use std::fmt::Write as _;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};
use tunebox_core::{PlaylistId, TrackId};

use crate::render;
use crate::session::{Session, SessionEvents, View};

pub const HELP: &str = "\
Navigation:  home | artists | albums | playlists | favorites
             album <n> | playlist <id>
Search:      type <text>      search as you type (debounced)
             search <text>    search now
             artist <n>       search by artist from the artists page
Playback:    play <n>         play item n of the current page
             pause | next | prev | seek <secs> | vol <0-100> | mute | repeat
Library:     fav              toggle favorite on the playing track
             add <id> [n]     add the playing track (or result n) to a playlist
             remove <n>       remove song n from the open playlist or favorites
             new <name>       create a playlist
             delete <id> [--yes]
Other:       status | list | help | quit";

/// A parsed shell line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Go(View),
    Type(String),
    Search(String),
    Artist(usize),
    Play(usize),
    PlayPause,
    Next,
    Previous,
    Seek(f64),
    Volume(u8),
    Mute,
    Repeat,
    Favorite,
    Add(PlaylistId, Option<usize>),
    Remove(usize),
    New(String),
    Delete(PlaylistId, bool),
    Status,
    List,
    Help,
    Quit,
}

impl Command {
    /// Parse a line; item numbers are 1-based on input, 0-based in the result
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match word {
            "home" => Self::Go(View::Home),
            "artists" => Self::Go(View::Artists),
            "albums" => Self::Go(View::Albums),
            "playlists" => Self::Go(View::Playlists),
            "favorites" | "favs" => Self::Go(View::Favorites),
            "album" => Self::Go(View::AlbumDetail(position(rest)?)),
            "playlist" => Self::Go(View::PlaylistDetail(playlist_id(rest)?)),
            "type" => Self::Type(rest.to_string()),
            "search" | "s" => Self::Search(required(rest, "search text")?.to_string()),
            "artist" => Self::Artist(position(rest)?),
            "play" | "p" => Self::Play(position(rest)?),
            "pause" | "toggle" => Self::PlayPause,
            "next" | "n" => Self::Next,
            "prev" | "previous" | "back" => Self::Previous,
            "seek" => Self::Seek(
                rest.parse::<f64>()
                    .map_err(|_| format!("Not a number of seconds: {rest:?}"))?,
            ),
            "vol" | "volume" => Self::Volume(
                rest.parse::<u8>()
                    .ok()
                    .filter(|v| *v <= 100)
                    .ok_or_else(|| format!("Volume must be 0-100, got {rest:?}"))?,
            ),
            "mute" => Self::Mute,
            "repeat" => Self::Repeat,
            "fav" | "like" => Self::Favorite,
            "add" => {
                let (id, item) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let item = if item.trim().is_empty() {
                    None
                } else {
                    Some(position(item)?)
                };
                Self::Add(playlist_id(id)?, item)
            }
            "remove" | "rm" => Self::Remove(position(rest)?),
            "new" => Self::New(required(rest, "playlist name")?.to_string()),
            "delete" => {
                let confirmed = rest.split_whitespace().any(|w| w == "--yes" || w == "-y");
                let id = rest
                    .split_whitespace()
                    .find(|w| !w.starts_with('-'))
                    .unwrap_or_default();
                Self::Delete(playlist_id(id)?, confirmed)
            }
            "status" | "" => Self::Status,
            "list" | "ls" => Self::List,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(format!("Unknown command: {other} (try `help`)")),
        };

        Ok(command)
    }
}

fn required<'a>(value: &'a str, what: &str) -> Result<&'a str, String> {
    if value.is_empty() {
        Err(format!("Missing {what}"))
    } else {
        Ok(value)
    }
}

fn position(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("Expected an item number, got {value:?}")),
    }
}

fn playlist_id(value: &str) -> Result<PlaylistId, String> {
    let value = required(value.trim(), "playlist id")?;
    Ok(PlaylistId::new(value))
}

/// Run the shell until `quit` or end of input
pub async fn run(mut session: Session, mut events: SessionEvents) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut announced: Option<TrackId> = None;

    if let Err(e) = session.navigate(View::Home).await {
        warn!(error = %e, "Failed to load home page");
    }
    println!("{}", render::page(&session));
    println!("Type `help` for commands.");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => {
                        let output = execute(&mut session, command).await;
                        if !output.is_empty() {
                            print!("{output}");
                        }
                    }
                    Err(message) => println!("{message}"),
                }
            }
            Some(event) = events.widget.recv() => {
                session.on_widget_event(event);
            }
            Some(query) = events.search.recv() => {
                if session.on_debounce_fired(query).await.is_some() {
                    print!("{}", render::page(&session));
                }
            }
        }

        announce(&session, &mut announced);
    }

    debug!("Shell closed");
    Ok(())
}

/// Print a line whenever the playing track changes, however it changed
fn announce(session: &Session, announced: &mut Option<TrackId>) {
    let current = session.now_playing().map(|t| t.id.clone());
    if current != *announced {
        if let Some(track) = session.now_playing() {
            println!("Now playing: {} - {}", track.title, track.artist);
        }
        *announced = current;
    }
}

/// Apply one command and return what to print
pub async fn execute(session: &mut Session, command: Command) -> String {
    let mut out = String::new();

    match command {
        Command::Go(view) => match session.navigate(view).await {
            Ok(()) => out.push_str(&render::page(session)),
            Err(e) => {
                let _ = writeln!(out, "{e}");
            }
        },
        Command::Type(text) => {
            session.query_input(&text);
        }
        Command::Search(query) => {
            session.submit_search(&query).await;
            out.push_str(&render::page(session));
        }
        Command::Artist(index) => match session.artists().get(index).map(|a| a.name.clone()) {
            Some(name) => {
                session.artist_click(&name).await;
                out.push_str(&render::page(session));
            }
            None => out.push_str("Open `artists` and pick a listed number\n"),
        },
        Command::Play(index) => {
            if let Err(e) = play(session, index) {
                let _ = writeln!(out, "{e}");
            }
        }
        Command::PlayPause => {
            session.toggle_play_pause();
            let _ = writeln!(out, "{}", render::status(session));
        }
        Command::Next => {
            session.next();
        }
        Command::Previous => {
            session.previous();
        }
        Command::Seek(seconds) => session.seek(seconds),
        Command::Volume(level) => session.set_volume(level),
        Command::Mute => {
            let muted = session.toggle_mute();
            let _ = writeln!(out, "{}", if muted { "Muted" } else { "Unmuted" });
        }
        Command::Repeat => {
            let on = session.toggle_repeat();
            let _ = writeln!(out, "Repeat {}", if on { "on" } else { "off" });
        }
        Command::Favorite => match session.toggle_favorite_current().await {
            Some(true) => out.push_str("Added to favorites\n"),
            Some(false) => out.push_str("Removed from favorites\n"),
            None => out.push_str("Nothing playing\n"),
        },
        Command::Add(id, item) => {
            let track = match item {
                Some(n) => session.results().get(n).cloned(),
                None => session.now_playing().cloned(),
            };
            match track {
                Some(track) => match session.add_to_playlist(&id, track).await {
                    Ok(true) => out.push_str("Added\n"),
                    Ok(false) => out.push_str("Already in playlist\n"),
                    Err(e) => {
                        let _ = writeln!(out, "{e}");
                    }
                },
                None => out.push_str("No such track\n"),
            }
        }
        Command::Remove(index) => {
            let removed = match session.view().clone() {
                View::PlaylistDetail(id) => session.remove_from_playlist(&id, index).await,
                View::Favorites => Ok(session.remove_favorite(index).await),
                _ => Ok(false),
            };
            match removed {
                Ok(true) => out.push_str(&render::page(session)),
                Ok(false) => out.push_str("Nothing removed\n"),
                Err(e) => {
                    let _ = writeln!(out, "{e}");
                }
            }
        }
        Command::New(name) => match session.create_playlist(&name).await {
            Some(id) => {
                let _ = writeln!(out, "Created playlist [{id}]");
            }
            None => out.push_str("Playlist name cannot be blank\n"),
        },
        Command::Delete(id, confirmed) => match session.delete_playlist(&id, confirmed).await {
            Ok(true) => {
                let _ = writeln!(out, "Deleted playlist [{id}]");
            }
            Ok(false) => {
                let _ = writeln!(out, "Confirm with `delete {id} --yes`");
            }
            Err(e) => {
                let _ = writeln!(out, "{e}");
            }
        },
        Command::Status => {
            let _ = writeln!(out, "{}", render::status(session));
        }
        Command::List => out.push_str(&render::page(session)),
        Command::Help => {
            let _ = writeln!(out, "{HELP}");
        }
        Command::Quit => {}
    }

    out
}

/// `play <n>` means whatever item n is on the current page
fn play(session: &mut Session, index: usize) -> tunebox_core::Result<()> {
    if !session.query().is_empty() && !session.results().is_empty() {
        session.select_result(index);
        return Ok(());
    }

    match session.view().clone() {
        View::Home => session.play_home(index),
        View::AlbumDetail(album) => session.play_album_song(album, index),
        View::PlaylistDetail(id) => session.play_playlist_song(&id, index),
        View::Favorites => session.play_favorites(index),
        View::Artists | View::Albums | View::Playlists => Err(
            tunebox_core::TuneboxError::invalid_input("Nothing to play on this page"),
        ),
    }
}
