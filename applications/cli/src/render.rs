//! Plain-text rendering of session state

use std::fmt::Write;

use tunebox_core::{Playlist, Track};
use tunebox_playback::{format_time, Progress};

const BAR_WIDTH: usize = 20;

use crate::session::{Session, View};

/// One numbered line per track
pub fn track_list(tracks: &[Track]) -> String {
    if tracks.is_empty() {
        return "  (empty)\n".to_string();
    }

    let mut out = String::new();
    for (i, track) in tracks.iter().enumerate() {
        let _ = writeln!(out, "  {:>2}. {} - {}", i + 1, track.title, track.artist);
    }
    out
}

pub fn playlist_list(playlists: &[Playlist]) -> String {
    let mut out = String::new();
    for playlist in playlists {
        let marker = if playlist.is_reserved() { "*" } else { " " };
        let _ = writeln!(
            out,
            " {marker}[{}] {} ({} songs)",
            playlist.id,
            playlist.name,
            playlist.len()
        );
    }
    out
}

/// The page for the current view, or the search results while a query is active
pub fn page(session: &Session) -> String {
    let mut out = String::new();

    if !session.query().is_empty() && !session.results().is_empty() {
        let _ = writeln!(out, "Results for \"{}\":", session.query());
        out.push_str(&track_list(session.results()));
        return out;
    }

    match session.view() {
        View::Home => {
            out.push_str("Trending:\n");
            out.push_str(&track_list(&session.home().trending));
            out.push_str("Top artists:\n");
            for track in &session.home().top_artists {
                let _ = writeln!(out, "  - {}", track.artist);
            }
            out.push_str("Top albums:\n");
            for track in &session.home().top_albums {
                let _ = writeln!(out, "  - {}", track.title);
            }
        }
        View::Artists => {
            out.push_str("Artists:\n");
            for (i, artist) in session.artists().iter().enumerate() {
                let _ = writeln!(out, "  {:>2}. {}", i + 1, artist.name);
            }
        }
        View::Albums => {
            out.push_str("Albums:\n");
            for (i, album) in session.albums().iter().enumerate() {
                let _ = writeln!(
                    out,
                    "  {:>2}. {} - {} ({} songs)",
                    i + 1,
                    album.name,
                    album.artist,
                    album.songs.len()
                );
            }
        }
        View::AlbumDetail(index) => match session.albums().get(*index) {
            Some(album) => {
                let _ = writeln!(out, "{} - {}", album.name, album.artist);
                out.push_str(&track_list(&album.songs));
            }
            None => out.push_str("Album not found\n"),
        },
        View::Playlists => {
            out.push_str("Playlists:\n");
            out.push_str(&playlist_list(&session.playlists()));
        }
        View::PlaylistDetail(id) => match session.playlist(id) {
            Ok(playlist) => {
                let _ = writeln!(out, "{}:", playlist.name);
                out.push_str(&track_list(&playlist.songs));
            }
            Err(_) => out.push_str("Playlist not found\n"),
        },
        View::Favorites => {
            out.push_str("Favorites:\n");
            out.push_str(&track_list(session.favorites()));
        }
    }

    out
}

/// Bottom-bar equivalent: track, progress and player flags
pub fn status(session: &Session) -> String {
    let Some(track) = session.now_playing() else {
        return "Nothing playing".to_string();
    };

    let engine = session.engine();
    let progress = session.progress();
    let state = if engine.is_playing() { ">" } else { "||" };
    let heart = if session.is_current_favorite() { " <3" } else { "" };
    let repeat = if engine.repeat() { " [repeat]" } else { "" };
    let volume = if engine.is_muted() {
        "muted".to_string()
    } else {
        format!("vol {}", engine.volume())
    };

    format!(
        "{state} {} - {}{heart}  {} {} / {}  {volume}{repeat}",
        track.title,
        track.artist,
        progress_bar(progress, BAR_WIDTH),
        format_time(progress.elapsed),
        format_time(progress.duration),
    )
}

/// `[####------]` scaled to `width` cells
pub fn progress_bar(progress: Progress, width: usize) -> String {
    let filled = ((progress.fraction() * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
