//! Curated browse lists
//!
//! The albums and artists pages are not driven by the catalog's own browse
//! endpoints; they are fixed lists resolved through ordinary searches.

use rand::seq::SliceRandom;
use rand::Rng;
use tunebox_core::Artist;

/// Album queries shown on the albums page, in display order
pub const ALBUM_QUERIES: &[&str] = &[
    "wave to earth 0.1 flaws and all.",
    "Kendrick Lamar GNX",
    "SZA SOS",
    "Sabrina Carpenter Short n Sweet",
    "Tyler the Creator Chromakopia",
    "Taylor Swift Midnights",
    "TWICE STRATEGY",
    "brb. relationship sh*t",
];

/// Songs fetched per curated album
pub const ALBUM_PAGE_SIZE: u32 = 5;

/// Placeholder artist when an album query returns nothing
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Artists pool for the artists page
pub const ARTIST_NAMES: &[&str] = &[
    "Drake",
    "Ariana Grande",
    "Eminem",
    "Justin Bieber",
    "Ed Sheeran",
    "Taylor Swift",
    "Beyoncé",
    "Kanye West",
    "Rihanna",
    "Katy Perry",
    "Bruno Mars",
    "Billie Eilish",
    "Post Malone",
    "Doja Cat",
    "Sia",
    "Shawn Mendes",
    "Selena Gomez",
    "The Weeknd",
    "Imagine Dragons",
    "Lady Gaga",
    "Nicki Minaj",
    "Camila Cabello",
    "Olivia Rodrigo",
    "Harry Styles",
    "Lana Del Rey",
    "Lil Nas X",
    "21 Savage",
    "J. Cole",
    "Travis Scott",
    "Bad Bunny",
    "Charlie Puth",
    "Dua Lipa",
    "Maroon 5",
    "Adele",
    "BLACKPINK",
    "BTS",
    "Zayn",
    "Niall Horan",
    "Halsey",
    "Jason Derulo",
];

/// Artists shown per page load
pub const ARTIST_PAGE_SIZE: usize = 30;

/// Random `limit` artists from the curated pool, without repeats
pub fn curated_artists<R: Rng + ?Sized>(rng: &mut R, limit: usize) -> Vec<Artist> {
    ARTIST_NAMES
        .choose_multiple(rng, limit)
        .map(|name| Artist::new(*name))
        .collect()
}

/// Search text for a curated album query
pub fn album_search_text(query: &str) -> String {
    format!("{query} album")
}
