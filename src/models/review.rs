// src/models/review.rs
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of cells in a star indicator.
pub const MAX_STARS: u8 = 5;

/// A star rating, always within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    pub const MAX: Rating = Rating(MAX_STARS);

    pub fn new(value: u8) -> Option<Self> {
        (1..=MAX_STARS).contains(&value).then_some(Rating(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every rating, highest first (the order the dropdown lists them in).
    pub fn all_descending() -> impl Iterator<Item = Rating> {
        (1..=MAX_STARS).rev().map(Rating)
    }
}

impl TryFrom<u8> for Rating {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value).ok_or(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u8::deserialize(deserializer)?;
        Rating::new(raw).ok_or_else(|| {
            serde::de::Error::custom(format!("rating {} is outside 1..={}", raw, MAX_STARS))
        })
    }
}

/// One persisted feedback entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i64,          // Millisecond timestamp, unique within a session
    pub username: String, // Author as typed into the form
    pub rating: Rating,
    pub comment: String,
    pub timestamp: String, // Display date, fixed at creation
    #[serde(default)]
    pub color: String, // Avatar style tag, cosmetic only
}

impl Review {
    /// Avatar letter: first character of the name, upper-cased.
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Filled/empty state of each star cell, left to right.
    pub fn star_cells(&self) -> [bool; MAX_STARS as usize] {
        star_cells(self.rating.get())
    }
}

/// Filled/empty state for a raw star count; anything above five fills every cell.
pub fn star_cells(rating: u8) -> [bool; MAX_STARS as usize] {
    let filled = rating.min(MAX_STARS) as usize;
    std::array::from_fn(|i| i < filled)
}
