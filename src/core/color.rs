//! Disc colors and per-color data storage.
//!
//! ## Color
//!
//! The two sides of an Othello game. Dark always moves first. On the wire
//! the colors are encoded as `1` (dark) and `2` (light), the same codes used
//! for occupied cells in a board literal.
//!
//! ## ColorMap
//!
//! Fixed two-entry storage indexed by `Color`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Dark,
    Light,
}

impl Color {
    /// Both colors in move order.
    pub const ALL: [Color; 2] = [Color::Dark, Color::Light];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Dark => Color::Light,
            Color::Light => Color::Dark,
        }
    }

    /// Wire code: 1 for dark, 2 for light.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Color::Dark => 1,
            Color::Light => 2,
        }
    }

    /// Parse a wire code.
    ///
    /// ```
    /// use rust_othello::core::Color;
    ///
    /// assert_eq!(Color::from_code(1), Some(Color::Dark));
    /// assert_eq!(Color::from_code(2), Some(Color::Light));
    /// assert_eq!(Color::from_code(0), None);
    /// ```
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Color> {
        match code {
            1 => Some(Color::Dark),
            2 => Some(Color::Light),
            _ => None,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Dark => 0,
            Color::Light => 1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Dark => f.write_str("dark"),
            Color::Light => f.write_str("light"),
        }
    }
}

/// Per-color data storage.
///
/// ## Example
///
/// ```
/// use rust_othello::core::{Color, ColorMap};
///
/// let mut discs: ColorMap<u32> = ColorMap::from_pair(2, 2);
/// discs[Color::Light] += 1;
///
/// assert_eq!(discs[Color::Dark], 2);
/// assert_eq!(discs[Color::Light], 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: [factory(Color::Dark), factory(Color::Light)],
        }
    }

    /// Create a map from the dark and light values.
    pub fn from_pair(dark: T, light: T) -> Self {
        Self { data: [dark, light] }
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        &self.data[color.index()]
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        &mut self.data[color.index()]
    }
}
