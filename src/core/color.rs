//! Player colors and per-player storage.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// The two players, identified by color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Orange,
}

impl Color {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Blue => Color::Orange,
            Color::Orange => Color::Blue,
        }
    }

    /// Both colors, in canonical order.
    #[must_use]
    pub const fn both() -> [Color; 2] {
        [Color::Blue, Color::Orange]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Blue => write!(f, "blue"),
            Color::Orange => write!(f, "orange"),
        }
    }
}

/// A value stored once per player, indexable by [`Color`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerPlayer<T> {
    pub blue: T,
    pub orange: T,
}

impl<T> PerPlayer<T> {
    /// Build both slots from a factory taking the color.
    pub fn new(mut factory: impl FnMut(Color) -> T) -> Self {
        Self {
            blue: factory(Color::Blue),
            orange: factory(Color::Orange),
        }
    }

    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        match color {
            Color::Blue => &self.blue,
            Color::Orange => &self.orange,
        }
    }

    pub fn get_mut(&mut self, color: Color) -> &mut T {
        match color {
            Color::Blue => &mut self.blue,
            Color::Orange => &mut self.orange,
        }
    }

    /// Iterate both slots in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::both().into_iter().map(move |c| (c, self.get(c)))
    }
}

impl<T> Index<Color> for PerPlayer<T> {
    type Output = T;

    fn index(&self, color: Color) -> &T {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for PerPlayer<T> {
    fn index_mut(&mut self, color: Color) -> &mut T {
        self.get_mut(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Color::Blue.opponent(), Color::Orange);
        assert_eq!(Color::Orange.opponent(), Color::Blue);
        assert_eq!(Color::Blue.opponent().opponent(), Color::Blue);
    }

    #[test]
    fn test_per_player_indexing() {
        let mut pp = PerPlayer::new(|c| match c {
            Color::Blue => 1,
            Color::Orange => 2,
        });

        assert_eq!(pp[Color::Blue], 1);
        assert_eq!(pp[Color::Orange], 2);

        pp[Color::Blue] += 10;
        assert_eq!(pp[Color::Blue], 11);
    }

    #[test]
    fn test_iter_order() {
        let pp = PerPlayer::new(|c| c.to_string());
        let items: Vec<_> = pp.iter().collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].0, Color::Blue);
        assert_eq!(items[1].0, Color::Orange);
    }

    #[test]
    fn test_serde() {
        let pp = PerPlayer::new(|c| match c {
            Color::Blue => 3,
            Color::Orange => 7,
        });
        let json = serde_json::to_string(&pp).unwrap();
        assert_eq!(json, r#"{"blue":3,"orange":7}"#);

        let color_json = serde_json::to_string(&Color::Orange).unwrap();
        assert_eq!(color_json, "\"orange\"");
    }
}
