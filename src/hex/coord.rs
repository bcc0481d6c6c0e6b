//! Cube-coordinate hex math.
//!
//! Every board cell is addressed by cube coordinates `(q, r, s)` with the
//! invariant `q + r + s == 0`. The canonical identifier of a hex is the
//! string `"q,r,s"`, and it is the only legal map key for board occupancy:
//! `Hex` serializes as its id, so serialized board maps are keyed
//! canonically and no two distinct coordinate triples share a key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

/// A hex addressed by cube coordinates.
///
/// Invariant: `q + r + s == 0`. Constructors maintain it; `Hex::cube`
/// debug-asserts it for callers supplying all three components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

/// Malformed canonical hex id.
///
/// Raised when an id does not parse into exactly three integers summing
/// to zero. Well-formed callers never produce this; it indicates a caller
/// bug, not a game condition.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex id `{0}`")]
pub struct InvalidHexId(pub String);

/// The six unit directions, clockwise from east.
pub const DIRECTIONS: [Hex; 6] = [
    Hex { q: 1, r: 0, s: -1 },
    Hex { q: 1, r: -1, s: 0 },
    Hex { q: 0, r: -1, s: 1 },
    Hex { q: -1, r: 0, s: 1 },
    Hex { q: -1, r: 1, s: 0 },
    Hex { q: 0, r: 1, s: -1 },
];

impl Hex {
    /// Create a hex from axial coordinates, deriving `s`.
    #[must_use]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r, s: -q - r }
    }

    /// Create a hex from all three cube components.
    #[must_use]
    pub fn cube(q: i32, r: i32, s: i32) -> Self {
        debug_assert!(q + r + s == 0, "cube coordinates must sum to zero");
        Self { q, r, s }
    }

    /// The origin hex `(0, 0, 0)`.
    #[must_use]
    pub const fn origin() -> Self {
        Self { q: 0, r: 0, s: 0 }
    }

    /// Scale by an integer factor.
    #[must_use]
    pub fn scale(self, k: i32) -> Self {
        Self {
            q: self.q * k,
            r: self.r * k,
            s: self.s * k,
        }
    }

    /// Distance between two hexes: `(|dq| + |dr| + |ds|) / 2`.
    #[must_use]
    pub fn distance(self, other: Hex) -> u32 {
        let d = self - other;
        ((d.q.abs() + d.r.abs() + d.s.abs()) / 2) as u32
    }

    /// Distance from the origin.
    #[must_use]
    pub fn length(self) -> u32 {
        self.distance(Hex::origin())
    }

    /// The neighbor in one of the six fixed unit directions.
    #[must_use]
    pub fn neighbor(self, direction: usize) -> Self {
        self + DIRECTIONS[direction % 6]
    }

    /// All six neighbors, in direction order.
    #[must_use]
    pub fn neighbors(self) -> SmallVec<[Hex; 6]> {
        DIRECTIONS.iter().map(|&d| self + d).collect()
    }

    /// Check adjacency (distance exactly 1).
    #[must_use]
    pub fn is_adjacent(self, other: Hex) -> bool {
        self.distance(other) == 1
    }

    /// The canonical id `"q,r,s"`.
    #[must_use]
    pub fn id(self) -> String {
        self.to_string()
    }
}

impl std::ops::Add for Hex {
    type Output = Hex;

    fn add(self, rhs: Hex) -> Hex {
        Hex {
            q: self.q + rhs.q,
            r: self.r + rhs.r,
            s: self.s + rhs.s,
        }
    }
}

impl std::ops::Sub for Hex {
    type Output = Hex;

    fn sub(self, rhs: Hex) -> Hex {
        Hex {
            q: self.q - rhs.q,
            r: self.r - rhs.r,
            s: self.s - rhs.s,
        }
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.q, self.r, self.s)
    }
}

impl FromStr for Hex {
    type Err = InvalidHexId;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        let mut parts = id.split(',');
        let mut next = || -> Result<i32, InvalidHexId> {
            parts
                .next()
                .and_then(|p| p.trim().parse().ok())
                .ok_or_else(|| InvalidHexId(id.to_string()))
        };
        let (q, r, s) = (next()?, next()?, next()?);
        if parts.next().is_some() || q + r + s != 0 {
            return Err(InvalidHexId(id.to_string()));
        }
        Ok(Hex { q, r, s })
    }
}

// Serialize as the canonical id so hexes are legal, canonical map keys.
impl Serialize for Hex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Hex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        id.parse().map_err(serde::de::Error::custom)
    }
}

/// A fractional hex, produced by pixel conversion and interpolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractionalHex {
    pub q: f64,
    pub r: f64,
    pub s: f64,
}

impl FractionalHex {
    #[must_use]
    pub fn new(q: f64, r: f64, s: f64) -> Self {
        Self { q, r, s }
    }

    /// Round to the nearest hex by the largest-remainder rule among q/r/s.
    #[must_use]
    pub fn round(self) -> Hex {
        let mut q = self.q.round();
        let mut r = self.r.round();
        let mut s = self.s.round();

        let dq = (q - self.q).abs();
        let dr = (r - self.r).abs();
        let ds = (s - self.s).abs();

        if dq > dr && dq > ds {
            q = -r - s;
        } else if dr > ds {
            r = -q - s;
        } else {
            s = -q - r;
        }

        Hex {
            q: q as i32,
            r: r as i32,
            s: s as i32,
        }
    }
}

/// Linear interpolation between two hexes, for animation paths.
#[must_use]
pub fn lerp(a: Hex, b: Hex, t: f64) -> FractionalHex {
    FractionalHex::new(
        f64::from(a.q) + (f64::from(b.q) - f64::from(a.q)) * t,
        f64::from(a.r) + (f64::from(b.r) - f64::from(a.r)) * t,
        f64::from(a.s) + (f64::from(b.s) - f64::from(a.s)) * t,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_s() {
        let h = Hex::new(2, -1);
        assert_eq!(h.s, -1);
        assert_eq!(h.q + h.r + h.s, 0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Hex::new(1, -2);
        let b = Hex::new(3, 0);

        assert_eq!(a + b, Hex::new(4, -2));
        assert_eq!(b - a, Hex::new(2, 2));
        assert_eq!(a.scale(2), Hex::cube(2, -4, 2));
    }

    #[test]
    fn test_distance() {
        assert_eq!(Hex::origin().distance(Hex::new(3, 0)), 3);
        assert_eq!(Hex::new(1, -1).distance(Hex::new(1, -1)), 0);
        assert_eq!(Hex::new(-2, 1).distance(Hex::new(2, -1)), 4);
        // Symmetry
        let (a, b) = (Hex::new(-3, 2), Hex::new(1, 1));
        assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn test_neighbors() {
        let h = Hex::origin();
        let ns = h.neighbors();

        assert_eq!(ns.len(), 6);
        for n in &ns {
            assert_eq!(h.distance(*n), 1);
            assert_eq!(n.q + n.r + n.s, 0);
        }
        assert_eq!(h.neighbor(0), Hex::cube(1, 0, -1));
        assert_eq!(h.neighbor(6), h.neighbor(0)); // wraps
    }

    #[test]
    fn test_adjacency() {
        assert!(Hex::origin().is_adjacent(Hex::new(1, 0)));
        assert!(!Hex::origin().is_adjacent(Hex::new(2, 0)));
        assert!(!Hex::origin().is_adjacent(Hex::origin()));
    }

    #[test]
    fn test_id_round_trip() {
        let h = Hex::new(-2, 3);
        assert_eq!(h.id(), "-2,3,-1");
        assert_eq!("-2,3,-1".parse::<Hex>().unwrap(), h);
    }

    #[test]
    fn test_invalid_ids() {
        assert!("".parse::<Hex>().is_err());
        assert!("1,2".parse::<Hex>().is_err());
        assert!("1,2,3,4".parse::<Hex>().is_err());
        assert!("a,b,c".parse::<Hex>().is_err());
        // Parses but violates the invariant
        assert!("1,1,1".parse::<Hex>().is_err());
    }

    #[test]
    fn test_round_exact() {
        let f = FractionalHex::new(2.0, -1.0, -1.0);
        assert_eq!(f.round(), Hex::cube(2, -1, -1));
    }

    #[test]
    fn test_round_preserves_invariant() {
        let f = FractionalHex::new(1.6, -0.3, -1.3);
        let h = f.round();
        assert_eq!(h.q + h.r + h.s, 0);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Hex::new(0, 0);
        let b = Hex::new(4, -2);

        assert_eq!(lerp(a, b, 0.0).round(), a);
        assert_eq!(lerp(a, b, 1.0).round(), b);

        let mid = lerp(a, b, 0.5).round();
        assert_eq!(mid.q + mid.r + mid.s, 0);
    }

    #[test]
    fn test_serde_as_id() {
        let h = Hex::new(1, -3);
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, "\"1,-3,2\"");
        let back: Hex = serde_json::from_str(&json).unwrap();
        assert_eq!(back, h);
    }

    #[test]
    fn test_serde_map_key() {
        use std::collections::BTreeMap;

        let mut map = BTreeMap::new();
        map.insert(Hex::new(0, 1), 7);
        map.insert(Hex::new(-1, 0), 9);

        let json = serde_json::to_string(&map).unwrap();
        let back: BTreeMap<Hex, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
