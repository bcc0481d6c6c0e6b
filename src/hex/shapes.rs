//! Board shape generators.

use crate::hex::Hex;

/// All hexes within `radius` of the origin, in closed form.
///
/// Yields `3 * radius * (radius + 1) + 1` hexes; radius 0 is just the
/// origin.
#[must_use]
pub fn hexagon(radius: i32) -> Vec<Hex> {
    let mut hexes = Vec::with_capacity((3 * radius * (radius + 1) + 1) as usize);
    for q in -radius..=radius {
        let r_min = (-radius).max(-q - radius);
        let r_max = radius.min(-q + radius);
        for r in r_min..=r_max {
            hexes.push(Hex::new(q, r));
        }
    }
    hexes
}

/// Whether a hex lies within a hexagonal board of the given radius.
#[must_use]
pub fn in_bounds(hex: Hex, radius: i32) -> bool {
    hex.length() <= radius as u32
}
