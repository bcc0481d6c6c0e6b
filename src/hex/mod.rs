//! Cube-coordinate hex grid: coordinates, pixel layout, and board shapes.

mod coord;
mod layout;
pub mod shapes;

pub use coord::{lerp, FractionalHex, Hex, InvalidHexId, DIRECTIONS};
pub use layout::{Layout, Orientation, Point, FLAT, POINTY};
