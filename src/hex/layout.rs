//! Hex-to-pixel projection for rendering layers.

use crate::hex::{FractionalHex, Hex};

/// A point in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Forward and inverse 2x2 conversion matrices plus the starting corner
/// angle, in sixths of a full turn.
#[derive(Clone, Copy, Debug)]
pub struct Orientation {
    pub f: [f64; 4],
    pub b: [f64; 4],
    pub start_angle: f64,
}

const SQRT3: f64 = 1.732_050_807_568_877_2;

/// Pointy-top orientation.
pub const POINTY: Orientation = Orientation {
    f: [SQRT3, SQRT3 / 2.0, 0.0, 3.0 / 2.0],
    b: [SQRT3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0],
    start_angle: 0.5,
};

/// Flat-top orientation.
pub const FLAT: Orientation = Orientation {
    f: [3.0 / 2.0, 0.0, SQRT3 / 2.0, SQRT3],
    b: [2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT3 / 3.0],
    start_angle: 0.0,
};

/// A concrete screen layout: orientation plus per-axis size and origin.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub orientation: Orientation,
    pub size: Point,
    pub origin: Point,
}

impl Layout {
    #[must_use]
    pub const fn new(orientation: Orientation, size: Point, origin: Point) -> Self {
        Self {
            orientation,
            size,
            origin,
        }
    }

    /// Center of a hex in pixel space.
    #[must_use]
    pub fn hex_to_pixel(&self, hex: Hex) -> Point {
        let m = &self.orientation;
        let x = (m.f[0] * f64::from(hex.q) + m.f[1] * f64::from(hex.r)) * self.size.x;
        let y = (m.f[2] * f64::from(hex.q) + m.f[3] * f64::from(hex.r)) * self.size.y;
        Point::new(x + self.origin.x, y + self.origin.y)
    }

    /// Inverse projection to a fractional hex.
    #[must_use]
    pub fn pixel_to_fractional(&self, p: Point) -> FractionalHex {
        let m = &self.orientation;
        let pt = Point::new(
            (p.x - self.origin.x) / self.size.x,
            (p.y - self.origin.y) / self.size.y,
        );
        let q = m.b[0] * pt.x + m.b[1] * pt.y;
        let r = m.b[2] * pt.x + m.b[3] * pt.y;
        FractionalHex::new(q, r, -q - r)
    }

    /// Inverse projection rounded to the containing hex.
    #[must_use]
    pub fn pixel_to_hex(&self, p: Point) -> Hex {
        self.pixel_to_fractional(p).round()
    }

    /// The six corner points of a hex, in corner order.
    #[must_use]
    pub fn corners(&self, hex: Hex) -> [Point; 6] {
        let center = self.hex_to_pixel(hex);
        std::array::from_fn(|i| {
            let angle = std::f64::consts::TAU * (self.orientation.start_angle + i as f64) / 6.0;
            Point::new(
                center.x + self.size.x * angle.cos(),
                center.y + self.size.y * angle.sin(),
            )
        })
    }
}
