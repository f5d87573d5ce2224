use std::ops::{Add, Sub, Mul, Div, Neg};
use serde::{Serialize, Deserialize};

/// 2D point in normalized cartesian space (-1..1 on the shorter screen axis)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };
    /// Multiplying by this mirrors a point vertically
    pub const FLIP_Y: Point2D = Point2D { x: 1.0, y: -1.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Component-wise product
    pub fn scale_by(&self, other: &Self) -> Self {
        Self {
            x: self.x * other.x,
            y: self.y * other.y,
        }
    }

    /// Distance to another point
    pub fn distance(&self, other: &Self) -> f64 {
        (*self - *other).length()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Displacement given as heading (degrees, counter-clockwise from +x) and radius
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarOffset {
    pub angle_degrees: f64,
    pub radius: f64,
}

impl PolarOffset {
    pub const fn new(angle_degrees: f64, radius: f64) -> Self {
        Self { angle_degrees, radius }
    }

    pub fn to_cartesian(&self) -> Point2D {
        let (sin, cos) = self.angle_degrees.to_radians().sin_cos();
        Point2D::new(cos * self.radius, sin * self.radius)
    }
}

impl Add for Point2D {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Add<PolarOffset> for Point2D {
    type Output = Self;
    fn add(self, offset: PolarOffset) -> Self {
        self + offset.to_cartesian()
    }
}

impl Sub for Point2D {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f64> for Point2D {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl Div<f64> for Point2D {
    type Output = Self;
    fn div(self, scalar: f64) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl Neg for Point2D {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}
