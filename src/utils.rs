use std::f64::consts::PI;
use std::fmt::Display;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A 3-component double-precision vector. Used for both points and
/// directions; `Color` wraps one of these rather than duplicating the
/// arithmetic.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    values: (f64, f64, f64),
}

pub type Vec3 = Point3;

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Point3 {
        Point3 { values: (x, y, z) }
    }

    pub const fn origin() -> Point3 {
        Point3::new(0.0, 0.0, 0.0)
    }

    pub fn random_vec3(rng: &mut impl Rng) -> Point3 {
        Point3::new(rng.random(), rng.random(), rng.random())
    }

    pub fn random_vec3_range(rng: &mut impl Rng, min: f64, max: f64) -> Point3 {
        Point3::new(
            rng.random_range(min..max),
            rng.random_range(min..max),
            rng.random_range(min..max),
        )
    }

    pub fn random_in_unit_disk(rng: &mut impl Rng) -> Point3 {
        loop {
            let p = Point3::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0), 0.0);
            if p.length_squared() < 1.0 {
                return p;
            }
        }
    }

    /// Rejection-samples a unit vector uniformly distributed on the sphere.
    pub fn random_unit_vector(rng: &mut impl Rng) -> Vec3 {
        loop {
            let p = Point3::random_vec3_range(rng, -1.0, 1.0);
            let lensq = p.length_squared();
            if 1e-160 < lensq && lensq <= 1.0 {
                return p / lensq.sqrt();
            }
        }
    }

    pub fn random_on_hemisphere(rng: &mut impl Rng, normal: &Vec3) -> Vec3 {
        let on_sphere = Point3::random_unit_vector(rng);
        if on_sphere.dot(normal) > 0.0 {
            on_sphere
        } else {
            -on_sphere
        }
    }

    pub fn reflect(v: &Vec3, n: &Vec3) -> Vec3 {
        *v - *n * (2.0 * v.dot(n))
    }

    pub fn refract(uv: &Vec3, n: &Vec3, etai_over_etat: f64) -> Vec3 {
        let cos_theta = (-*uv).dot(n).min(1.0);
        let r_out_perp = (*uv + *n * cos_theta) * etai_over_etat;
        let r_out_parallel = *n * -((1.0 - r_out_perp.length_squared()).abs().sqrt());
        r_out_perp + r_out_parallel
    }

    pub fn x(&self) -> f64 {
        self.values.0
    }
    pub fn y(&self) -> f64 {
        self.values.1
    }
    pub fn z(&self) -> f64 {
        self.values.2
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> f64 {
        self.values.0 * self.values.0 + self.values.1 * self.values.1 + self.values.2 * self.values.2
    }

    /// True if every component is smaller than `1e-8` in absolute value.
    pub fn near_zero(&self) -> bool {
        let eps = 1e-8;
        self.values.0.abs() < eps && self.values.1.abs() < eps && self.values.2.abs() < eps
    }

    pub fn dot(&self, rhs: &Vec3) -> f64 {
        self.values.0 * rhs.values.0 + self.values.1 * rhs.values.1 + self.values.2 * rhs.values.2
    }

    pub fn cross(&self, rhs: &Vec3) -> Vec3 {
        Point3::new(
            self.values.1 * rhs.values.2 - self.values.2 * rhs.values.1,
            self.values.2 * rhs.values.0 - self.values.0 * rhs.values.2,
            self.values.0 * rhs.values.1 - self.values.1 * rhs.values.0,
        )
    }

    pub fn unit_vector(self) -> Vec3 {
        let len = self.length();
        self / len
    }

    /// Componentwise minimum.
    pub fn min(&self, rhs: &Vec3) -> Vec3 {
        Point3::new(self.x().min(rhs.x()), self.y().min(rhs.y()), self.z().min(rhs.z()))
    }

    /// Componentwise maximum.
    pub fn max(&self, rhs: &Vec3) -> Vec3 {
        Point3::new(self.x().max(rhs.x()), self.y().max(rhs.y()), self.z().max(rhs.z()))
    }
}

impl Neg for Point3 {
    type Output = Point3;
    fn neg(self) -> Point3 {
        Point3::new(-self.values.0, -self.values.1, -self.values.2)
    }
}

impl AddAssign for Point3 {
    fn add_assign(&mut self, rhs: Point3) {
        self.values.0 += rhs.values.0;
        self.values.1 += rhs.values.1;
        self.values.2 += rhs.values.2;
    }
}

impl MulAssign<f64> for Point3 {
    fn mul_assign(&mut self, rhs: f64) {
        self.values.0 *= rhs;
        self.values.1 *= rhs;
        self.values.2 *= rhs;
    }
}

impl DivAssign<f64> for Point3 {
    fn div_assign(&mut self, rhs: f64) {
        *self *= 1.0 / rhs;
    }
}

impl Add for Point3 {
    type Output = Point3;
    fn add(self, rhs: Point3) -> Point3 {
        Point3::new(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }
}

impl Sub for Point3 {
    type Output = Point3;
    fn sub(self, rhs: Point3) -> Point3 {
        Point3::new(self.x() - rhs.x(), self.y() - rhs.y(), self.z() - rhs.z())
    }
}

impl Mul<f64> for Point3 {
    type Output = Point3;
    fn mul(self, rhs: f64) -> Point3 {
        Point3::new(self.x() * rhs, self.y() * rhs, self.z() * rhs)
    }
}

impl Mul<Point3> for f64 {
    type Output = Point3;
    fn mul(self, rhs: Point3) -> Point3 {
        rhs * self
    }
}

impl Mul for Point3 {
    type Output = Point3;
    fn mul(self, rhs: Point3) -> Point3 {
        Point3::new(self.x() * rhs.x(), self.y() * rhs.y(), self.z() * rhs.z())
    }
}

impl Div<f64> for Point3 {
    type Output = Point3;
    fn div(self, rhs: f64) -> Point3 {
        self * (1.0 / rhs)
    }
}

impl Display for Point3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.x(), self.y(), self.z())
    }
}

/// Radiance / RGB color. A thin wrapper around `Point3` rather than a
/// distinct vector type, same as the vector it wraps. Unlike a display
/// color, components are *not* clamped to `[0, 1]` on construction or by
/// any arithmetic op here: an emissive material's `color * intensity` can
/// exceed 1, and accumulated path radiance can too. Only the renderer's
/// final gamma-encode and the PPM dump enforce bounds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Color {
    rgb: Point3,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64) -> Color {
        Color {
            rgb: Point3::new(r, g, b),
        }
    }

    pub const fn black() -> Color {
        Color::new(0.0, 0.0, 0.0)
    }

    pub const fn white() -> Color {
        Color::new(1.0, 1.0, 1.0)
    }

    pub fn random_color(rng: &mut impl Rng) -> Color {
        Color {
            rgb: Point3::random_vec3(rng),
        }
    }

    pub fn random_color_range(rng: &mut impl Rng, low: f64, high: f64) -> Color {
        Color {
            rgb: Point3::random_vec3_range(rng, low, high),
        }
    }

    pub fn r(&self) -> f64 {
        self.rgb.x()
    }
    pub fn g(&self) -> f64 {
        self.rgb.y()
    }
    pub fn b(&self) -> f64 {
        self.rgb.z()
    }

    pub fn as_vec3(&self) -> Vec3 {
        self.rgb
    }

    /// `sqrt` gamma-2 encoding. Non-finite input is not handled here; see
    /// `Renderer`'s NaN policy.
    pub fn gamma_encode(&self) -> Color {
        Color::new(
            gamma_channel(self.r()),
            gamma_channel(self.g()),
            gamma_channel(self.b()),
        )
    }

    /// `⌊clamp(c, 0, 0.999) * 256⌋` per channel, the exact PPM byte rule.
    pub fn to_ppm_bytes(&self) -> (u8, u8, u8) {
        let scale = |c: f64| (c.clamp(0.0, 0.999) * 256.0) as u8;
        (scale(self.r()), scale(self.g()), scale(self.b()))
    }
}

fn gamma_channel(c: f64) -> f64 {
    if c > 0.0 {
        c.sqrt()
    } else {
        0.0
    }
}

impl From<Vec3> for Color {
    fn from(v: Vec3) -> Color {
        Color { rgb: v }
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        self.rgb += rhs.rgb;
    }
}

impl MulAssign<f64> for Color {
    fn mul_assign(&mut self, rhs: f64) {
        self.rgb *= rhs;
    }
}

impl DivAssign<f64> for Color {
    fn div_assign(&mut self, rhs: f64) {
        self.rgb /= rhs;
    }
}

impl Add for Color {
    type Output = Color;
    fn add(self, rhs: Color) -> Color {
        Color {
            rgb: self.rgb + rhs.rgb,
        }
    }
}

impl Sub for Color {
    type Output = Color;
    fn sub(self, rhs: Color) -> Color {
        Color {
            rgb: self.rgb - rhs.rgb,
        }
    }
}

impl Mul<f64> for Color {
    type Output = Color;
    fn mul(self, rhs: f64) -> Color {
        Color { rgb: self.rgb * rhs }
    }
}

impl Mul<Color> for f64 {
    type Output = Color;
    fn mul(self, rhs: Color) -> Color {
        rhs * self
    }
}

/// Componentwise (Hadamard) product, used for attenuation ⊙ incoming.
impl Mul for Color {
    type Output = Color;
    fn mul(self, rhs: Color) -> Color {
        Color {
            rgb: self.rgb * rhs.rgb,
        }
    }
}

impl Div<f64> for Color {
    type Output = Color;
    fn div(self, rhs: f64) -> Color {
        Color { rgb: self.rgb / rhs }
    }
}

/// A closed range `[min, max]` of doubles, with infinities as sentinels
/// for "unbounded". Default (and `UNIVERSE`) is `[-inf, +inf]`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct Interval {
    range: (f64, f64),
}

impl Default for Interval {
    fn default() -> Interval {
        Interval::UNIVERSE
    }
}

impl Interval {
    pub const fn new(min: f64, max: f64) -> Interval {
        Interval { range: (min, max) }
    }

    /// Pads an interval on either side by half the parameter.
    pub fn pad(self, delta: f64) -> Interval {
        let padding = delta / 2.0;
        Interval::new(self.min() - padding, self.max() + padding)
    }

    /// Builds the hull of two intervals.
    pub fn tight_enclose(a: &Interval, b: &Interval) -> Interval {
        let min = a.min().min(b.min());
        let max = a.max().max(b.max());
        Interval::new(min, max)
    }

    pub fn min(&self) -> f64 {
        self.range.0
    }
    pub fn max(&self) -> f64 {
        self.range.1
    }

    pub fn size(&self) -> f64 {
        self.range.1 - self.range.0
    }

    /// Inclusive containment.
    pub fn contains(&self, x: f64) -> bool {
        self.range.0 <= x && x <= self.range.1
    }

    /// Exclusive containment.
    pub fn surrounds(&self, x: f64) -> bool {
        self.range.0 < x && x < self.range.1
    }

    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min(), self.max())
    }

    pub const EMPTY: Interval = Interval::new(f64::INFINITY, -f64::INFINITY);
    pub const UNIVERSE: Interval = Interval::new(-f64::INFINITY, f64::INFINITY);
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neg_test() {
        let v = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(-v, Point3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn dot_and_cross() {
        let a = Point3::new(1.0, 0.0, 0.0);
        let b = Point3::new(0.0, 1.0, 0.0);
        assert_eq!(a.dot(&b), 0.0);
        assert_eq!(a.cross(&b), Point3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn color_can_exceed_one() {
        let c = Color::new(2.0, 3.0, 0.5);
        assert_eq!(c.r(), 2.0);
        assert_eq!(c.g(), 3.0);
    }

    #[test]
    fn gamma_is_sqrt_and_monotone() {
        let a = Color::new(0.25, 0.0, 1.0).gamma_encode();
        assert_eq!(a.r(), 0.5);
        assert_eq!(a.g(), 0.0);
        assert_eq!(a.b(), 1.0);

        let lo = Color::new(0.1, 0.0, 0.0).gamma_encode().r();
        let hi = Color::new(0.9, 0.0, 0.0).gamma_encode().r();
        assert!(hi > lo);
    }

    #[test]
    fn interval_contains_and_surrounds() {
        let i = Interval::new(0.0, 1.0);
        assert!(i.contains(0.0) && i.contains(1.0));
        assert!(!i.surrounds(0.0) && !i.surrounds(1.0));
        assert!(i.surrounds(0.5));
    }

    #[test]
    fn elementwise_min_max() {
        let a = Point3::new(1.0, 5.0, -2.0);
        let b = Point3::new(3.0, -1.0, 0.0);
        assert_eq!(a.min(&b), Point3::new(1.0, -1.0, -2.0));
        assert_eq!(a.max(&b), Point3::new(3.0, 5.0, 0.0));
    }

    #[test]
    fn interval_hull() {
        let a = Interval::new(0.0, 1.0);
        let b = Interval::new(-1.0, 0.5);
        let c = Interval::tight_enclose(&a, &b);
        assert_eq!(c.min(), -1.0);
        assert_eq!(c.max(), 1.0);
    }

    #[test]
    fn ppm_byte_rule() {
        let c = Color::new(1.5, -0.3, 0.5);
        let (r, g, b) = c.to_ppm_bytes();
        assert_eq!(r, 255);
        assert_eq!(g, 0);
        assert_eq!(b, 128);
    }
}
