use crate::utils::{Point3, Vec3};

/// A parametric line: `origin + t * direction`. `direction` need not be
/// unit length.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Ray {
    origin: Point3,
    direction: Vec3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vec3) -> Ray {
        Ray { origin, direction }
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_follows_the_parametric_line() {
        let r = Ray::new(Point3::new(1.0, 1.0, 1.0), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(r.at(0.0), Point3::new(1.0, 1.0, 1.0));
        assert_eq!(r.at(3.0), Point3::new(1.0, 1.0, 4.0));
    }
}
