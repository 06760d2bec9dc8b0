use glam::DVec2;

/// Viewer-side extensions to [`DVec2`].
///
/// The component-wise arithmetic, scalar scaling and `length` come from glam
/// itself; these are the extra operations the scene layer needs.
pub trait VecExt {
    /// Negates the y component only.
    ///
    /// Converts between the world convention (y grows upward) and the surface
    /// convention (y grows downward).
    fn flip_y(self) -> Self;

    /// The angle of the vector in radians, in (-π, π].
    fn direction(self) -> f64;

    /// Rotates the vector by the given angle in radians.
    fn rotate(self, angle: f64) -> Self;

    /// `"(x, y)"`, for diagnostics.
    fn display(self) -> String;

    /// `"(x, y)"` with fixed decimal precision, for diagnostics.
    fn display_fixed(self, digits: usize) -> String;
}

impl VecExt for DVec2 {
    fn flip_y(self) -> Self {
        Self::new(self.x, -self.y)
    }

    fn direction(self) -> f64 {
        f64::atan2(self.y, self.x)
    }

    fn rotate(self, angle: f64) -> Self {
        let cos = f64::cos(angle);
        let sin = f64::sin(angle);
        Self::new(cos * self.x - sin * self.y, sin * self.x + cos * self.y)
    }

    fn display(self) -> String {
        format!("({}, {})", self.x, self.y)
    }

    fn display_fixed(self, digits: usize) -> String {
        format!("({:.digits$}, {:.digits$})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    fn close(a: DVec2, b: DVec2) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn arithmetic() {
        let a = DVec2::new(3.5, -2.0);
        let b = DVec2::new(-1.25, 8.0);

        assert!(close(a + b - b, a));
        assert!(close((a * 3.0) * 0.5, a * 1.5));
        assert_eq!(a * b, DVec2::new(-4.375, -16.0));
        assert_eq!(DVec2::new(3.0, 4.0).length(), 5.0);

        // Division by a zero component is IEEE, not an error
        let div = a / DVec2::new(0.0, 2.0);
        assert!(div.x.is_infinite());
        assert_eq!(div.y, -1.0);
    }

    #[test]
    fn directions() {
        assert_eq!(DVec2::new(1.0, 0.0).direction(), 0.0);
        assert_eq!(DVec2::new(0.0, 3.0).direction(), FRAC_PI_2);
        assert_eq!(DVec2::new(-2.0, 0.0).direction(), PI);

        assert_eq!(DVec2::new(1.0, 2.0).flip_y(), DVec2::new(1.0, -2.0));
        assert!(close(
            VecExt::rotate(DVec2::new(1.0, 0.0), FRAC_PI_2),
            DVec2::new(0.0, 1.0)
        ));
    }

    #[test]
    fn formatting() {
        let v = DVec2::new(1.0, -2.5);
        assert_eq!(v.display(), "(1, -2.5)");
        assert_eq!(v.display_fixed(2), "(1.00, -2.50)");
        assert_eq!(v.display_fixed(0), "(1, -2)");
    }
}
