/// Single-precision complex number for escape-time iteration.
///
/// The whole orbit computation runs in f32, so the type is deliberately
/// minimal: no trait impls beyond derives, no polar form, just the
/// operations the iteration z <- z^2 + c needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct C {
    pub re: f32,
    pub im: f32,
}

impl C {
    pub fn new(re: f32, im: f32) -> Self {
        C { re, im }
    }

    /// Squared magnitude. Compared against a squared threshold so no
    /// square root is ever taken.
    pub fn abs_sq(&self) -> f32 {
        self.re * self.re + self.im * self.im
    }

    pub fn add(&self, other: C) -> C {
        C::new(self.re + other.re, self.im + other.im)
    }

    pub fn mul(&self, other: C) -> C {
        C::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_matches_hand_expansion() {
        let a = C::new(1.0, 2.0);
        let b = C::new(3.0, -4.0);
        // (1 + 2i)(3 - 4i) = 11 + 2i
        assert_eq!(a.mul(b), C::new(11.0, 2.0));
    }

    #[test]
    fn squaring_i_lands_on_minus_one() {
        let i = C::new(0.0, 1.0);
        assert_eq!(i.mul(i), C::new(-1.0, 0.0));
    }

    #[test]
    fn abs_sq_avoids_the_root() {
        assert_eq!(C::new(3.0, 4.0).abs_sq(), 25.0);
        assert_eq!(C::new(0.0, 0.0).abs_sq(), 0.0);
    }

    #[test]
    fn add_is_componentwise() {
        let z = C::new(0.5, -1.5).add(C::new(0.25, 1.0));
        assert_eq!(z, C::new(0.75, -0.5));
    }
}
