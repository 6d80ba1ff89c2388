//! Immutable complex number arithmetic on f64 components.
//!
//! Every operation returns a new value; operands are never modified.
//! Components are stored verbatim, including NaN and infinities, and
//! exceptional results (division by the zero complex, overflow) follow
//! IEEE-754 semantics rather than signaling an error.

use serde::{Deserialize, Serialize};

/// Complex number `re + im·i` with f64 components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    /// Zero constant (additive identity).
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// Create from real and imaginary components, stored verbatim.
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Real component.
    #[inline]
    pub fn re(&self) -> f64 {
        self.re
    }

    /// Imaginary component.
    #[inline]
    pub fn im(&self) -> f64 {
        self.im
    }

    /// Check if zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    /// Magnitude |z|, via hypot to avoid intermediate overflow/underflow
    /// in re² + im².
    pub fn abs(&self) -> f64 {
        libm::hypot(self.re, self.im)
    }

    /// Angle from the positive real axis, in (-π, π].
    pub fn phase(&self) -> f64 {
        libm::atan2(self.im, self.re)
    }

    /// Squared magnitude: |z|² = re² + im²
    #[inline]
    pub fn norm_sq(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Add two complex numbers.
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }

    /// Subtract other from self.
    #[inline]
    pub fn sub(&self, other: &Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }

    /// Multiply two complex numbers: (a + bi)(c + di) = (ac - bd) + (ad + bc)i
    #[inline]
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }

    /// Multiply by f64 scalar.
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            re: self.re * factor,
            im: self.im * factor,
        }
    }

    /// Divide by other, computed as `self · (1/other)`.
    ///
    /// Shares `recip`'s behavior on a zero divisor: non-finite components,
    /// not an error.
    pub fn div(&self, other: &Self) -> Self {
        self.mul(&other.recip())
    }

    /// Complex conjugate: (re, -im).
    #[inline]
    pub fn conj(&self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Multiplicative inverse 1/z.
    ///
    /// A zero input divides by zero and the IEEE-754 result (NaN or
    /// infinity) passes through unchecked.
    pub fn recip(&self) -> Self {
        let d = self.re * self.re + self.im * self.im;
        Self {
            re: self.re / d,
            im: -self.im / d,
        }
    }

    /// Complex exponential: e^z = e^re (cos im + i sin im).
    pub fn exp(&self) -> Self {
        let r = libm::exp(self.re);
        Self {
            re: r * libm::cos(self.im),
            im: r * libm::sin(self.im),
        }
    }

    /// Complex sine: sin(z) = sin re cosh im + i cos re sinh im.
    pub fn sin(&self) -> Self {
        Self {
            re: libm::sin(self.re) * libm::cosh(self.im),
            im: libm::cos(self.re) * libm::sinh(self.im),
        }
    }

    /// Complex cosine: cos(z) = cos re cosh im - i sin re sinh im.
    pub fn cos(&self) -> Self {
        Self {
            re: libm::cos(self.re) * libm::cosh(self.im),
            im: -libm::sin(self.re) * libm::sinh(self.im),
        }
    }

    /// Complex tangent: sin(z) / cos(z).
    ///
    /// Inherits `div`'s precision characteristics near the zeros of cos.
    pub fn tan(&self) -> Self {
        self.sin().div(&self.cos())
    }
}

// Operator forms delegate to the inherent methods so both calling
// conventions produce bit-identical results.

impl std::ops::Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Complex::add(&self, &rhs)
    }
}

impl std::ops::Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Complex::sub(&self, &rhs)
    }
}

impl std::ops::Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Complex::mul(&self, &rhs)
    }
}

impl std::ops::Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl std::ops::Div for Complex {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Complex::div(&self, &rhs)
    }
}

impl std::fmt::Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.im == 0.0 {
            write!(f, "{}", self.re)
        } else if self.re == 0.0 {
            write!(f, "{}i", self.im)
        } else if self.im < 0.0 {
            write!(f, "{} - {}i", self.re, -self.im)
        } else {
            write!(f, "{} + {}i", self.re, self.im)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        let z = Complex::default();
        assert_eq!(z, Complex::ZERO);
        assert!(z.is_zero());
    }

    #[test]
    fn new_stores_components_verbatim() {
        let c = Complex::new(3.5, -4.25);
        assert_eq!(c.re(), 3.5);
        assert_eq!(c.im(), -4.25);
    }

    #[test]
    fn non_finite_components_accepted() {
        let c = Complex::new(f64::NAN, f64::INFINITY);
        assert!(c.re().is_nan());
        assert!(c.im().is_infinite());
    }

    #[test]
    fn conj_is_involution() {
        let c = Complex::new(1.5, -2.5);
        assert_eq!(c.conj().conj(), c);
        assert_eq!(c.conj().im(), 2.5);
    }

    #[test]
    fn norm_sq_known_value() {
        // |3 + 4i|² = 9 + 16 = 25
        assert_eq!(Complex::new(3.0, 4.0).norm_sq(), 25.0);
    }

    #[test]
    fn is_zero_requires_both_components() {
        assert!(Complex::ZERO.is_zero());
        assert!(!Complex::new(1.0, 0.0).is_zero());
        assert!(!Complex::new(0.0, 1.0).is_zero());
    }
}
