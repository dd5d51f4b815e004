use num_rational::Rational64;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A coordinate component that is either an exact rational or a floating-point value.
///
/// Exact values stay exact through addition, subtraction, multiplication and division
/// with other exact values. Any floating operand, an `i64` overflow, or a division by an
/// exact zero promotes the result to [`Number::Float`]. Comparisons are numeric: two exact
/// values compare exactly, any other pair is compared as `f64`.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// An exact rational with `i64` numerator and denominator.
    Exact(Rational64),
    /// A floating-point value.
    Float(f64),
}

impl Number {
    pub fn zero() -> Self {
        Number::Exact(Rational64::zero())
    }

    pub fn one() -> Self {
        Number::Exact(Rational64::from_integer(1))
    }

    /// Builds the exact fraction `numerator / denominator`, reduced to lowest terms.
    ///
    /// Returns `None` when `denominator` is zero or the sign cannot be moved onto the
    /// numerator without overflowing `i64`.
    pub fn ratio(numerator: i64, denominator: i64) -> Option<Self> {
        let (numerator, denominator) = match denominator {
            0 => return None,
            d if d < 0 => (numerator.checked_neg()?, d.checked_neg()?),
            d => (numerator, d),
        };
        Some(Number::Exact(Rational64::new(numerator, denominator)))
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Number::Exact(_))
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Exact(r) => r.is_zero(),
            Number::Float(f) => *f == 0.0,
        }
    }

    /// Returns the value as `f64`, rounding exact fractions to the nearest double.
    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Exact(r) => r
                .to_f64()
                .unwrap_or_else(|| *r.numer() as f64 / *r.denom() as f64),
            Number::Float(f) => *f,
        }
    }

    /// Returns the integer value when this is an exact whole number.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Number::Exact(r) if r.is_integer() => Some(r.to_integer()),
            _ => None,
        }
    }

    pub fn floor(&self) -> Self {
        match self {
            Number::Exact(r) => Number::from(r.numer().div_euclid(*r.denom())),
            Number::Float(f) => Number::Float(f.floor()),
        }
    }

    pub fn abs(&self) -> Self {
        match self {
            Number::Exact(r) if r.is_negative() => -*self,
            Number::Exact(_) => *self,
            Number::Float(f) => Number::Float(f.abs()),
        }
    }

    /// The value taken modulo 1, always in `[0, 1)`.
    pub fn modulo_one(&self) -> Self {
        match self {
            Number::Exact(r) => {
                Number::Exact(Rational64::new(r.numer().rem_euclid(*r.denom()), *r.denom()))
            }
            Number::Float(f) => {
                let wrapped = f.rem_euclid(1.0);
                // rem_euclid can round up to exactly 1.0 for tiny negative inputs.
                Number::Float(if wrapped >= 1.0 { 0.0 } else { wrapped })
            }
        }
    }

    fn combine(
        self,
        rhs: Self,
        exact: impl FnOnce(&Rational64, &Rational64) -> Option<Rational64>,
        float: impl FnOnce(f64, f64) -> f64,
    ) -> Self {
        if let (Number::Exact(a), Number::Exact(b)) = (&self, &rhs) {
            if let Some(result) = exact(a, b) {
                return Number::Exact(result);
            }
        }
        Number::Float(float(self.to_f64(), rhs.to_f64()))
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::zero()
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Exact(Rational64::from_integer(value))
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::from(i64::from(value))
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::from(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<Rational64> for Number {
    fn from(value: Rational64) -> Self {
        Number::Exact(value)
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        self.combine(rhs, |a, b| a.checked_add(b), |a, b| a + b)
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        self.combine(rhs, |a, b| a.checked_sub(b), |a, b| a - b)
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        self.combine(rhs, |a, b| a.checked_mul(b), |a, b| a * b)
    }
}

impl Div for Number {
    type Output = Number;

    fn div(self, rhs: Number) -> Number {
        self.combine(
            rhs,
            |a, b| a.checked_mul(&checked_recip(b)?),
            |a, b| a / b,
        )
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Exact(r) => match r.numer().checked_neg() {
                Some(numer) => Number::Exact(Rational64::new_raw(numer, *r.denom())),
                None => Number::Float(-self.to_f64()),
            },
            Number::Float(f) => Number::Float(-f),
        }
    }
}

/// `1 / r` with the sign kept on the numerator, or `None` for zero and for values whose
/// numerator is `i64::MIN`.
fn checked_recip(r: &Rational64) -> Option<Rational64> {
    let (numer, denom) = (*r.numer(), *r.denom());
    match numer {
        0 => None,
        n if n < 0 => Some(Rational64::new_raw(denom.checked_neg()?, n.checked_neg()?)),
        n => Some(Rational64::new_raw(denom, n)),
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Exact(a), Number::Exact(b)) => a == b,
            _ => self.to_f64() == other.to_f64(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Exact(a), Number::Exact(b)) => Some(a.cmp(b)),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Exact(r) if r.is_integer() => write!(f, "{}", r.numer()),
            Number::Exact(r) => write!(f, "{}/{}", r.numer(), r.denom()),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}
