//! Scalar field of secp256k1. n = 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141
//!
//! This implementation uses Montgomery form for efficient modular arithmetic.
//! The field element is represented as [u64; 4] in little-endian order.
//!
//! The order sits just below 2^256, so intermediate values in the Montgomery
//! reduction can spill into a ninth limb; that carry is kept explicitly.

use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_bigint::BigUint;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::params::{limbs_to_biguint, SECP256K1_ORDER};

/// Scalar modulo the secp256k1 group order.
/// Represented in Montgomery form with [u64; 4]
#[derive(Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Scalar {
    /// Montgomery form: value * R mod n, where R = 2^256
    limbs: [u64; 4],
}

const MODULUS: [u64; 4] = SECP256K1_ORDER;

// R = 2^256 mod n (Montgomery parameter)
const R: [u64; 4] = [
    0x402da1732fc9bebf,
    0x4551231950b75fc4,
    0x0000000000000001,
    0x0000000000000000,
];

// R^2 = 2^512 mod n (for Montgomery conversion)
const R2: [u64; 4] = [
    0x896cf21467d7d140,
    0x741496c20e7cf878,
    0xe697f5e45bcd07c6,
    0x9d671cd581c69bc5,
];

// -n^{-1} mod 2^64 (Montgomery parameter mu)
const MU: u64 = 0x4b0dff665588b13f;

// n - 2, the Fermat inversion exponent
const INVERSION_EXPONENT: [u64; 4] = [
    0xbfd25e8cd036413f,
    0xbaaedce6af48a03b,
    0xfffffffffffffffe,
    0xffffffffffffffff,
];

impl Scalar {
    /// Zero element (in Montgomery form)
    pub const ZERO: Self = Scalar {
        limbs: [0, 0, 0, 0],
    };

    /// One element (in Montgomery form: R mod n)
    pub const ONE: Self = Scalar { limbs: R };

    /// Create a new scalar from a u64 value
    #[inline]
    pub fn from_u64(val: u64) -> Self {
        Self::from_canonical_limbs([val, 0, 0, 0])
    }

    /// Interpret 32 big-endian bytes as an integer and reduce it mod n.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Self {
        let mut limbs = [0u64; 4];
        for (i, chunk) in bytes.rchunks_exact(8).enumerate() {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            limbs[i] = u64::from_be_bytes(word);
        }
        Self::from_canonical_limbs(limbs)
    }

    /// Reduce an arbitrary-precision integer mod n.
    pub fn from_biguint(value: &BigUint) -> Self {
        let reduced = if value.bits() > 256 {
            value % limbs_to_biguint(&MODULUS)
        } else {
            value.clone()
        };

        let mut limbs = [0u64; 4];
        for (limb, digit) in limbs.iter_mut().zip(reduced.iter_u64_digits()) {
            *limb = digit;
        }
        Self::from_canonical_limbs(limbs)
    }

    /// Canonical big-endian encoding.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let canonical = self.to_canonical_limbs();
        let mut bytes = [0u8; 32];
        for (i, limb) in canonical.iter().rev().enumerate() {
            bytes[i * 8..(i + 1) * 8].copy_from_slice(&limb.to_be_bytes());
        }
        bytes
    }

    /// Canonical value as an arbitrary-precision integer.
    pub fn to_biguint(&self) -> BigUint {
        limbs_to_biguint(&self.to_canonical_limbs())
    }

    /// Convert from Montgomery form to canonical form
    #[inline]
    pub fn to_canonical_limbs(&self) -> [u64; 4] {
        // Multiply by 1 to get out of Montgomery form
        let one = Scalar {
            limbs: [1, 0, 0, 0],
        };
        montgomery_mul(*self, one).limbs
    }

    /// Any 256-bit value is below 2n, so one conditional subtraction reduces it.
    #[inline]
    fn from_canonical_limbs(limbs: [u64; 4]) -> Self {
        let limbs = if is_canonical(limbs) {
            limbs
        } else {
            sub_mod(limbs, MODULUS)
        };
        montgomery_mul(Scalar { limbs }, Scalar { limbs: R2 })
    }

    /// Multiplicative inverse, or `None` for zero.
    ///
    /// Uses Fermat's little theorem: a^{-1} = a^{n-2}, n being prime.
    pub fn invert(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.pow_vartime(INVERSION_EXPONENT))
        }
    }

    /// Variable-time exponentiation
    fn pow_vartime(&self, exp: [u64; 4]) -> Self {
        let mut result = Self::ONE;
        let mut base = *self;

        // Process bits from least significant to most significant
        for &limb in exp.iter() {
            let mut remaining = limb;
            for _ in 0..64 {
                if remaining & 1 == 1 {
                    result *= base;
                }
                base = base * base;
                remaining >>= 1;
            }
        }

        result
    }

    /// Check if this scalar is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0, 0, 0, 0]
    }
}

/// Helper: Add two 256-bit numbers mod n
#[inline]
const fn add_mod(a: [u64; 4], b: [u64; 4]) -> [u64; 4] {
    let (r0, carry) = a[0].overflowing_add(b[0]);
    let (r1, carry) = carrying_add(a[1], b[1], carry);
    let (r2, carry) = carrying_add(a[2], b[2], carry);
    let (r3, carry) = carrying_add(a[3], b[3], carry);

    let (s0, borrow) = r0.overflowing_sub(MODULUS[0]);
    let (s1, borrow) = borrowing_sub(r1, MODULUS[1], borrow);
    let (s2, borrow) = borrowing_sub(r2, MODULUS[2], borrow);
    let (s3, borrow) = borrowing_sub(r3, MODULUS[3], borrow);

    // Subtract n if the sum overflowed 2^256 or is at least n
    if carry || !borrow {
        [s0, s1, s2, s3]
    } else {
        [r0, r1, r2, r3]
    }
}

/// Helper: Subtract two 256-bit numbers mod n
#[inline]
const fn sub_mod(a: [u64; 4], b: [u64; 4]) -> [u64; 4] {
    let (r0, borrow) = a[0].overflowing_sub(b[0]);
    let (r1, borrow) = borrowing_sub(a[1], b[1], borrow);
    let (r2, borrow) = borrowing_sub(a[2], b[2], borrow);
    let (r3, borrow) = borrowing_sub(a[3], b[3], borrow);

    // Add modulus if we underflowed
    if borrow {
        let (r0, carry) = r0.overflowing_add(MODULUS[0]);
        let (r1, carry) = carrying_add(r1, MODULUS[1], carry);
        let (r2, carry) = carrying_add(r2, MODULUS[2], carry);
        let (r3, _) = carrying_add(r3, MODULUS[3], carry);
        [r0, r1, r2, r3]
    } else {
        [r0, r1, r2, r3]
    }
}

/// Helper: Negate a 256-bit number mod n
#[inline]
const fn neg_mod(a: [u64; 4]) -> [u64; 4] {
    if a[0] == 0 && a[1] == 0 && a[2] == 0 && a[3] == 0 {
        return [0, 0, 0, 0];
    }
    sub_mod(MODULUS, a)
}

/// True when `limbs < n`.
#[inline]
const fn is_canonical(limbs: [u64; 4]) -> bool {
    let (_, borrow) = limbs[0].overflowing_sub(MODULUS[0]);
    let (_, borrow) = borrowing_sub(limbs[1], MODULUS[1], borrow);
    let (_, borrow) = borrowing_sub(limbs[2], MODULUS[2], borrow);
    let (_, borrow) = borrowing_sub(limbs[3], MODULUS[3], borrow);
    borrow
}

/// Helper: Carrying addition
#[inline]
const fn carrying_add(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, overflow1) = a.overflowing_add(b);
    let (sum, overflow2) = sum.overflowing_add(carry as u64);
    (sum, overflow1 || overflow2)
}

/// Helper: Borrowing subtraction
#[inline]
const fn borrowing_sub(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, overflow1) = a.overflowing_sub(b);
    let (diff, overflow2) = diff.overflowing_sub(borrow as u64);
    (diff, overflow1 || overflow2)
}

/// Montgomery multiplication: (a * b * R^{-1}) mod n
#[inline]
fn montgomery_mul(a: Scalar, b: Scalar) -> Scalar {
    // Compute a * b, with one spare limb for the reduction carry
    let mut t = [0u64; 9];

    for i in 0..4 {
        let mut carry = 0u128;
        for j in 0..4 {
            let product = (a.limbs[i] as u128) * (b.limbs[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
        }
        t[i + 4] = carry as u64;
    }

    // Montgomery reduction
    for i in 0..4 {
        let k = t[i].wrapping_mul(MU);
        let mut carry = 0u128;

        for j in 0..4 {
            let product = (k as u128) * (MODULUS[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
        }

        for limb in t.iter_mut().skip(i + 4) {
            let sum = (*limb as u128) + carry;
            *limb = sum as u64;
            carry = sum >> 64;
        }
    }

    // High half is below 2n; subtract n once if it overflowed or is >= n
    let result = [t[4], t[5], t[6], t[7]];

    if t[8] != 0 || !is_canonical(result) {
        let (r0, borrow) = result[0].overflowing_sub(MODULUS[0]);
        let (r1, borrow) = borrowing_sub(result[1], MODULUS[1], borrow);
        let (r2, borrow) = borrowing_sub(result[2], MODULUS[2], borrow);
        let (r3, _) = borrowing_sub(result[3], MODULUS[3], borrow);
        Scalar {
            limbs: [r0, r1, r2, r3],
        }
    } else {
        Scalar { limbs: result }
    }
}

impl Distribution<Scalar> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Scalar {
        // n is within 2^129 of 2^256, so rejection almost never loops
        loop {
            let limbs: [u64; 4] = rng.random();
            if is_canonical(limbs) {
                return Scalar::from_canonical_limbs(limbs);
            }
        }
    }
}

// Arithmetic operations
impl Add for Scalar {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Scalar {
            limbs: add_mod(self.limbs, rhs.limbs),
        }
    }
}

impl AddAssign for Scalar {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Scalar {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Scalar {
            limbs: sub_mod(self.limbs, rhs.limbs),
        }
    }
}

impl SubAssign for Scalar {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Scalar {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Scalar {
            limbs: neg_mod(self.limbs),
        }
    }
}

impl Mul for Scalar {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        montgomery_mul(self, rhs)
    }
}

impl MulAssign for Scalar {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Display and Debug
impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let canonical = self.to_canonical_limbs();
        write!(
            f,
            "0x{:016x}{:016x}{:016x}{:016x}",
            canonical[3], canonical[2], canonical[1], canonical[0]
        )
    }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Secp256k1;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn order_minus(k: u64) -> Scalar {
        Scalar::from_biguint(&(Secp256k1::order() - BigUint::from(k)))
    }

    #[test]
    fn test_zero_one() {
        assert_eq!(Scalar::ZERO + Scalar::ZERO, Scalar::ZERO);
        assert_eq!(Scalar::ONE * Scalar::ONE, Scalar::ONE);
        assert_eq!(Scalar::ZERO * Scalar::ONE, Scalar::ZERO);
        assert_eq!(Scalar::ONE + Scalar::ZERO, Scalar::ONE);
        assert_eq!(Scalar::from_u64(1), Scalar::ONE);
    }

    #[test]
    fn test_addition_wraps() {
        let a = order_minus(1);
        assert_eq!(a + Scalar::from_u64(3), Scalar::from_u64(2));
    }

    #[test]
    fn test_subtraction() {
        let a = Scalar::from_u64(10);
        let b = Scalar::from_u64(3);
        assert_eq!(a - b, Scalar::from_u64(7));
        assert_eq!(b - a, order_minus(7));
    }

    #[test]
    fn test_multiplication() {
        let a = Scalar::from_u64(6);
        let b = Scalar::from_u64(7);
        assert_eq!(a * b, Scalar::from_u64(42));
    }

    #[test]
    fn test_multiplication_near_order() {
        // (n - 1)^2 = 1 mod n
        let minus_one = order_minus(1);
        assert_eq!(minus_one * minus_one, Scalar::ONE);
        // (n - 2) * (n - 3) = 6 mod n
        assert_eq!(order_minus(2) * order_minus(3), Scalar::from_u64(6));
    }

    #[test]
    fn test_negation() {
        let a = Scalar::from_u64(5);
        assert_eq!(a + (-a), Scalar::ZERO);
        assert_eq!(-Scalar::ZERO, Scalar::ZERO);
    }

    #[test]
    fn test_inverse() {
        let a = Scalar::from_u64(5);
        let a_inv = a.invert().unwrap();
        assert_eq!(a * a_inv, Scalar::ONE);
        assert!(Scalar::ZERO.invert().is_none());
    }

    #[test]
    fn test_inverse_of_two() {
        let expected = "0x7fffffffffffffffffffffffffffffff5d576e7357a4501ddfe92f46681b20a1";
        let half = Scalar::from_u64(2).invert().unwrap();
        assert_eq!(half.to_string(), expected);
    }

    #[test]
    fn test_order_reduces_to_zero() {
        let n = Secp256k1::order();
        assert!(Scalar::from_biguint(&n).is_zero());
        assert!(Scalar::from_biguint(&(&n * 3u32)).is_zero());
        assert_eq!(
            Scalar::from_biguint(&(&n + 9u32)),
            Scalar::from_u64(9)
        );
    }

    #[test]
    fn test_byte_encoding() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let a: Scalar = rng.random();
            assert_eq!(Scalar::from_be_bytes(&a.to_be_bytes()), a);
            assert_eq!(
                BigUint::from_bytes_be(&a.to_be_bytes()),
                a.to_biguint()
            );
        }
    }

    #[test]
    fn test_serde_json_encoding() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..8 {
            let a: Scalar = rng.random();
            let json = serde_json::to_string(&a).unwrap();
            let decoded: Scalar = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, a);
            assert_eq!(decoded.to_biguint(), a.to_biguint());
        }

        let json = serde_json::to_string(&Scalar::ONE).unwrap();
        let one: Scalar = serde_json::from_str(&json).unwrap();
        assert_eq!(one, Scalar::from_u64(1));
    }

    #[test]
    fn test_matches_biguint_arithmetic() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = Secp256k1::order();
        for _ in 0..64 {
            let a: Scalar = rng.random();
            let b: Scalar = rng.random();
            let (x, y) = (a.to_biguint(), b.to_biguint());
            assert_eq!((a * b).to_biguint(), (&x * &y) % &n);
            assert_eq!((a + b).to_biguint(), (&x + &y) % &n);
        }
    }
}
