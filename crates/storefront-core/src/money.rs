//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floats:                                                    │
//! │    19.99 × 2 × 0.9 = 35.981999999999996  ❌ WRONG!                      │
//! │                                                                         │
//! │  Integer cents can't hold it either:                                    │
//! │    3998 cents × 90 % = 3598.2 cents  → where does the .2 go?           │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 Decimal                                          │
//! │    19.99 × 2 × 0.9 = 35.982 exactly, kept as stored                     │
//! │    Rounding happens only when formatting for display                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::new(1999, 2);      // 19.99
//! let line = price * 2;                 // 39.98
//! assert_eq!(line, Money::new(3998, 2));
//! assert_eq!(line.to_string(), "$39.98");
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

use crate::types::DiscountPercentage;

// =============================================================================
// Money Type
// =============================================================================

/// A currency amount in major units (dollars), stored as an exact decimal.
///
/// Serialized as a decimal string (`"35.982"`) so the persisted record round
/// trips without loss. JSON numbers are accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "string")] Decimal);

impl Money {
    /// Creates money from a mantissa and a scale: `new(1999, 2)` is 19.99.
    #[inline]
    pub fn new(num: i64, scale: u32) -> Self {
        Money(Decimal::new(num, scale))
    }

    /// Wraps an existing decimal amount.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Zero.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Returns the underlying decimal.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Multiplies the amount by a quantity.
    ///
    /// # Panics
    /// If the product does not fit a `Decimal`. Cart code goes through
    /// [`Money::checked_mul_quantity`].
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::new(299, 2);
    /// assert_eq!(unit_price.multiply_quantity(3), Money::new(897, 2));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Multiplies the amount by a quantity, `None` on overflow.
    ///
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::new(8, 0).checked_mul_quantity(2), Some(Money::new(16, 0)));
    /// assert_eq!(Money::from_decimal(Decimal::MAX).checked_mul_quantity(2), None);
    /// ```
    #[inline]
    pub fn checked_mul_quantity(&self, qty: i64) -> Option<Money> {
        self.0.checked_mul(Decimal::from(qty)).map(Money)
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Sums amounts, `None` as soon as the running total overflows.
    pub fn checked_sum<I: IntoIterator<Item = Money>>(amounts: I) -> Option<Money> {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |acc, m| acc.checked_add(m))
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// No rounding: `39.98` at 10 % is `35.982`.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::types::DiscountPercentage;
    ///
    /// let total = Money::new(3998, 2);
    /// let discounted = total.apply_discount(DiscountPercentage::new(10, 0));
    /// assert_eq!(discounted, Money::new(35982, 3));
    /// ```
    #[inline]
    pub fn apply_discount(&self, discount: DiscountPercentage) -> Money {
        Money(self.0 * discount.factor())
    }

    /// [`Money::apply_discount`], `None` on overflow.
    #[inline]
    pub fn checked_apply_discount(&self, discount: DiscountPercentage) -> Option<Money> {
        self.0.checked_mul(discount.factor()).map(Money)
    }

    /// Rounds to cents (half away from zero) for display.
    pub fn round_to_cents(&self) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount rounded to cents, e.g. `$35.98`.
///
/// This is for logs and the CLI. The stored value keeps full precision.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.round_to_cents().0;
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        write!(f, "{}${:.2}", sign, rounded.abs())
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

// The operators panic on overflow like `Decimal`'s own. Use the `checked_*`
// methods where the operands come from user input.

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
