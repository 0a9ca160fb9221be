//! Custom test assertions

use print_pricing::CostBreakdown;

/// Assert two values are approximately equal (for floats)
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr) => {
        assert_approx_eq!($left, $right, 1e-4_f64)
    };
    ($left:expr, $right:expr, $epsilon:expr) => {
        let left_val: f64 = $left as f64;
        let right_val: f64 = $right as f64;
        let diff = (left_val - right_val).abs();
        assert!(
            diff < $epsilon,
            "assertion failed: `(left ~ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` (epsilon: `{:?}`)",
            left_val,
            right_val,
            diff,
            $epsilon
        );
    };
}

/// Assertions every breakdown must satisfy
pub trait BreakdownAssertions {
    /// Assert every field is a finite number
    fn assert_finite(&self);

    /// Assert the totals add up
    fn assert_consistent(&self);
}

impl BreakdownAssertions for CostBreakdown {
    fn assert_finite(&self) {
        for (name, value) in [
            ("labor_cost", self.labor_cost),
            ("fixed_cost_share", self.fixed_cost_share),
            ("variable_cost", self.variable_cost),
            ("total_cost", self.total_cost),
            ("profit_amount", self.profit_amount),
            ("suggested_price", self.suggested_price),
        ] {
            assert!(value.is_finite(), "{} is not finite: {}", name, value);
        }
        if let Some(rounded) = self.rounded_suggested_price {
            assert!(rounded.is_finite(), "rounded_suggested_price is not finite");
        }
    }

    fn assert_consistent(&self) {
        let sum = self.labor_cost + self.fixed_cost_share + self.variable_cost;
        assert!(
            (self.total_cost - sum).abs() < 1e-9,
            "total_cost {} != {}",
            self.total_cost,
            sum
        );
        assert!(
            (self.suggested_price - (self.total_cost + self.profit_amount)).abs() < 1e-9,
            "suggested_price {} != total_cost + profit_amount",
            self.suggested_price
        );
        if let Some(rounded) = self.rounded_suggested_price {
            assert!(rounded >= self.suggested_price);
            assert!(rounded - self.suggested_price < 1.0);
            assert_eq!(rounded.fract(), 0.0);
        }
    }
}
