use serde::Serialize;

use crate::complex::Complex;
use crate::error::CoreError;

/// Final test applied to the orbit once the iteration budget is spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum EscapeTest {
    /// In set iff `re < threshold && im < threshold`.
    ///
    /// Only an upper bound is checked, so orbits running off towards large
    /// negative components still count as bounded. This reproduces the
    /// reference renders bit for bit.
    #[default]
    UpperBound,

    /// In set iff `re² + im² < threshold²`, the conventional escape test.
    Magnitude,
}

impl EscapeTest {
    pub fn label(self) -> &'static str {
        match self {
            Self::UpperBound => "upper-bound",
            Self::Magnitude => "magnitude",
        }
    }
}

/// Per-pixel classification: bounded after the full budget, or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    InSet,
    Diverged,
}

impl Classification {
    /// Numeric grid value: 1 for in set, 0 for diverged.
    #[inline]
    pub fn value(self) -> u8 {
        match self {
            Self::InSet => 1,
            Self::Diverged => 0,
        }
    }
}

impl From<Classification> for u8 {
    #[inline]
    fn from(class: Classification) -> u8 {
        class.value()
    }
}

/// Iteration budget, divergence threshold and final test for one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EscapeParams {
    /// Number of `n = n² + c` steps applied after the initial `n = c`.
    pub iterations: u32,

    /// Divergence threshold compared against the final orbit value.
    pub threshold: f64,

    pub test: EscapeTest,
}

impl EscapeParams {
    pub const DEFAULT_THRESHOLD: f64 = 100.0;

    pub fn new(iterations: u32, threshold: f64) -> crate::Result<Self> {
        if iterations < 1 {
            return Err(CoreError::InvalidIterations(iterations));
        }
        if threshold <= 0.0 || !threshold.is_finite() {
            return Err(CoreError::InvalidThreshold(threshold));
        }
        Ok(Self {
            iterations,
            threshold,
            test: EscapeTest::UpperBound,
        })
    }

    /// Return a copy using a different final test.
    pub fn with_test(self, test: EscapeTest) -> Self {
        Self { test, ..self }
    }

    /// Run the fixed-cost recurrence for `c` and classify the result.
    #[inline]
    pub fn classify(&self, c: Complex) -> Classification {
        let n = orbit_end(c, self.iterations);
        let bounded = match self.test {
            EscapeTest::UpperBound => n.re < self.threshold && n.im < self.threshold,
            EscapeTest::Magnitude => n.norm_sq() < self.threshold * self.threshold,
        };
        if bounded {
            Classification::InSet
        } else {
            Classification::Diverged
        }
    }
}

/// The orbit value after `n = 0 + c` followed by exactly `iterations`
/// applications of `n = n² + c`.
///
/// There is no bailout: the cost per point is constant, and diverging orbits
/// are allowed to overflow to infinity or NaN.
#[inline]
pub fn orbit_end(c: Complex, iterations: u32) -> Complex {
    let mut n = Complex::ZERO + c;
    for _ in 0..iterations {
        n = n * n + c;
    }
    n
}
