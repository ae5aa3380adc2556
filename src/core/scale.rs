use serde::{Deserialize, Serialize};

use crate::error::{OverlayError, OverlayResult};

/// Linear map from a data domain onto a screen range.
///
/// The range may be reversed (`range_start > range_end`), which is how the
/// vertical axis maps growing data values to shrinking screen y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> OverlayResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(OverlayError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(OverlayError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Inverse of [`LinearScale::map`]. A zero-length range maps every pixel
    /// to the domain start.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn reversed_range_inverts_direction() {
        let scale = LinearScale::new((0.0, 10.0), (300.0, 0.0)).expect("scale");
        assert_eq!(scale.map(0.0), 300.0);
        assert_eq!(scale.map(10.0), 0.0);
        assert_eq!(scale.map(5.0), 150.0);
        assert_eq!(scale.invert(150.0), 5.0);
    }

    #[test]
    fn degenerate_domain_is_rejected() {
        assert!(LinearScale::new((1.0, 1.0), (0.0, 100.0)).is_err());
        assert!(LinearScale::new((0.0, f64::INFINITY), (0.0, 100.0)).is_err());
    }
}
