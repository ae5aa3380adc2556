use serde::{Deserialize, Serialize};

pub const DEFAULT_BUBBLE_BASE_PX: f64 = 20.0;
pub const DEFAULT_BUBBLE_SPAN_PX: f64 = 100.0;

/// Linear symbol sizing for bubble charts: the smallest value gets
/// `base_px`, the largest `base_px + span_px`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BubbleSizeScale {
    pub min: f64,
    pub max: f64,
    pub base_px: f64,
    pub span_px: f64,
}

impl BubbleSizeScale {
    /// Scale over the finite values of `values`; `None` when there are none.
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let (min, max) = values
            .into_iter()
            .filter(|value| value.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, value| match acc {
                Some((min, max)) => Some((min.min(value), max.max(value))),
                None => Some((value, value)),
            })?;
        Some(Self {
            min,
            max,
            base_px: DEFAULT_BUBBLE_BASE_PX,
            span_px: DEFAULT_BUBBLE_SPAN_PX,
        })
    }

    #[must_use]
    pub fn with_pixel_range(mut self, base_px: f64, span_px: f64) -> Self {
        self.base_px = base_px;
        self.span_px = span_px;
        self
    }

    /// Symbol size for `value`. A single-valued range maps everything to the
    /// base size.
    #[must_use]
    pub fn size(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range <= 0.0 || !value.is_finite() {
            return self.base_px;
        }
        self.base_px + self.span_px * (value - self.min) / range
    }
}

#[cfg(test)]
mod tests {
    use super::BubbleSizeScale;

    #[test]
    fn sizes_span_base_to_base_plus_span() {
        let scale = BubbleSizeScale::from_values([5.0, 1.0, 3.0]).expect("scale");
        assert_eq!(scale.size(1.0), 20.0);
        assert_eq!(scale.size(3.0), 70.0);
        assert_eq!(scale.size(5.0), 120.0);
    }

    #[test]
    fn empty_or_flat_inputs() {
        assert!(BubbleSizeScale::from_values([f64::NAN]).is_none());
        let flat = BubbleSizeScale::from_values([4.0, 4.0]).expect("scale");
        assert_eq!(flat.size(4.0), 20.0);
    }
}
