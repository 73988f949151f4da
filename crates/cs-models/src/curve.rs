//! Open-circuit voltage as a function of depth of discharge.

use crate::error::{ModelError, ModelResult};
use cs_core::numeric::lerp;

/// Piecewise-linear discharge curve: open-circuit voltage (V) against depth
/// of discharge in [0, 1].
///
/// Anchors are sorted by strictly increasing depth, start at 0 and end at 1,
/// and voltage never rises with depth.
#[derive(Debug, Clone, PartialEq)]
pub struct DischargeCurve {
    points: Vec<(f64, f64)>,
}

impl DischargeCurve {
    /// Create a curve from `(depth_of_discharge, volts)` anchors.
    ///
    /// # Errors
    /// `InvalidParameter` if fewer than two anchors are given, the anchors do
    /// not span [0, 1] in strictly increasing depth, any voltage is negative or
    /// non-finite, or voltage increases with depth.
    pub fn new(points: Vec<(f64, f64)>) -> ModelResult<Self> {
        if points.len() < 2 {
            return Err(ModelError::InvalidParameter {
                what: "discharge curve needs at least two points",
            });
        }
        if points
            .iter()
            .any(|&(d, v)| !d.is_finite() || !v.is_finite() || v < 0.0)
        {
            return Err(ModelError::InvalidParameter {
                what: "discharge curve points must be finite with non-negative voltage",
            });
        }
        let first = points[0].0;
        let last = points[points.len() - 1].0;
        if first != 0.0 || last != 1.0 {
            return Err(ModelError::InvalidParameter {
                what: "discharge curve must span depth of discharge 0 to 1",
            });
        }
        for pair in points.windows(2) {
            let (d0, v0) = pair[0];
            let (d1, v1) = pair[1];
            if d1 <= d0 {
                return Err(ModelError::InvalidParameter {
                    what: "discharge curve depth must be strictly increasing",
                });
            }
            if v1 > v0 {
                return Err(ModelError::InvalidParameter {
                    what: "discharge curve voltage must not increase with depth",
                });
            }
        }
        Ok(Self { points })
    }

    /// Typical AA alkaline (Zn/MnO2) open-circuit profile.
    ///
    /// Fresh cells sit near 1.6 V, slope through a long 1.4-1.1 V region and
    /// collapse past 90 % depth of discharge, ending at 0.8 V.
    pub fn alkaline() -> Self {
        Self {
            points: vec![
                (0.00, 1.60),
                (0.05, 1.50),
                (0.20, 1.40),
                (0.40, 1.30),
                (0.60, 1.22),
                (0.80, 1.12),
                (0.90, 1.03),
                (0.95, 0.95),
                (1.00, 0.80),
            ],
        }
    }

    /// Open-circuit voltage at the given depth of discharge (clamped to [0, 1]).
    pub fn voltage_at(&self, depth_of_discharge: f64) -> f64 {
        let d = depth_of_discharge.clamp(0.0, 1.0);
        // First anchor strictly beyond d; the segment ends there.
        let idx = self
            .points
            .partition_point(|&(depth, _)| depth <= d)
            .clamp(1, self.points.len() - 1);
        let (d0, v0) = self.points[idx - 1];
        let (d1, v1) = self.points[idx];
        lerp(d0, v0, d1, v1, d)
    }

    /// Anchors of the curve.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Open-circuit voltage of a full cell.
    pub fn full_voltage(&self) -> f64 {
        self.points[0].1
    }

    /// Open-circuit voltage of an empty cell.
    pub fn empty_voltage(&self) -> f64 {
        self.points[self.points.len() - 1].1
    }
}

impl Default for DischargeCurve {
    fn default() -> Self {
        Self::alkaline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alkaline_curve_is_valid() {
        let curve = DischargeCurve::alkaline();
        assert!(DischargeCurve::new(curve.points().to_vec()).is_ok());
        assert_eq!(curve.full_voltage(), 1.60);
        assert_eq!(curve.empty_voltage(), 0.80);
    }

    #[test]
    fn interpolates_between_anchors() {
        let curve = DischargeCurve::new(vec![(0.0, 1.5), (0.5, 1.3), (1.0, 0.9)]).unwrap();
        assert!((curve.voltage_at(0.25) - 1.4).abs() < 1e-12);
        assert!((curve.voltage_at(0.75) - 1.1).abs() < 1e-12);
        assert_eq!(curve.voltage_at(0.5), 1.3);
    }

    #[test]
    fn clamps_outside_range() {
        let curve = DischargeCurve::alkaline();
        assert_eq!(curve.voltage_at(-0.5), 1.60);
        assert_eq!(curve.voltage_at(0.0), 1.60);
        assert_eq!(curve.voltage_at(1.0), 0.80);
        assert_eq!(curve.voltage_at(2.0), 0.80);
    }

    #[test]
    fn rejects_bad_curves() {
        assert!(DischargeCurve::new(vec![(0.0, 1.5)]).is_err());
        assert!(DischargeCurve::new(vec![(0.1, 1.5), (1.0, 1.0)]).is_err());
        assert!(DischargeCurve::new(vec![(0.0, 1.5), (0.9, 1.0)]).is_err());
        assert!(DischargeCurve::new(vec![(0.0, 1.5), (0.5, 1.2), (0.5, 1.1), (1.0, 1.0)]).is_err());
        assert!(DischargeCurve::new(vec![(0.0, 1.0), (1.0, 1.2)]).is_err());
        assert!(DischargeCurve::new(vec![(0.0, f64::NAN), (1.0, 1.0)]).is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn alkaline_curve_is_non_increasing(a in 0.0_f64..=1.0, b in 0.0_f64..=1.0) {
            let curve = DischargeCurve::alkaline();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(curve.voltage_at(hi) <= curve.voltage_at(lo) + 1e-12);
        }
    }
}
