use crate::CsError;

pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, CsError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CsError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: f64, what: &'static str) -> Result<f64, CsError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(CsError::InvalidArg { what })
    }
}

/// Finite and zero or greater.
pub fn ensure_non_negative(v: f64, what: &'static str) -> Result<f64, CsError> {
    let v = ensure_finite(v, what)?;
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(CsError::InvalidArg { what })
    }
}

/// Linear interpolation between `(x0, y0)` and `(x1, y1)` at `x`.
///
/// Exact at both anchors. Degenerate spans (`x0 == x1`) return `y0`.
pub fn lerp(x0: f64, y0: f64, x1: f64, y1: f64, x: f64) -> f64 {
    let span = x1 - x0;
    if span == 0.0 || x == x0 {
        return y0;
    }
    if x == x1 {
        return y1;
    }
    y0 + (y1 - y0) * (x - x0) / span
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn lerp_stays_within_endpoints(
            y0 in -10.0_f64..10.0,
            y1 in -10.0_f64..10.0,
            frac in 0.0_f64..=1.0,
        ) {
            let y = lerp(0.0, y0, 1.0, y1, frac);
            let tol = 1e-12;
            prop_assert!(y >= y0.min(y1) - tol);
            prop_assert!(y <= y0.max(y1) + tol);
        }
    }
}
