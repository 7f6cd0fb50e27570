//! Scalar helpers shared by the scroll loop and the section mappings.
//!
//! Callers guarantee `max != min` for [`normalize`]/[`denormalize`]; the
//! rendered output depends on these exact formulas, so keep them as-is.

/// Map `value` from `[min, max]` into `[0, 1]`.
pub fn normalize(value: f64, max: f64, min: f64) -> f64 {
    (value - min) / (max - min)
}

/// Map `value` from `[0, 1]` back into `[min, max]`.
pub fn denormalize(value: f64, max: f64, min: f64) -> f64 {
    value * (max - min) + min
}

/// Exponential-smoothing step: blend `previous` toward `current` by `ease`.
pub fn lerp(previous: f64, current: f64, ease: f64) -> f64 {
    (1.0 - ease) * previous + ease * current
}

/// Clamp `value` into `[min, max]`.
pub fn clamp(min: f64, max: f64, value: f64) -> f64 {
    min.max(value.min(max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_denormalize_round_trip() {
        for v in [-350.0, 0.0, 0.5, 17.25, 2400.0] {
            let n = normalize(v, 2800.0, -100.0);
            let back = denormalize(n, 2800.0, -100.0);
            assert!((back - v).abs() < 1e-9, "{v} round-tripped to {back}");
        }
    }

    #[test]
    fn normalize_is_unclamped() {
        assert!(normalize(1200.0, 800.0, 0.0) > 1.0);
        assert!(normalize(-50.0, 800.0, 0.0) < 0.0);
    }

    #[test]
    fn lerp_fixed_point() {
        for ease in [0.0, 0.075, 0.5, 1.0] {
            assert_eq!(lerp(42.0, 42.0, ease), 42.0);
        }
    }

    #[test]
    fn lerp_moves_toward_target() {
        let next = lerp(0.0, 500.0, 0.075);
        assert_eq!(next, 37.5);
    }

    #[test]
    fn clamp_is_idempotent() {
        for v in [-10.0, 0.0, 600.0, 1200.0, 99999.0] {
            let once = clamp(0.0, 1200.0, v);
            assert_eq!(clamp(0.0, 1200.0, once), once);
            assert!((0.0..=1200.0).contains(&once));
        }
    }
}
