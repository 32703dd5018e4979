//! Placement of the blurred background orbs behind page headers.

/// One drifting orb
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orb {
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

const MIN_SIZE_PX: f64 = 200.0;
const SIZE_SPREAD_PX: f64 = 300.0;
const MIN_DURATION_S: f64 = 15.0;
const DURATION_SPREAD_S: f64 = 10.0;
const DELAY_STEP_S: f64 = 2.0;

/// Fractional part of `seed + i * step`, a low-discrepancy sequence in [0, 1)
fn spread(seed: f64, step: f64, i: usize) -> f64 {
    (seed + i as f64 * step).fract()
}

/// Layout for `count` orbs.
///
/// Deterministic, so the server and the hydrating client render the same
/// markup. Orbs scatter across the area and start one after another.
pub fn orb_layout(count: usize) -> Vec<Orb> {
    (0..count)
        .map(|i| Orb {
            size_px: MIN_SIZE_PX + SIZE_SPREAD_PX * spread(0.2, 0.754_877_666, i),
            left_pct: 100.0 * spread(0.17, 0.618_033_989, i),
            top_pct: 100.0 * spread(0.3, 0.324_919_696, i),
            duration_s: MIN_DURATION_S + DURATION_SPREAD_S * spread(0.5, 0.381_966_011, i),
            delay_s: i as f64 * DELAY_STEP_S,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_deterministic() {
        assert_eq!(orb_layout(4), orb_layout(4));
        assert!(orb_layout(0).is_empty());
    }

    #[test]
    fn test_orbs_stay_in_range() {
        let orbs = orb_layout(12);
        assert_eq!(orbs.len(), 12);
        for (i, orb) in orbs.iter().enumerate() {
            assert!((MIN_SIZE_PX..MIN_SIZE_PX + SIZE_SPREAD_PX).contains(&orb.size_px));
            assert!((0.0..100.0).contains(&orb.left_pct));
            assert!((0.0..100.0).contains(&orb.top_pct));
            assert!((MIN_DURATION_S..MIN_DURATION_S + DURATION_SPREAD_S).contains(&orb.duration_s));
            assert_eq!(orb.delay_s, i as f64 * DELAY_STEP_S);
        }
    }

    #[test]
    fn test_orbs_do_not_stack() {
        let orbs = orb_layout(4);
        for (i, a) in orbs.iter().enumerate() {
            for b in &orbs[i + 1..] {
                assert!((a.left_pct - b.left_pct).abs() > 5.0 || (a.top_pct - b.top_pct).abs() > 5.0);
            }
        }
    }
}
