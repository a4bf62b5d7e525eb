use crate::transform::non_linear::smooth_step;

/// Overshoot of the back eases.
pub const BACK_OVERSHOOT: f64 = 1.7;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    #[default]
    Linear,
    SmoothStep,
    InOutQuad,
    OutQuad,
    /// Overshoots past 1 before settling.
    BackOut,
    /// Dips below 0 before leaving.
    BackIn,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::SmoothStep => smooth_step(t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::BackOut => {
                let u = t - 1.0;
                1.0 + (BACK_OVERSHOOT + 1.0) * u.powi(3) + BACK_OVERSHOOT * u * u
            }
            Self::BackIn => (BACK_OVERSHOOT + 1.0) * t.powi(3) - BACK_OVERSHOOT * t * t,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
