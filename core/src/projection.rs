use crate::model::config::DEFAULT_MAX_RANGE_KM;
use crate::model::Target;

/// Normalizes a sensor-centered position against the maximum display
/// range. Within-range targets land in [-1, 1] on both axes; targets
/// beyond range project outside that bound without clamping. A
/// non-positive range falls back to the 240 km default instead of
/// dividing by zero. Screen-space vertical inversion is left to the
/// renderer.
pub fn project(x_m: f64, y_m: f64, max_range_m: f64) -> (f64, f64) {
    let range = if max_range_m > 0.0 {
        max_range_m
    } else {
        DEFAULT_MAX_RANGE_KM * 1000.0
    };
    (x_m / range, y_m / range)
}

/// Projected point ready for the scope canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopePoint {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

/// Caches projected points and recomputes only when the target list or
/// the max-range value actually changed. Unrelated state churn must not
/// trigger a recomputation.
#[derive(Debug, Default)]
pub struct ScopeProjector {
    last_targets: Vec<Target>,
    last_max_range_m: f64,
    points: Vec<ScopePoint>,
    recomputes: usize,
}

impl ScopeProjector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&mut self, targets: &[Target], max_range_m: f64) -> &[ScopePoint] {
        if self.last_max_range_m != max_range_m || self.last_targets != targets {
            self.points = targets
                .iter()
                .map(|target| {
                    let (x, y) = project(target.x_m, target.y_m, max_range_m);
                    ScopePoint {
                        id: target.target_id.clone(),
                        x,
                        y,
                    }
                })
                .collect();
            self.last_targets = targets.to_vec();
            self.last_max_range_m = max_range_m;
            self.recomputes += 1;
        }
        &self.points
    }
}
