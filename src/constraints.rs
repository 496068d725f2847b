use crate::kinematic_traits::Joints;
use std::f64::consts::PI;

#[derive(Clone)]
pub struct Constraints<const N: usize> {
    /// Normalized lower limit. If more than upper limit, the range wraps-around through 0
    pub from: [f64; N],

    /// Normalized upper limit. If less than lower limit, the range wraps-around through 0
    pub to: [f64; N],
}

impl<const N: usize> Constraints<N> {
    pub fn new(from: [f64; N], to: [f64; N]) -> Self {
        let two_pi = 2.0 * PI;
        let from_normalized: [f64; N] = from.map(|f| ((f % two_pi) + two_pi) % two_pi);
        let to_normalized: [f64; N] = to.map(|t| ((t % two_pi) + two_pi) % two_pi);

        Constraints {
            from: from_normalized,
            to: to_normalized,
        }
    }

    pub fn compliant(&self, angles: &Joints<N>) -> bool {
        let two_pi = 2.0 * PI;
        for i in 0..N {
            if self.from[i] == self.to[i] {
                continue; // Joint without constraints, from == to
            }
            let angle = ((angles[i] % two_pi) + two_pi) % two_pi;
            if self.from[i] <= self.to[i] {
                if !(angle >= self.from[i] && angle <= self.to[i]) {
                    return false;
                }
            } else {
                if !(angle >= self.from[i] || angle <= self.to[i]) {
                    return false;
                }
            }
        }
        true
    }

    pub fn filter(&self, angles: &[Joints<N>]) -> Vec<Joints<N>> {
        angles
            .iter()
            .filter(|angle_array| self.compliant(angle_array))
            .cloned()
            .collect()
    }

    /// Midpoint of the allowed range of the given joint, on the circle when
    /// the range wraps through zero. None for an unconstrained joint
    /// (from == to).
    pub fn center(&self, joint: usize) -> Option<f64> {
        let from = self.from[joint];
        let to = self.to[joint];
        if from == to {
            return None;
        }
        if from <= to {
            Some((from + to) / 2.0)
        } else {
            Some(((from + to + 2.0 * PI) / 2.0) % (2.0 * PI))
        }
    }
}
