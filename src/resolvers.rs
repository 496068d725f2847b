//! Resolves Cartesian velocity commands into joint space velocity commands.
//!
//! Two independent, stateless strategies are provided on top of the geometric
//! [Jacobian](crate::jacobian::Jacobian):
//!
//! - redundancy resolution through the right pseudo-inverse, exploiting the
//!   null space of the Jacobian for a secondary objective;
//! - damped least squares, trading tracking accuracy for numerical
//!   robustness near kinematic singularities.
//!
//! Both compute the same error corrected task velocity first,
//! `r_dot = v_des + Kp (p_des - p_cur)`, and neither retains state between
//! calls. The null space auxiliary vector and the random generator behind
//! [random_exploration] are explicit inputs of the caller, which keeps the
//! resolvers deterministic under test and safe to run from parallel threads.

extern crate nalgebra as na;

use crate::constraints::Constraints;
use crate::jacobian::Jacobian;
use crate::kinematic_traits::Joints;
use crate::utils::vector_to_joints;
use na::{Matrix6, SMatrix, SVector, Vector6};
use rand::Rng;
use std::f64::consts::PI;

/// Cartesian command for one control tick: the desired task space velocity
/// plus the desired and current pose used for proportional error correction.
/// Poses are generic 6 vectors (3 linear + 3 angular components).
#[derive(Debug, Clone, Copy)]
pub struct TaskCommand {
    pub desired_velocity: Vector6<f64>,
    pub desired_pose: Vector6<f64>,
    pub current_pose: Vector6<f64>,
}

impl TaskCommand {
    /// The error corrected task velocity `r_dot = v_des + Kp (p_des - p_cur)`.
    pub fn corrected_velocity(&self, gain: &Matrix6<f64>) -> Vector6<f64> {
        self.desired_velocity + gain * (self.desired_pose - self.current_pose)
    }
}

impl<const N: usize> Jacobian<N> {
    /// Resolves the command through the right pseudo-inverse
    /// `J+ = J^T (J J^T)^-1`, exploiting redundancy: the auxiliary joint
    /// velocity is projected through the null space projector `I - J+ J`,
    /// producing internal motion with zero task space velocity on top of the
    /// least norm range space command.
    ///
    /// # Arguments
    ///
    /// * `command` - the desired task velocity and pose error
    /// * `gain` - proportional gain applied to the pose error
    /// * `auxiliary` - secondary objective joint velocity to inject into the
    ///   null space (see [random_exploration] and [limits_centering])
    ///
    /// # Returns
    ///
    /// Joint positions, with values representing joint velocities rather than
    /// angles, or an error message if `J J^T` is not invertible.
    ///
    /// This resolver offers no singularity protection. Close to a kinematic
    /// singularity `J J^T` is ill conditioned and the command magnitudes grow
    /// abnormally large before the inversion fails outright; callers needing
    /// robustness there must use [Jacobian::resolve_damped] instead.
    pub fn resolve_redundant(
        &self,
        command: &TaskCommand,
        gain: &Matrix6<f64>,
        auxiliary: &SVector<f64, N>,
    ) -> Result<Joints<N>, &'static str> {
        let j = self.matrix();
        let j_t = j.transpose();
        let gram: Matrix6<f64> = j * j_t;
        let Some(gram_inverse) = gram.try_inverse() else {
            return Err("J J^T is not invertible, the arm is at a kinematic singularity");
        };
        let pseudo_inverse: SMatrix<f64, N, 6> = j_t * gram_inverse;

        let range_space = pseudo_inverse * command.corrected_velocity(gain);
        let null_projector = SMatrix::<f64, N, N>::identity() - pseudo_inverse * j;
        let null_space = null_projector * auxiliary;

        Ok(vector_to_joints(range_space + null_space))
    }

    /// Resolves the command through the damped least squares inverse
    /// `q_dot = J^T (J J^T + mu^2 I)^-1 r_dot`.
    ///
    /// The damping factor `mu` trades tracking accuracy for numerical
    /// robustness: `J J^T + mu^2 I` is positive definite for any `mu` > 0
    /// regardless of the rank of J, so this resolver has no rank deficiency
    /// failure mode. With `mu` = 0 and a full row rank Jacobian the output
    /// equals the undamped least norm solution; with `mu` = 0 and a rank
    /// deficient Jacobian the inversion cannot proceed and the command is
    /// dropped to zero rather than made unbounded.
    pub fn resolve_damped(
        &self,
        command: &TaskCommand,
        gain: &Matrix6<f64>,
        mu: f64,
    ) -> Joints<N> {
        let j = self.matrix();
        let j_t = j.transpose();
        let damped: Matrix6<f64> = j * j_t + Matrix6::identity() * (mu * mu);

        match damped.try_inverse() {
            Some(inverse) => vector_to_joints(j_t * inverse * command.corrected_velocity(gain)),
            None => [0.0; N],
        }
    }
}

/// Exploratory auxiliary joint velocity, uniform in [0, 1) per component.
///
/// The generator is owned by the caller and passed in per call; seeding it
/// makes the null space injection reproducible across ticks and across
/// parallel manipulator instances.
pub fn random_exploration<const N: usize, R: Rng>(rng: &mut R) -> SVector<f64, N> {
    SVector::<f64, N>::from_fn(|_, _| rng.random::<f64>())
}

/// Auxiliary joint velocity pulling every constrained joint toward the center
/// of its limit range, the classic limit avoidance secondary objective.
/// Unconstrained joints contribute nothing. The angular distance to the
/// center is taken on the circle, so configurations just below a wrapped
/// lower limit are pushed the short way round.
pub fn limits_centering<const N: usize>(
    constraints: &Constraints<N>,
    joints: &Joints<N>,
    gain: f64,
) -> SVector<f64, N> {
    SVector::<f64, N>::from_fn(|i, _| match constraints.center(i) {
        Some(center) => {
            let mut delta = (joints[i] - center) % (2.0 * PI);
            if delta > PI {
                delta -= 2.0 * PI;
            } else if delta < -PI {
                delta += 2.0 * PI;
            }
            -gain * delta
        }
        None => 0.0,
    })
}
