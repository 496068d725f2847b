//! Defines the kinematic traits and types shared by the crate.

extern crate nalgebra as na;

use na::Isometry3;

/// Pose of a joint frame or of the robot tcp. It contains both Cartesian
/// position and rotation quaternion.
/// ```
/// extern crate nalgebra as na;
/// use na::{Isometry3, Translation3, UnitQuaternion};
///
/// type Pose = Isometry3<f64>;
///
/// let translation = Translation3::new(1.0, 0.0, 0.0);
/// // The quaternion should be normalized to represent a valid rotation.
/// let rotation = UnitQuaternion::from_quaternion(na::Quaternion::new(1.0, 0.0, 0.0, 1.0).normalize());
/// let transform = Pose::from_parts(translation, rotation);
/// ```
pub type Pose = Isometry3<f64>;

/// Joint configuration, radians. The joint count is a compile time parameter,
/// so a configuration can never disagree in length with the parameter table
/// it is used with.
pub type Joints<const N: usize> = [f64; N];

/// Joint count of the reference redundant manipulator (7 revolute joints,
/// 6 task dimensions, one redundant degree of freedom).
pub const DOF: usize = 7;

/// Zero configuration of the reference manipulator (all joints straight).
pub const JOINTS_AT_ZERO: Joints<DOF> = [0.0; DOF];

/// Forward kinematics of an N jointed serial arm. The Jacobian assembler
/// consumes every cumulative frame at once, so implementations must provide
/// `joint_frames` and should produce it in a single left to right pass rather
/// than recomputing the chain per prefix.
pub trait Kinematics<const N: usize> {
    /// Pose of the end effector (the full chain product) in base coordinates.
    fn forward(&self, joints: &Joints<N>) -> Pose;

    /// Cumulative transform from the base through joint `up_to - 1`, i.e. the
    /// product A01 * A12 * ... * A(up_to-1, up_to). `up_to` ranges from 1 to N;
    /// `forward` is equivalent to `forward_to` with `up_to` = N.
    ///
    /// Panics if `up_to` is outside 1..=N (caller contract violation).
    fn forward_to(&self, joints: &Joints<N>, up_to: usize) -> Pose;

    /// All cumulative transforms A01 through A0N, base to tip. Element i is
    /// the pose of joint frame i + 1 in base coordinates.
    fn joint_frames(&self, joints: &Joints<N>) -> [Pose; N];
}
