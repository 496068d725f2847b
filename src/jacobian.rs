//! Assembles the geometric Jacobian of a revolute joint serial arm.

extern crate nalgebra as na;
use crate::kinematic_traits::{Joints, Kinematics};
use na::{SMatrix, Vector3};

/// Struct representing the Jacobian matrix of an N jointed arm.
pub struct Jacobian<const N: usize> {
    /// A 6xN matrix mapping joint velocities to end effector velocities.
    ///
    /// Rows 0 to 2 are the linear velocity (position) mapping, rows 3 to 5
    /// the angular velocity (orientation) mapping; column i corresponds to
    /// the contribution of joint i. The matrix is recomputed from the joint
    /// configuration every control tick and carries no state between ticks.
    matrix: SMatrix<f64, 6, N>,
}

impl<const N: usize> Jacobian<N> {
    /// Constructs a new Jacobian struct by computing the geometric Jacobian
    /// for the given robot and joint configuration.
    ///
    /// # Arguments
    ///
    /// * `robot` - A reference to the robot implementing the Kinematics trait
    /// * `joints` - A reference to the joint configuration
    ///
    /// # Returns
    ///
    /// A new instance of `Jacobian`
    pub fn new(robot: &impl Kinematics<N>, joints: &Joints<N>) -> Self {
        let matrix = compute_jacobian(robot, joints);
        Self { matrix }
    }

    /// Wraps an already assembled matrix. Useful for feeding the velocity
    /// resolvers with a Jacobian obtained elsewhere, or with a synthetic one
    /// in tests.
    pub fn from_matrix(matrix: SMatrix<f64, 6, N>) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> &SMatrix<f64, 6, N> {
        &self.matrix
    }
}

/// Function to compute the geometric Jacobian for a given robot and joint
/// configuration. Valid for revolute joints only.
///
/// For each joint i, with z_i the joint axis expressed in base coordinates,
/// p_i the origin of the joint frame and p_end the end effector origin:
///
/// ```text
/// linear column i  = z_i x (p_end - p_i)
/// angular column i = z_i
/// ```
///
/// Joint 0 contributes through the base frame directly (z_0 = [0, 0, 1],
/// p_0 = 0); for i >= 1 both z_i and p_i come from the *cumulative* base to
/// joint i transform, z_i being the image of the base z axis under its
/// rotation part. This is the standard velocity composition identity for
/// revolute chains.
pub fn compute_jacobian<const N: usize>(
    robot: &impl Kinematics<N>,
    joints: &Joints<N>,
) -> SMatrix<f64, 6, N> {
    let frames = robot.joint_frames(joints);
    let p_end = frames[N - 1].translation.vector;

    let mut jacobian = SMatrix::<f64, 6, N>::zeros();
    for i in 0..N {
        let (z, p) = if i == 0 {
            (Vector3::z(), Vector3::zeros())
        } else {
            let frame = &frames[i - 1];
            (frame.rotation * Vector3::z(), frame.translation.vector)
        };
        jacobian
            .fixed_view_mut::<3, 1>(0, i)
            .copy_from(&z.cross(&(p_end - p)));
        jacobian.fixed_view_mut::<3, 1>(3, i).copy_from(&z);
    }

    jacobian
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics_impl::DhKinematics;
    use crate::parameters::dh_kinematics::DhParameters;

    const EPSILON: f64 = 1e-9;

    /// A single revolute joint carrying a unit length link in the base plane.
    /// Rotating it moves the tip along y and spins the frame about z, so both
    /// derivatives with respect to the joint are 1 at the zero angle.
    fn single_joint_arm() -> DhKinematics<1> {
        DhKinematics::new(DhParameters {
            a: [1.0],
            alpha: [0.0],
            d: [0.0],
        })
    }

    #[test]
    fn test_single_joint_jacobian() {
        let robot = single_joint_arm();
        let jacobian = compute_jacobian(&robot, &[0.0]);

        let mut expected = SMatrix::<f64, 6, 1>::zeros();
        expected[(1, 0)] = 1.0; // y position is driven by the joint
        expected[(5, 0)] = 1.0; // z orientation is driven by the joint

        for row in 0..6 {
            assert!(
                (jacobian[(row, 0)] - expected[(row, 0)]).abs() < EPSILON,
                "row {}: {} != {}",
                row,
                jacobian[(row, 0)],
                expected[(row, 0)]
            );
        }
    }

    #[test]
    fn test_jacobian_against_numerical_differentiation() {
        // The analytic linear block must agree with a central difference of
        // the end effector position.
        let robot = DhKinematics::new(DhParameters::kuka_lwr());
        let joints = [0.3, -0.5, 0.4, 0.9, -0.2, 0.6, 0.1];
        let jacobian = compute_jacobian(&robot, &joints);

        use crate::kinematic_traits::Kinematics;
        let delta = 1e-7;
        for i in 0..7 {
            let mut upper = joints;
            let mut lower = joints;
            upper[i] += delta;
            lower[i] -= delta;
            let numeric = (robot.forward(&upper).translation.vector
                - robot.forward(&lower).translation.vector)
                / (2.0 * delta);
            let analytic = jacobian.fixed_view::<3, 1>(0, i);
            for row in 0..3 {
                assert!(
                    (numeric[row] - analytic[row]).abs() < 1e-4,
                    "column {} row {}: numeric {} vs analytic {}",
                    i,
                    row,
                    numeric[row],
                    analytic[row]
                );
            }
        }
    }

    #[test]
    fn test_angular_columns_are_unit_axes() {
        let robot = DhKinematics::new(DhParameters::kuka_lwr());
        let joints = [0.3, -0.5, 0.4, 0.9, -0.2, 0.6, 0.1];
        let jacobian = compute_jacobian(&robot, &joints);

        for i in 0..7 {
            let angular = jacobian.fixed_view::<3, 1>(3, i);
            assert!(
                (angular.norm() - 1.0).abs() < EPSILON,
                "angular column {} is not a unit axis",
                i
            );
        }
    }
}
