//! Implements the DH transform chain for serial manipulators.

use crate::kinematic_traits::{Joints, Kinematics, Pose};
use crate::parameters::dh_kinematics::DhParameters;
use nalgebra::{Matrix3, Rotation3, Translation3, UnitQuaternion, Vector3};

/// Forward kinematics of a serial arm described by a Denavit-Hartenberg
/// parameter table. Stateless per invocation; independent instances can be
/// used from parallel threads without synchronization.
#[derive(Debug, Clone, Copy)]
pub struct DhKinematics<const N: usize> {
    parameters: DhParameters<N>,
}

impl<const N: usize> DhKinematics<N> {
    /// Creates a new `DhKinematics` instance with the given parameter table.
    pub fn new(parameters: DhParameters<N>) -> Self {
        DhKinematics { parameters }
    }

    pub fn parameters(&self) -> &DhParameters<N> {
        &self.parameters
    }

    /// Cumulative transform of the single joint at `index`, from its own
    /// parameters and angle alone.
    fn link(&self, joints: &Joints<N>, index: usize) -> Pose {
        let p = &self.parameters;
        link_transform(p.a[index], p.alpha[index], p.d[index], joints[index])
    }
}

/// The homogeneous transform between two consecutive joint frames in the
/// standard Denavit-Hartenberg convention:
///
/// ```text
/// R = | cos(theta)   -sin(theta) cos(alpha)    sin(theta) sin(alpha) |
///     | sin(theta)    cos(theta) cos(alpha)   -cos(theta) sin(alpha) |
///     | 0             sin(alpha)               cos(alpha)            |
/// t = [ a cos(theta), a sin(theta), d ]
/// ```
///
/// Pure and total for finite inputs.
pub fn link_transform(a: f64, alpha: f64, d: f64, theta: f64) -> Pose {
    let (s_theta, c_theta) = theta.sin_cos();
    let (s_alpha, c_alpha) = alpha.sin_cos();

    let rotation = Matrix3::new(
        c_theta, -s_theta * c_alpha, s_theta * s_alpha,
        s_theta, c_theta * c_alpha, -c_theta * s_alpha,
        0.0, s_alpha, c_alpha,
    );
    let translation = Vector3::new(a * c_theta, a * s_theta, d);

    Pose::from_parts(
        Translation3::from(translation),
        UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(rotation)),
    )
}

impl<const N: usize> Kinematics<N> for DhKinematics<N> {
    fn forward(&self, joints: &Joints<N>) -> Pose {
        self.forward_to(joints, N)
    }

    fn forward_to(&self, joints: &Joints<N>, up_to: usize) -> Pose {
        assert!(
            (1..=N).contains(&up_to),
            "chain index {} outside the valid range 1..={}",
            up_to,
            N
        );
        let mut cumulative = Pose::identity();
        for index in 0..up_to {
            cumulative *= self.link(joints, index);
        }
        cumulative
    }

    fn joint_frames(&self, joints: &Joints<N>) -> [Pose; N] {
        // Single pass; frame i is the running product after i + 1 links.
        let mut frames = [Pose::identity(); N];
        let mut cumulative = Pose::identity();
        for index in 0..N {
            cumulative *= self.link(joints, index);
            frames[index] = cumulative;
        }
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::test_utils::are_isometries_approx_equal;

    const SMALL: f64 = 1e-9;

    #[test]
    fn test_link_transform_zero_twist_zero_angle() {
        // With zero twist and zero angle the DH transform degenerates to a
        // pure translation by [a, 0, d] with identity rotation.
        let transform = link_transform(3.0, 0.0, 5.0, 0.0);
        assert!((transform.translation.vector - Vector3::new(3.0, 0.0, 5.0)).norm() < SMALL);
        assert!(transform.rotation.angle() < SMALL);
    }

    #[test]
    fn test_link_transform_quarter_turn() {
        // a = 1, theta = 90 degrees puts the frame origin on the y axis.
        let transform = link_transform(1.0, 0.0, 0.0, std::f64::consts::FRAC_PI_2);
        assert!((transform.translation.vector - Vector3::new(0.0, 1.0, 0.0)).norm() < SMALL);
        // The frame x axis now points along base y.
        let x_image = transform.rotation * Vector3::x();
        assert!((x_image - Vector3::y()).norm() < SMALL);
    }

    #[test]
    fn test_single_link_chain_equals_link_transform() {
        let parameters = DhParameters::kuka_lwr();
        let robot = DhKinematics::new(parameters);
        let joints = [0.3, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];

        let chain = robot.forward_to(&joints, 1);
        let single = link_transform(
            parameters.a[0],
            parameters.alpha[0],
            parameters.d[0],
            joints[0],
        );
        assert!(are_isometries_approx_equal(&chain, &single, SMALL));
    }

    #[test]
    fn test_chain_composition_is_incremental() {
        // forward_to(k) extended by link k must equal forward_to(k + 1).
        let parameters = DhParameters::kuka_lwr();
        let robot = DhKinematics::new(parameters);
        let joints = [0.1, -0.4, 0.7, 0.2, -0.9, 0.5, 0.3];

        for k in 1..7 {
            let prefix = robot.forward_to(&joints, k);
            let next_link = link_transform(
                parameters.a[k],
                parameters.alpha[k],
                parameters.d[k],
                joints[k],
            );
            let extended = prefix * next_link;
            let direct = robot.forward_to(&joints, k + 1);
            assert!(
                are_isometries_approx_equal(&extended, &direct, SMALL),
                "prefix {} extended by one link diverges from the direct chain",
                k
            );
        }
    }

    #[test]
    fn test_joint_frames_match_prefix_chains() {
        let robot = DhKinematics::new(DhParameters::kuka_lwr());
        let joints = [0.2, 0.5, -0.3, 0.8, -0.2, 0.6, -0.5];

        let frames = robot.joint_frames(&joints);
        for (index, frame) in frames.iter().enumerate() {
            let prefix = robot.forward_to(&joints, index + 1);
            assert!(are_isometries_approx_equal(frame, &prefix, SMALL));
        }
    }

    #[test]
    #[should_panic(expected = "chain index")]
    fn test_forward_to_rejects_zero_index() {
        let robot = DhKinematics::new(DhParameters::kuka_lwr());
        let _ = robot.forward_to(&[0.0; 7], 0);
    }

    #[test]
    #[should_panic(expected = "chain index")]
    fn test_forward_to_rejects_out_of_range_index() {
        let robot = DhKinematics::new(DhParameters::kuka_lwr());
        let _ = robot.forward_to(&[0.0; 7], 8);
    }
}
