use crate::kinematic_traits::Pose;

/// Compare two poses with the given tolerance, both in translation distance
/// and rotation angle.
pub(crate) fn are_isometries_approx_equal(a: &Pose, b: &Pose, tolerance: f64) -> bool {
    let translation_distance = (a.translation.vector - b.translation.vector).norm();
    let angular_distance = a.rotation.angle_to(&b.rotation);

    translation_distance.abs() <= tolerance && angular_distance.abs() <= tolerance
}
