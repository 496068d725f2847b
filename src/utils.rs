//! Helper functions

extern crate nalgebra as na;

use crate::kinematic_traits::Joints;
use na::SVector;

/// Checks joint vectors for validity. This is only internally needed as the
/// kinematic functions are total over finite inputs.
pub(crate) mod dh_kinematics {
    use crate::kinematic_traits::Joints;

    /// Checks if all elements in the array are finite
    pub fn is_valid<const N: usize>(qs: &Joints<N>) -> bool {
        qs.iter().all(|&q| q.is_finite())
    }
}

/// Print joint values, converting radians to degrees.
#[allow(dead_code)]
pub fn dump_joints<const N: usize>(joints: &Joints<N>) {
    let mut row_str = String::new();
    for joint_idx in 0..N {
        let computed = joints[joint_idx];
        row_str.push_str(&format!("{:5.2} ", computed.to_degrees()));
    }
    println!("[{}]", row_str.trim_end());
}

/// Allows to specify joint values in degrees (converts to radians)
#[allow(dead_code)]
pub fn as_radians<const N: usize>(degrees: [i32; N]) -> Joints<N> {
    std::array::from_fn(|i| (degrees[i] as f64).to_radians())
}

/// Convert a column vector of the nalgebra layer into a joint array.
pub fn vector_to_joints<const N: usize>(vector: SVector<f64, N>) -> Joints<N> {
    std::array::from_fn(|i| vector[i])
}

/// formatting for YAML output
pub(crate) fn deg(x: &f64) -> String {
    if *x == 0.0 {
        return "0".to_string();
    }
    format!("{:.4}", x.to_degrees())
}
