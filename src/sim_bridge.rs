//! Bridge to simulator hosts that exchange transforms as flat float arrays.
//!
//! The host side represents a pose as 12 floats, the 3x3 rotation laid out
//! row by row with the translation as the fourth column of each row, and a
//! generic r x c matrix as r * c floats in row major order. Conversions are
//! lossless for finite values apart from the f64 to f32 narrowing the host
//! format imposes. The pure kinematic functions of this crate never call
//! into this module; it exists only at the boundary.

extern crate nalgebra as na;

use crate::kinematic_traits::Pose;
use anyhow::{Result, bail};
use na::{Matrix3, Rotation3, SMatrix, Translation3, UnitQuaternion, Vector3};

/// Pack a pose into the host's 12 element row major pose array.
pub fn pose_to_flat(pose: &Pose) -> [f32; 12] {
    let rotation = pose.rotation.to_rotation_matrix().into_inner();
    let translation = pose.translation.vector;

    let mut out = [0.0f32; 12];
    for row in 0..3 {
        for col in 0..3 {
            out[row * 4 + col] = rotation[(row, col)] as f32;
        }
        out[row * 4 + 3] = translation[row] as f32;
    }
    out
}

/// Unpack the host's 12 element pose array. The rotation block is taken as
/// is; the host is trusted to deliver a proper rotation.
pub fn flat_to_pose(flat: &[f32; 12]) -> Result<Pose> {
    if flat.iter().any(|value| !value.is_finite()) {
        bail!("pose array contains non finite values");
    }
    let rotation = Matrix3::new(
        flat[0] as f64, flat[1] as f64, flat[2] as f64,
        flat[4] as f64, flat[5] as f64, flat[6] as f64,
        flat[8] as f64, flat[9] as f64, flat[10] as f64,
    );
    let translation = Vector3::new(flat[3] as f64, flat[7] as f64, flat[11] as f64);

    Ok(Pose::from_parts(
        Translation3::from(translation),
        UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(rotation)),
    ))
}

/// Pack a rotation into 9 floats, row major.
pub fn rotation_to_flat(rotation: &Matrix3<f64>) -> [f32; 9] {
    let mut out = [0.0f32; 9];
    for row in 0..3 {
        for col in 0..3 {
            out[row * 3 + col] = rotation[(row, col)] as f32;
        }
    }
    out
}

/// Unpack 9 row major floats into a rotation matrix.
pub fn flat_to_rotation(flat: &[f32; 9]) -> Result<Matrix3<f64>> {
    if flat.iter().any(|value| !value.is_finite()) {
        bail!("rotation array contains non finite values");
    }
    Ok(Matrix3::new(
        flat[0] as f64, flat[1] as f64, flat[2] as f64,
        flat[3] as f64, flat[4] as f64, flat[5] as f64,
        flat[6] as f64, flat[7] as f64, flat[8] as f64,
    ))
}

pub fn vector_to_flat(vector: &Vector3<f64>) -> [f32; 3] {
    [vector.x as f32, vector.y as f32, vector.z as f32]
}

pub fn flat_to_vector(flat: &[f32; 3]) -> Vector3<f64> {
    Vector3::new(flat[0] as f64, flat[1] as f64, flat[2] as f64)
}

/// Pack any fixed size matrix (a Jacobian, a gain) into the host's generic
/// row major r x c array.
pub fn matrix_to_flat<const R: usize, const C: usize>(matrix: &SMatrix<f64, R, C>) -> Vec<f32> {
    let mut out = Vec::with_capacity(R * C);
    for row in 0..R {
        for col in 0..C {
            out.push(matrix[(row, col)] as f32);
        }
    }
    out
}

/// Build a 12 element pose array from a 9 element rotation and a 3 element
/// position, both row major.
pub fn compose_flat(rotation: &[f32; 9], position: &[f32; 3]) -> [f32; 12] {
    let mut out = [0.0f32; 12];
    for row in 0..3 {
        for col in 0..3 {
            out[row * 4 + col] = rotation[row * 3 + col];
        }
        out[row * 4 + 3] = position[row];
    }
    out
}

/// Split a 12 element pose array into its rotation and position parts.
pub fn decompose_flat(pose: &[f32; 12]) -> ([f32; 9], [f32; 3]) {
    let mut rotation = [0.0f32; 9];
    let mut position = [0.0f32; 3];
    for row in 0..3 {
        for col in 0..3 {
            rotation[row * 3 + col] = pose[row * 4 + col];
        }
        position[row] = pose[row * 4 + 3];
    }
    (rotation, position)
}

/// Scale every element of a host side array in place. Used by the host
/// adapter, not by the kinematic core.
pub fn scale_in_place(values: &mut [f32], factor: f32) {
    for value in values.iter_mut() {
        *value *= factor;
    }
}
