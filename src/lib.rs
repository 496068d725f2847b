//! Rust implementation of forward kinematics, geometric Jacobian assembly and
//! Cartesian velocity resolution for redundant serial manipulators described
//! in the standard Denavit-Hartenberg convention.
//!
//! The crate targets kinematically redundant arms (more joints than task
//! dimensions, the reference model being a 7 axis lightweight arm with a
//! 6 dimensional task space) and follows the classical geometric formulation
//! for revolute chains (see Siciliano et al., _Robotics: Modelling, Planning
//! and Control_).
//!
//! # Features
//!
//! - Forward kinematics to the end effector or to any intermediate joint
//!   frame, with all cumulative frames available in one pass.
//! - Analytic geometric Jacobian (6 x N) assembled from the chain of
//!   cumulative transforms.
//! - Two velocity resolvers turning a Cartesian command into joint
//!   velocities: the redundancy exploiting pseudo-inverse with null space
//!   injection, and the singularity robust damped least squares inverse.
//! - Pluggable null space objectives: seeded random exploration, or joint
//!   limit centering driven by [constraints::Constraints].
//! - The joint count is a compile time parameter, so joint vectors can never
//!   disagree in length with the parameter table.
//! - Optional YAML loading of DH tables, and a flat float array bridge for
//!   simulator hosts.
//!
//! # Parameters
//!
//! This library uses the three fixed Denavit-Hartenberg tables (_a_, _alpha_,
//! _d_); the joint angles _theta_ are the per tick input. To use the library,
//! fill out a [parameters::dh_kinematics::DhParameters] data structure, or
//! start from a model in [parameters_robots].

pub mod parameters;
pub mod parameters_robots;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;

pub mod utils;
pub mod kinematic_traits;
pub mod kinematics_impl;

pub mod constraints;

pub mod jacobian;

pub mod resolvers;

pub mod sim_bridge;

#[cfg(feature = "allow_filesystem")]
pub mod parameter_error;

#[cfg(test)]
mod tests;
