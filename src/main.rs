use nalgebra::{Matrix6, Vector6};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rs_dh_kinematics::jacobian::Jacobian;
use rs_dh_kinematics::kinematic_traits::{DOF, Joints, Kinematics};
use rs_dh_kinematics::kinematics_impl::DhKinematics;
use rs_dh_kinematics::parameters::dh_kinematics::DhParameters;
use rs_dh_kinematics::resolvers::{TaskCommand, random_exploration};
use rs_dh_kinematics::utils::dump_joints;

/// Usage example.
fn main() {
    let robot = DhKinematics::new(DhParameters::kuka_lwr());
    let joints: Joints<DOF> = [0.0, 0.4, 0.2, -0.8, 0.3, 0.9, -0.1];
    println!("Joint configuration:");
    dump_joints(&joints);

    let tcp = robot.forward(&joints); // Pose is alias of nalgebra::Isometry3<f64>
    let position = tcp.translation.vector;
    println!(
        "TCP position, mm: [{:.1}, {:.1}, {:.1}]",
        position.x, position.y, position.z
    );

    // One control tick: ask for 10 mm/s along x while correcting a small
    // pose error with a proportional gain.
    let jacobian = Jacobian::new(&robot, &joints);
    let command = TaskCommand {
        desired_velocity: Vector6::new(10.0, 0.0, 0.0, 0.0, 0.0, 0.0),
        desired_pose: Vector6::new(position.x + 1.0, position.y, position.z, 0.0, 0.0, 0.0),
        current_pose: Vector6::new(position.x, position.y, position.z, 0.0, 0.0, 0.0),
    };
    let gain = Matrix6::identity();

    // The exploration generator is owned here, not hidden in the resolver;
    // seeding it makes the run reproducible.
    let mut rng = SmallRng::seed_from_u64(42);
    match jacobian.resolve_redundant(&command, &gain, &random_exploration(&mut rng)) {
        Ok(joint_velocities) => {
            println!("Pseudo-inverse joint velocities: {:?}", joint_velocities);
        }
        Err(failure) => println!("Pseudo-inverse resolution failed: {}", failure),
    }

    let joint_velocities = jacobian.resolve_damped(&command, &gain, 0.1);
    println!("Damped least squares joint velocities: {:?}", joint_velocities);

    // What a simulator host would receive over the flat array boundary.
    let flat_pose = rs_dh_kinematics::sim_bridge::pose_to_flat(&tcp);
    println!("TCP pose for the host, row major: {:?}", flat_pose);

    #[cfg(feature = "allow_filesystem")]
    {
        // This requires YAML library
        let parameters = DhParameters::kuka_lwr();
        println!("Parameter table:\n{}", parameters.to_yaml());
    }
}
