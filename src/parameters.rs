//! Defines the Denavit-Hartenberg parameter data structure

pub mod dh_kinematics {
    use crate::utils::deg;

    /// Fixed Denavit-Hartenberg geometry of an N jointed serial arm.
    /// See [parameters_robots.rs](parameters_robots.rs) for examples of concrete robot models.
    ///
    /// The three tables are set once when the manipulator model is configured
    /// and stay immutable afterwards; the joint angle theta is the per tick
    /// input of the kinematic functions and is not stored here.
    #[derive(Debug, Clone, Copy)]
    pub struct DhParameters<const N: usize> {
        /// Link length along the common normal between consecutive joint axes.
        pub a: [f64; N],

        /// Link twist about the common normal, radians.
        pub alpha: [f64; N],

        /// Link offset along the joint axis.
        pub d: [f64; N],
    }

    impl<const N: usize> DhParameters<N> {
        /// Convert to string yaml representation (quick viewing, etc).
        /// Twists are printed in degrees.
        pub fn to_yaml(&self) -> String {
            format!(
                "dh_kinematics_parameters:\n  \
               a: [{}]\n  \
               alpha_deg: [{}]\n  \
               d: [{}]\n",
                self.a.iter().map(|x| x.to_string())
                    .collect::<Vec<_>>().join(","),
                self.alpha.iter().map(|x| deg(x))
                    .collect::<Vec<_>>().join(","),
                self.d.iter().map(|x| x.to_string())
                    .collect::<Vec<_>>().join(","),
            )
        }
    }
}
