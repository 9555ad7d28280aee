//! Defines the planar arm parameter data structure

pub mod planar_kinematics {

    /// Link lengths of the planar arm. Lengths are in the same units as the
    /// render surface (pixels), constant for the lifetime of the process.
    #[derive(Debug, Clone, Copy)]
    pub struct Parameters {
        /// The length of the first link (base joint to joint 2).
        pub l1: f64,

        /// The length of the second link (joint 2 to joint 3).
        pub l2: f64,

        /// The length of the third link (joint 3 to the end effector).
        /// Notably shorter than the other two in the default arm.
        pub l3: f64,
    }

    impl Parameters {
        /// The arm the simulation was written for: two long links and a
        /// short effector link.
        pub fn default_arm() -> Self {
            Parameters {
                l1: 100.0,
                l2: 100.0,
                l3: 20.0,
            }
        }

        /// Fully extended reach of the arm.
        pub fn total_reach(&self) -> f64 {
            self.l1 + self.l2 + self.l3
        }
    }

    impl Default for Parameters {
        fn default() -> Self {
            Parameters::default_arm()
        }
    }
}
