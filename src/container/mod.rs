mod fixed_vec;

pub use fixed_vec::FixedVec;
