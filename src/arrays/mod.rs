pub mod dynamic_array;
pub mod fixed_array;
