pub mod rolling_average;
pub mod slice_ext;
pub mod weights;
