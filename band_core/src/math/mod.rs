pub mod linear_model;
pub mod rolling_mean;
