pub mod band_output;
pub mod baseline;
pub mod envelope;
pub mod extremum;
pub mod index;
