pub mod analyzer;
pub mod two_year_ma;
