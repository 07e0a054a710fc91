pub mod age_guidelines;
pub mod exercise_examples;
pub mod fitt_vp;
pub mod met_education;
pub mod met_library;
pub mod met_table;
pub mod populations;
