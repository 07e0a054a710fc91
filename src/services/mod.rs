pub mod energy;
pub mod fitt_vp;
pub mod guidelines;
pub mod personal_plan;
pub mod populations;
