pub mod activity;
pub mod education;
pub mod fitt_vp;
pub mod guideline;
pub mod population;
pub mod profile;
