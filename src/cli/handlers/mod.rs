pub mod compress;
pub mod config;
pub mod hide;
pub mod inspect;
pub mod recover;
