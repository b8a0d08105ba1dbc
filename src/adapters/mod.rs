pub mod export;
pub mod hh;
pub mod progress;
