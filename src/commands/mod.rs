pub mod build;
pub mod fetch;
pub mod sample;
