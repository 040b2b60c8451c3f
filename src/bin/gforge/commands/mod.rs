mod build;

pub use build::run_build;
