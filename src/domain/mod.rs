pub mod turbine;

pub use turbine::*;
