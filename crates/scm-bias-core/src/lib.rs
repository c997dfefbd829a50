pub mod aggregate;
pub mod classify;
pub mod dimension;

pub use aggregate::*;
pub use classify::*;
pub use dimension::*;
