mod appointments;
mod health_check;

pub use appointments::*;
pub use health_check::*;
