pub mod config;
pub mod constants;
pub mod error;
pub mod glass;
pub mod input;
pub mod lifecycle;
pub mod proximity;
pub mod smoothing;
pub mod tilt;
pub mod trail;

pub use config::*;
pub use error::*;
pub use glass::*;
pub use input::*;
pub use lifecycle::*;
pub use proximity::*;
pub use smoothing::*;
pub use tilt::*;
pub use trail::*;
