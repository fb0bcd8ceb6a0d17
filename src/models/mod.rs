pub mod advisory;
pub mod crop;
pub mod disease;
pub mod environment;
pub mod fertilizer;
pub mod nutrients;
pub mod plan;
pub mod ranking;

pub use advisory::*;
pub use crop::*;
pub use disease::*;
pub use environment::*;
pub use fertilizer::*;
pub use nutrients::*;
pub use plan::*;
pub use ranking::*;
