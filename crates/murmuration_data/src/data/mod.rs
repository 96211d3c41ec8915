pub mod agent;
pub mod event;
pub mod vector;

pub use agent::*;
pub use event::*;
pub use vector::*;
