pub mod config {
    pub use murmuration_core::config::*;
}
pub mod error {
    pub use murmuration_core::error::*;
}
pub mod lifecycle {
    pub use murmuration_core::lifecycle::*;
}
pub mod population {
    pub use murmuration_core::population::*;
}
pub mod snapshot {
    pub use murmuration_core::snapshot::*;
}
pub mod spatial_index {
    pub use murmuration_core::spatial_index::*;
}
pub mod systems {
    pub use murmuration_core::systems::*;
}

pub mod world;
