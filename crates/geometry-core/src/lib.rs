pub mod app;
pub mod camera;
pub mod constants;
pub mod drag;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod narrative;
pub mod projector;
pub mod scene;
pub mod tools;

pub use app::*;
pub use camera::*;
pub use constants::*;
pub use drag::*;
pub use draw::*;
pub use error::*;
pub use geometry::*;
pub use narrative::*;
pub use projector::*;
pub use scene::*;
pub use tools::*;
