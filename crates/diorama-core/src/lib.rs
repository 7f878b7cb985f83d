//! Interaction and animation runtime for the desert room diorama.
//!
//! Everything in here is platform-free: the web front-end feeds pointer
//! events and frame timestamps in, and receives node poses, monitor uniforms,
//! cursor styles, sounds and modal requests back through the [`Host`] traits.

pub mod ambient;
pub mod camera;
pub mod constants;
pub mod effects;
pub mod error;
pub mod host;
pub mod hover;
pub mod monitor;
pub mod pointer;
pub mod registry;
pub mod runtime;
pub mod scene;
pub mod tags;
pub mod theme;
pub mod tween;

pub use ambient::*;
pub use camera::*;
pub use effects::*;
pub use error::*;
pub use hit_test::*;
pub use host::*;
pub use hover::*;
pub use monitor::*;
pub use pointer::*;
pub use registry::*;
pub use runtime::*;
pub use scene::*;
pub use tags::*;
pub use theme::*;
pub use tween::*;
