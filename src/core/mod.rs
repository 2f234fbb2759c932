pub mod config;
pub mod constants;
pub mod nav;
pub mod particles;
pub mod proximity;
pub mod scene;
pub mod scroll;
pub mod surface;

pub use config::*;
pub use nav::*;
pub use particles::*;
pub use scene::*;
pub use scroll::*;
pub use surface::*;
