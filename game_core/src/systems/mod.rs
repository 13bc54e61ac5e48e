pub mod ai;
pub mod collision;
pub mod gc;
pub mod input;
pub mod movement;
pub mod particles;
pub mod scoring;

pub use ai::*;
pub use collision::*;
pub use gc::*;
pub use input::*;
pub use movement::*;
pub use particles::*;
pub use scoring::*;
