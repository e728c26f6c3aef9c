pub mod ambient;
pub mod collision;
pub mod gc;
pub mod input;
pub mod movement;
pub mod pickups;
pub mod scoring;
pub mod spawn;

pub use ambient::*;
pub use collision::*;
pub use gc::*;
pub use input::*;
pub use movement::*;
pub use pickups::*;
pub use scoring::*;
pub use spawn::*;
