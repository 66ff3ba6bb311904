pub mod layer;
pub mod map_planes;
pub mod seat_stacks;
pub mod symbology;

pub use layer::*;
pub use map_planes::*;
pub use seat_stacks::*;
pub use symbology::*;
