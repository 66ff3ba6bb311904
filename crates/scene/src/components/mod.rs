pub mod drawable3d;
pub mod properties;
pub mod transform;
pub mod visibility;

pub use drawable3d::*;
pub use properties::*;
pub use transform::*;
pub use visibility::*;
