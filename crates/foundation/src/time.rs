/// Time primitive
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Time(pub f64); // seconds
