pub mod energy;
pub mod face;
pub mod gradient;
pub mod shapes;
pub mod starfield;
