pub mod backend;
pub mod cpu;
pub mod pipeline;
pub mod surface;
