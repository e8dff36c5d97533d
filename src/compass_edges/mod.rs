pub mod convolve;
pub mod directional;
pub mod gaussian;
pub mod kernel;
pub mod pipeline;
