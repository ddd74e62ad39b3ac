pub mod aura;
pub mod beams;
pub mod color;
pub mod consts;
pub mod detection;
pub mod error;
pub mod filters;
pub mod frame;
pub mod io;
pub mod motion;
pub mod pipeline;
pub mod render;
