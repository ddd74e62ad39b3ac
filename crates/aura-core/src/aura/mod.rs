pub mod compositor;

pub use compositor::{draw_aura, AuraConfig};
