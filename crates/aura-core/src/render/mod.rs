pub mod draw;

pub use draw::{draw_line, draw_rect_outline, fill_disc};
