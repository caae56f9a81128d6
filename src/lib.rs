mod next_after_f32;

pub use next_after_f32::next_after_f32;
