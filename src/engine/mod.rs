// Engine modules: frame clock, input, rendering seam

pub mod game_loop;
pub mod input;
pub mod renderer;
