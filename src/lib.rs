// Owlet runner: a side-view character whose sprite animation is driven by a
// small state machine (idle, run, jump) fed by run/sprint/jump kinematics.

pub mod engine;
pub mod game;
