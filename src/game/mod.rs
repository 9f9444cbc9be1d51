pub mod controller;
pub mod engine;
pub mod r#loop; // `loop` is reserved keyword, need to escape with `r#`
pub mod position_counter;
pub mod scheduler;
pub mod scoring;
pub mod session;
