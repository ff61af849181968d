mod headless;
mod loop_handler;

pub use headless::{run_headless, HeadlessOptions};
pub use loop_handler::run;
