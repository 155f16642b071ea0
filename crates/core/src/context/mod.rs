// context/mod.rs
mod registry;

pub use registry::{ServiceContext, SessionState};
