pub mod artifact;
pub mod environment;
pub mod logging;
