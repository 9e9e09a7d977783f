pub mod bank;
pub mod latency;
pub mod markup;
pub mod pattern;
pub mod session;
