//! kintai driver - wires the core pipeline to a message source and the
//! JSON data directory.

pub mod config;
pub mod logging;
pub mod run;
pub mod source;
pub mod store;
