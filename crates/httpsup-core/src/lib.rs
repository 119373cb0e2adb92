pub mod config;
pub mod logging;

pub mod fetch;
pub mod install;
pub mod legacy;
pub mod policy;
pub mod target;
pub mod transport;
