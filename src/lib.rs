// Module declarations for the library crate.

pub mod cli;
pub mod config;
pub mod device;
pub mod error;
pub mod event;
pub mod forward;
pub mod logger;
pub mod signals;
pub mod util;

pub use device::GrabbedDevice;
pub use error::Error;
pub use forward::Summary;
