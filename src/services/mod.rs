// Service exports
pub mod flyby;

pub use flyby::{flyby, FlybyClient};
