pub mod coordinator;
pub mod entities;

pub use coordinator::Kitchen;
pub use entities::*;
