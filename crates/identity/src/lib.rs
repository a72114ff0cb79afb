pub mod error;
mod key;
mod normalize;
mod remote;

pub use crate::normalize::Identity;
pub use crate::remote::Remote;
