mod base;
pub mod error;
mod parse;
mod proxy;
mod remote;
mod stringify;

pub use crate::base::base_url;
pub use crate::parse::{ParsedRoute, parse};
pub use crate::proxy::{DEFAULT_GATEWAY, UrlOptions, url};
pub use crate::remote::{get_remote, remote_url};
pub use crate::stringify::{DEFAULT_BRANCH, stringify};
