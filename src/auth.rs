//! Auth-domain credential inputs, secret wrappers, and token artifacts.

pub mod credentials;
pub mod secret;
pub mod token;

pub use credentials::*;
pub use secret::*;
pub use token::*;
