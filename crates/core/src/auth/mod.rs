//! Authentication for the HTTP API.
//!
//! Requests carry an HS256-signed bearer token whose subject is the user id.
//! The [`Authenticator`] trait keeps the transport layer decoupled from the
//! token mechanics.

mod jwt;
mod traits;
mod types;

pub use jwt::{Claims, JwtAuthenticator};
pub use traits::{AuthError, Authenticator};
pub use types::{AuthRequest, Identity};
