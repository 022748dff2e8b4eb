//! Authentication seam
//!
//! Credential acquisition and refresh live outside this crate; the client only
//! asks a [`TokenProvider`] for a bearer token before each page fetch.

mod token;

pub use token::AccessToken;
pub use token::StaticTokenProvider;
pub use token::TokenProvider;
