//! Session utilities for the back office: token inspection and password
//! strength scoring.
//!
//! The token helpers only *inspect* JWT-shaped tokens (payload claims,
//! expiry against an injected clock); no signature verification happens
//! here, and no storage is ambient — callers inject a [`TokenStore`].

pub mod password;
pub mod token;

pub use password::{PasswordStrength, score_password};
pub use token::{
    InMemoryTokenStore, TokenClaims, TokenError, TokenStore, active_token, decode_claims,
    is_expired,
};
