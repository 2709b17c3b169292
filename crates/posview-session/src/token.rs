//! Session-token inspection.
//!
//! Tokens are JWT-shaped (`header.payload.signature`); only the payload is
//! read, and only the standard claims the back office cares about. The
//! clock is injected so expiry checks are deterministic in tests.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

/// Claims the back office reads from a session token.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenClaims {
    /// Expiry, seconds since the Unix epoch.
    pub exp: Option<i64>,
    /// Subject (user id).
    pub sub: Option<String>,
}

/// Errors raised while inspecting a token.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TokenError {
    /// Not three dot-separated segments.
    #[error("malformed token: expected three segments")]
    Malformed,

    /// Payload segment is not valid base64url.
    #[error("malformed token payload: {0}")]
    Payload(#[from] base64::DecodeError),

    /// Payload decoded but is not valid claims JSON.
    #[error("invalid token claims: {0}")]
    Claims(#[from] serde_json::Error),
}

/// Decode the payload claims of a JWT-shaped token without verifying the
/// signature.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::Malformed);
    };
    // Tolerate padded emitters.
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Whether the token's `exp` claim has passed at `now`.
///
/// A token without an `exp` claim never expires. Malformed tokens are an
/// error, not silently treated as live.
pub fn is_expired(token: &str, now: DateTime<Utc>) -> Result<bool, TokenError> {
    let claims = decode_claims(token)?;
    Ok(claims.exp.is_some_and(|exp| exp <= now.timestamp()))
}

/// Injected token storage, replacing ambient global state.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn store(&mut self, token: &str);
    fn clear(&mut self);
}

/// Process-local token store for tests and the CLI.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTokenStore {
    token: Option<String>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for InMemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.clone()
    }

    fn store(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    fn clear(&mut self) {
        self.token = None;
    }
}

/// The stored token, if one exists and has not expired. Malformed or
/// expired tokens read as absent.
pub fn active_token(store: &dyn TokenStore, now: DateTime<Utc>) -> Option<String> {
    let token = store.load()?;
    match is_expired(&token, now) {
        Ok(false) => Some(token),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_token(claims: &str) -> String {
        let payload = URL_SAFE_NO_PAD.encode(claims.as_bytes());
        format!("eyJhbGciOiJIUzI1NiJ9.{payload}.sig")
    }

    fn at(timestamp: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(timestamp, 0).unwrap()
    }

    #[test]
    fn reads_exp_and_sub_claims() {
        let token = make_token(r#"{"exp":1700000000,"sub":"USR-001"}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.exp, Some(1_700_000_000));
        assert_eq!(claims.sub.as_deref(), Some("USR-001"));
    }

    #[test]
    fn expiry_is_checked_against_the_injected_clock() {
        let token = make_token(r#"{"exp":1700000000}"#);
        assert!(!is_expired(&token, at(1_699_999_999)).unwrap());
        assert!(is_expired(&token, at(1_700_000_000)).unwrap());
        assert!(is_expired(&token, at(1_700_000_001)).unwrap());
    }

    #[test]
    fn token_without_exp_never_expires() {
        let token = make_token(r#"{"sub":"USR-001"}"#);
        assert!(!is_expired(&token, at(i64::MAX / 2)).unwrap());
    }

    #[test]
    fn malformed_tokens_are_errors_not_panics() {
        assert!(matches!(
            is_expired("not-a-token", at(0)),
            Err(TokenError::Malformed)
        ));
        assert!(matches!(
            is_expired("a.b.c.d", at(0)),
            Err(TokenError::Malformed)
        ));
        assert!(is_expired("x.!!!.y", at(0)).is_err());
        let garbage_json = format!("h.{}.s", URL_SAFE_NO_PAD.encode(b"not json"));
        assert!(matches!(
            is_expired(&garbage_json, at(0)),
            Err(TokenError::Claims(_))
        ));
    }

    #[test]
    fn active_token_hides_expired_and_malformed_tokens() {
        let mut store = InMemoryTokenStore::new();
        assert_eq!(active_token(&store, at(0)), None);

        store.store(&make_token(r#"{"exp":2000000000}"#));
        assert!(active_token(&store, at(1_900_000_000)).is_some());
        assert_eq!(active_token(&store, at(2_000_000_001)), None);

        store.store("garbage");
        assert_eq!(active_token(&store, at(0)), None);

        store.clear();
        assert_eq!(store.load(), None);
    }
}
