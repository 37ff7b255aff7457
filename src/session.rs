//! Session gate.
//!
//! There is exactly one authoritative check for "is authenticated": a probe
//! of the seat service with credentials attached. The corporate-domain check
//! on an entered identifier is pure client-side input validation and never
//! substitutes for server verification.

use crate::api::{SeatServiceClient, SessionUser};

/// Outcome of validating an entered identifier locally
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierCheck {
    Valid,
    /// Identifier does not contain the corporate domain substring
    Invalid { domain: String },
}

impl IdentifierCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, IdentifierCheck::Valid)
    }
}

/// Validate an entered identifier against the corporate domain substring,
/// case-insensitively. This blocks submission only; it proves nothing about
/// the session.
pub fn check_identifier(w3_id: &str, domain: &str) -> IdentifierCheck {
    if w3_id.to_lowercase().contains(&domain.to_lowercase()) {
        IdentifierCheck::Valid
    } else {
        IdentifierCheck::Invalid {
            domain: domain.to_string(),
        }
    }
}

/// Result of probing the backend for an authenticated session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The probe succeeded; the session cookie is valid
    Authenticated(SessionUser),
    /// The probe failed; the user must complete the sign-in redirect flow
    Unauthenticated { login_url: String },
}

/// Probe the seat service for an authenticated session.
///
/// The seat-list endpoint is the authoritative check (it requires the
/// session cookie). When it succeeds, `/me` supplies the display identity;
/// if that call fails the locally entered identifier is kept instead.
pub async fn probe(client: &SeatServiceClient, entered_w3_id: &str) -> ProbeOutcome {
    if let Err(e) = client.list_seats().await {
        tracing::warn!("session probe failed: {e}");
        return ProbeOutcome::Unauthenticated {
            login_url: client.login_url(),
        };
    }

    let user = match client.whoami().await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!("whoami failed, using entered identifier: {e}");
            SessionUser {
                w3_id: entered_w3_id.to_string(),
                name: None,
                email: None,
            }
        }
    };

    ProbeOutcome::Authenticated(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_without_domain_is_invalid() {
        assert!(!check_identifier("user@gmail.com", "ibm.com").is_valid());
        assert!(!check_identifier("", "ibm.com").is_valid());
        assert!(!check_identifier("ibm", "ibm.com").is_valid());
    }

    #[test]
    fn test_identifier_with_domain_is_valid() {
        assert!(check_identifier("user@ibm.com", "ibm.com").is_valid());
        assert!(check_identifier("user@in.ibm.com", "ibm.com").is_valid());
    }

    #[test]
    fn test_identifier_check_is_case_insensitive() {
        assert!(check_identifier("USER@IBM.COM", "ibm.com").is_valid());
        assert!(check_identifier("user@ibm.com", "IBM.COM").is_valid());
    }

    #[test]
    fn test_invalid_outcome_carries_domain() {
        match check_identifier("user@gmail.com", "ibm.com") {
            IdentifierCheck::Invalid { domain } => assert_eq!(domain, "ibm.com"),
            IdentifierCheck::Valid => panic!("expected invalid"),
        }
    }
}
