use crate::session::labels::{ConnectionLabels, ConnectionType};
use derive_more::Display;

/// Outcome of matching a connection request against a candidate's labels.
///
/// The numeric rank (lower is better) is what the pool uses to pick the
/// cheapest-to-adapt idle connection. Ranks through `UserMatch` need no
/// re-authentication; the rest do.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(i32)]
pub enum ConnectionMatch {
    /// Requested and current labels are equal in their entirety.
    ExactMatch = 0,
    /// Requested token equals the connection's current token.
    TokenMatch = 1,
    /// Requested user id equals the connection's current user id.
    UserMatch = 2,
    /// Uninitialized connection and the caller wants a generic session.
    GenericConnection = 3,
    /// Uninitialized connection but the caller wants a concrete identity.
    NewConnection = 4,
    /// Token session for a different token; reusable after re-authentication.
    ReuseToken = 5,
    /// User session for a different user; reusable after re-authentication.
    ReuseUser = 6,
    /// Generic session vs an identity request; last-resort reuse.
    ReuseGeneric = 7,
}

impl ConnectionMatch {
    pub const fn rank(self) -> i32 {
        self as i32
    }

    /// True when the matched connection can be handed out without running a
    /// session switch.
    pub const fn satisfied(self) -> bool {
        matches!(
            self,
            ConnectionMatch::ExactMatch | ConnectionMatch::TokenMatch | ConnectionMatch::UserMatch
        )
    }
}

/// Classify how well a candidate connection's current labels fit a request.
///
/// The branch order is part of the contract — reordering changes which
/// connections the pool picks under load:
/// 1. full label equality,
/// 2. uninitialized connection (split on whether the request carries an
///    identity),
/// 3. token equality,
/// 4. user-id equality,
/// 5. switch on the connection's current type, falling back to
///    `GenericConnection` only when the request carries no identity.
pub fn evaluate(requested: &ConnectionLabels, current: &ConnectionLabels) -> ConnectionMatch {
    if requested == current {
        return ConnectionMatch::ExactMatch;
    }
    let Some(current_type) = current.connection_type() else {
        return if requested.has_identity() {
            ConnectionMatch::NewConnection
        } else {
            ConnectionMatch::GenericConnection
        };
    };
    if requested.token().is_some() && requested.token() == current.token() {
        return ConnectionMatch::TokenMatch;
    }
    if requested.user_id().is_some() && requested.user_id() == current.user_id() {
        return ConnectionMatch::UserMatch;
    }
    match current_type {
        ConnectionType::Token => ConnectionMatch::ReuseToken,
        ConnectionType::User => ConnectionMatch::ReuseUser,
        ConnectionType::Generic if requested.has_identity() => ConnectionMatch::ReuseGeneric,
        ConnectionType::Generic => ConnectionMatch::GenericConnection,
    }
}

/// Reuse-cost rank of a candidate connection for a request; lower is better.
pub fn cost(requested: &ConnectionLabels, current: &ConnectionLabels) -> i32 {
    evaluate(requested, current).rank()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn token_session(token: &str, user_id: i64) -> ConnectionLabels {
        let mut labels = ConnectionLabels::by_token(token);
        labels.set(crate::session::labels::USER_ID, &user_id.to_string());
        labels
    }

    #[rstest]
    #[case::empty_vs_empty(
        ConnectionLabels::new(),
        ConnectionLabels::new(),
        ConnectionMatch::ExactMatch
    )]
    #[case::token_vs_uninitialized(
        ConnectionLabels::by_token("t"),
        ConnectionLabels::new(),
        ConnectionMatch::NewConnection
    )]
    #[case::token_match(
        ConnectionLabels::by_token("t"),
        token_session("t", 42),
        ConnectionMatch::TokenMatch
    )]
    #[case::token_mismatch(
        ConnectionLabels::by_token("t"),
        token_session("other", 42),
        ConnectionMatch::ReuseToken
    )]
    #[case::generic_vs_generic_session(
        ConnectionLabels::new(),
        ConnectionLabels::generic(),
        ConnectionMatch::GenericConnection
    )]
    #[case::user_match(
        ConnectionLabels::by_user(42),
        ConnectionLabels::by_user(42),
        ConnectionMatch::ExactMatch
    )]
    #[case::user_match_extra_labels(
        ConnectionLabels::by_user(42),
        token_session("t", 42),
        ConnectionMatch::UserMatch
    )]
    #[case::user_mismatch(
        ConnectionLabels::by_user(42),
        ConnectionLabels::by_user(43),
        ConnectionMatch::ReuseUser
    )]
    #[case::identity_vs_generic_session(
        ConnectionLabels::by_user(42),
        ConnectionLabels::generic(),
        ConnectionMatch::ReuseGeneric
    )]
    #[case::generic_request_vs_user_session(
        ConnectionLabels::new(),
        ConnectionLabels::by_user(42),
        ConnectionMatch::ReuseUser
    )]
    #[case::generic_request_vs_uninitialized(
        ConnectionLabels::generic(),
        ConnectionLabels::new(),
        ConnectionMatch::GenericConnection
    )]
    fn decision_table(
        #[case] requested: ConnectionLabels,
        #[case] current: ConnectionLabels,
        #[case] expected: ConnectionMatch,
    ) {
        assert_eq!(evaluate(&requested, &current), expected);
        assert_eq!(cost(&requested, &current), expected.rank());
    }

    #[test]
    fn ranks_are_stable() {
        assert_eq!(ConnectionMatch::ExactMatch.rank(), 0);
        assert_eq!(ConnectionMatch::TokenMatch.rank(), 1);
        assert_eq!(ConnectionMatch::UserMatch.rank(), 2);
        assert_eq!(ConnectionMatch::GenericConnection.rank(), 3);
        assert_eq!(ConnectionMatch::NewConnection.rank(), 4);
        assert_eq!(ConnectionMatch::ReuseToken.rank(), 5);
        assert_eq!(ConnectionMatch::ReuseUser.rank(), 6);
        assert_eq!(ConnectionMatch::ReuseGeneric.rank(), 7);
    }

    #[test]
    fn satisfied_only_without_session_switch() {
        assert!(ConnectionMatch::ExactMatch.satisfied());
        assert!(ConnectionMatch::TokenMatch.satisfied());
        assert!(ConnectionMatch::UserMatch.satisfied());
        assert!(!ConnectionMatch::GenericConnection.satisfied());
        assert!(!ConnectionMatch::ReuseGeneric.satisfied());
    }
}
