use std::collections::HashMap;

/// Label key holding the authenticated session kind.
pub const CONNECTION_TYPE: &str = "CONNECTION_TYPE";
/// Label key holding the authentication token, when type is TOKEN.
pub const TOKEN: &str = "TOKEN";
/// Label key holding the effective numeric user id.
pub const USER_ID: &str = "USER_ID";

/// Kind of identity a connection is authenticated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionType {
    Generic,
    Token,
    User,
}

impl ConnectionType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ConnectionType::Generic => "GENERIC",
            ConnectionType::Token => "TOKEN",
            ConnectionType::User => "USER",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value {
            "GENERIC" => Some(ConnectionType::Generic),
            "TOKEN" => Some(ConnectionType::Token),
            "USER" => Some(ConnectionType::User),
            _ => None,
        }
    }
}

/// Flat string property set describing a connection's authenticated identity.
///
/// An empty set means the connection has never been configured. The set is
/// mutated in place when the same physical connection is handed to a new
/// identity; only the pool's configure/cost path reads or writes it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConnectionLabels {
    props: HashMap<String, String>,
}

impl ConnectionLabels {
    /// Uninitialized label set — a brand-new connection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels requesting (or describing) a generic, no-identity session.
    pub fn generic() -> Self {
        let mut labels = Self::new();
        labels.set(CONNECTION_TYPE, ConnectionType::Generic.as_str());
        labels
    }

    /// Labels requesting (or describing) a token-authenticated session.
    pub fn by_token(token: &str) -> Self {
        let mut labels = Self::new();
        labels.set(CONNECTION_TYPE, ConnectionType::Token.as_str());
        labels.set(TOKEN, token);
        labels
    }

    /// Labels requesting (or describing) a session for a concrete user.
    pub fn by_user(user_id: i64) -> Self {
        let mut labels = Self::new();
        labels.set(CONNECTION_TYPE, ConnectionType::User.as_str());
        labels.set(USER_ID, &user_id.to_string());
        labels
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.props.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.props.insert(key.to_string(), value.to_string());
    }

    pub fn connection_type(&self) -> Option<ConnectionType> {
        self.get(CONNECTION_TYPE).and_then(ConnectionType::from_label)
    }

    pub fn token(&self) -> Option<&str> {
        self.get(TOKEN)
    }

    pub fn user_id(&self) -> Option<&str> {
        self.get(USER_ID)
    }

    /// True when the request names a concrete identity (token or user).
    pub fn has_identity(&self) -> bool {
        self.token().is_some() || self.user_id().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Rewrite this label set in place to a freshly established identity.
    pub(crate) fn assign(&mut self, identity: ConnectionLabels) {
        self.props.clear();
        self.props.extend(identity.props);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_expected_keys() {
        assert!(ConnectionLabels::new().is_empty());

        let generic = ConnectionLabels::generic();
        assert_eq!(generic.connection_type(), Some(ConnectionType::Generic));
        assert!(!generic.has_identity());

        let token = ConnectionLabels::by_token("tok");
        assert_eq!(token.connection_type(), Some(ConnectionType::Token));
        assert_eq!(token.token(), Some("tok"));
        assert!(token.has_identity());

        let user = ConnectionLabels::by_user(42);
        assert_eq!(user.connection_type(), Some(ConnectionType::User));
        assert_eq!(user.user_id(), Some("42"));
    }

    #[test]
    fn assign_replaces_contents_in_place() {
        let mut labels = ConnectionLabels::by_token("old");
        labels.set(USER_ID, "1");
        labels.assign(ConnectionLabels::generic());
        assert_eq!(labels, ConnectionLabels::generic());
        assert!(labels.token().is_none());
    }

    #[test]
    fn structural_equality() {
        assert_eq!(
            ConnectionLabels::by_token("t"),
            ConnectionLabels::by_token("t")
        );
        assert_ne!(
            ConnectionLabels::by_token("t"),
            ConnectionLabels::by_token("u")
        );
    }
}
