use crate::error::{Error, Result};
use crate::session::cost::evaluate;
use crate::session::labels::ConnectionLabels;
use crate::{debug, warn};
use sqlx::PgConnection;

/// Privileged session-switch calls. Each establishes a new effective user
/// context on the physical connection; the token variant resolves and returns
/// the numeric user id, the user variant echoes it back.
const SET_IDENTITY_BY_TOKEN: &str = "SELECT provys_session.set_identity_by_token($1)";
const SET_IDENTITY_BY_USER: &str = "SELECT provys_session.set_identity_by_user($1)";
const SET_IDENTITY_GENERIC: &str = "SELECT provys_session.set_identity_generic()";

/// A physical connection together with the labels describing the identity it
/// is currently authenticated as.
///
/// The pool owns instances of this and hands out exclusive (`&mut`) access
/// while a connection is checked out, so `configure` never races on labels.
#[derive(Debug)]
pub struct LabeledConnection {
    connection: PgConnection,
    labels: ConnectionLabels,
}

impl LabeledConnection {
    /// Wrap a freshly opened, never-configured connection.
    pub fn new(connection: PgConnection) -> Self {
        Self {
            connection,
            labels: ConnectionLabels::new(),
        }
    }

    pub fn labels(&self) -> &ConnectionLabels {
        &self.labels
    }

    pub fn connection(&mut self) -> &mut PgConnection {
        &mut self.connection
    }
}

/// Make `connection` satisfy `requested`, re-authenticating when needed.
///
/// Returns `true` when the connection is ready for the caller — either its
/// labels already satisfied the request or the session switch succeeded and
/// the labels were rewritten to the new identity. Returns `false` when the
/// switch failed; the pool should discard the connection and try another
/// candidate, so the failure is a status, not an error to propagate.
pub async fn configure(requested: &ConnectionLabels, connection: &mut LabeledConnection) -> bool {
    let matched = evaluate(requested, &connection.labels);
    if matched.satisfied() {
        debug!("session already satisfies request ({matched})");
        return true;
    }
    match reauthenticate(requested, &mut connection.connection).await {
        Ok(identity) => {
            debug!("session switched ({matched} -> {identity:?})");
            connection.labels.assign(identity);
            true
        }
        Err(error) => {
            warn!("session switch failed: {error}");
            false
        }
    }
}

/// Run the session-switch call for the requested identity and produce the
/// labels the connection carries afterwards.
async fn reauthenticate(
    requested: &ConnectionLabels,
    connection: &mut PgConnection,
) -> Result<ConnectionLabels> {
    if let Some(token) = requested.token() {
        let user_id: i64 = sqlx::query_scalar(SET_IDENTITY_BY_TOKEN)
            .bind(token)
            .fetch_one(&mut *connection)
            .await?;
        let mut labels = ConnectionLabels::by_token(token);
        labels.set(crate::session::labels::USER_ID, &user_id.to_string());
        Ok(labels)
    } else if let Some(user_id) = requested.user_id() {
        let user_id: i64 = user_id
            .parse()
            .map_err(|_| Error::InvalidLabel(user_id.to_string()))?;
        let user_id: i64 = sqlx::query_scalar(SET_IDENTITY_BY_USER)
            .bind(user_id)
            .fetch_one(&mut *connection)
            .await?;
        Ok(ConnectionLabels::by_user(user_id))
    } else {
        sqlx::query(SET_IDENTITY_GENERIC)
            .execute(&mut *connection)
            .await?;
        Ok(ConnectionLabels::generic())
    }
}
