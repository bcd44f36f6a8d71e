use gatehouse_core::Account;

/// Outcome of a successful authentication flow: the resolved account plus a
/// freshly minted session token. The token is handed to the caller; nothing
/// is retained server-side.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub account: Account,
    pub token: String,
}
