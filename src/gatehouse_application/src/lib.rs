pub mod reconcile;
pub mod session;
pub mod use_cases;

pub use reconcile::IdentityReconciler;
pub use session::IssuedSession;
pub use use_cases::{
    delete_account::DeleteAccountUseCase,
    federated_login::{FederatedLoginError, FederatedLoginUseCase},
    list_accounts::ListAccountsUseCase,
    register::{RegisterError, RegisterUseCase},
};
