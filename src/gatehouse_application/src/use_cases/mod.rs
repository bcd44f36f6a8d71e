pub mod delete_account;
pub mod federated_login;
pub mod list_accounts;
pub mod register;
