pub mod google;

pub use google::{GoogleConfig, GoogleFederator};
