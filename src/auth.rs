//! Auth-domain records: credentials, expiry, user profile, authorization grant, sign-in input.

pub mod credential;
pub mod grant;
pub mod login;
pub mod profile;

pub use credential::*;
pub use grant::*;
pub use login::*;
pub use profile::*;
