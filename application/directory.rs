//! Lookups against the IAM Identity Center directory.
mod base;
mod identity_center;

pub use base::IdentityDirectory;
pub use identity_center::IdentityCenterDirectory;
