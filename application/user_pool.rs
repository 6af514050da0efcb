mod base;
mod cognito;

pub use base::UserPool;
pub use cognito::CognitoUserPool;
