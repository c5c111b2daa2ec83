pub mod claims;
pub mod errors;
pub mod issuer;
pub mod key;

pub use claims::TokenClaims;
pub use errors::SigningKeyError;
pub use errors::TokenError;
pub use issuer::TokenIssuer;
pub use key::SigningKey;
