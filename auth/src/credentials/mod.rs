pub mod entry;
pub mod errors;
pub mod registry;

pub use entry::CredentialEntry;
pub use errors::RegistryError;
pub use registry::CredentialRegistry;
