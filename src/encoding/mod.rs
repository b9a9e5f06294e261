/*
    Module that bundles together the binary-to-text encodings used for key export
*/

pub mod version_prefix;
pub mod base58;
pub use version_prefix::VersionPrefix;
pub use base58::Base58;
