//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations that carry no domain meaning:
//! - Password hashing (Argon2id) and the registration password policy
//! - Zeroization of clear text secrets

pub mod password;
