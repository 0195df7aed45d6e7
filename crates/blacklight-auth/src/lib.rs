//! # blacklight-auth
//!
//! Credentials for the BlackLight lounge:
//!
//! - `jwt`: signed access tokens carrying the caller's id and role
//! - `password`: Argon2id hashing and the password length policy

pub mod jwt;
pub mod password;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
