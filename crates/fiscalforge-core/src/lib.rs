//! Brazilian fiscal identifier generation for Fiscalforge.
//!
//! This crate implements the modulo-11 check-digit algorithms behind the
//! three identifiers embedded in fiscal documents: CPF (personal tax ID),
//! CNPJ (company tax ID) and the 44-digit document access key. Each module
//! offers generation from a caller-supplied RNG, cosmetic masking, and
//! validation by check-digit recomputation.

pub mod access_key;
pub mod cnpj;
pub mod cpf;
pub mod digits;

pub use access_key::{AccessKeyOptions, UF_CODES};
