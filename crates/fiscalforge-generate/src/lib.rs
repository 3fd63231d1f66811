//! Template resolution engine for Fiscalforge.
//!
//! This crate fills the bundled fiscal document skeletons (CFe, NFe, NFCe,
//! NFe devolucao) by replacing `{%key%}` placeholder tokens with generated
//! values, honoring per-field dependencies and pruning blocked elements
//! from the output.

pub mod document;
pub mod engine;
pub mod errors;
pub mod fields;
pub mod options;
pub mod resolver;

pub use document::{DocumentGenerator, TemplateKind};
pub use engine::resolve_template;
pub use errors::GenerationError;
pub use fields::FieldRegistry;
pub use options::{GenerateOption, GenerationConfig, with_blocked_placeholders, with_cnpj, with_cpf};
pub use resolver::{DependencyGraph, dependency_order};
