//! archdoc - Generate and validate architect-skill review documents
//!
//! A documentation toolkit for the AWS Solutions Architect authoring workflow:
//! generates skeleton review documents (WAF review, decision matrix, ADR) from
//! the skill's templates, and validates skill structure, workflow output
//! artifacts, and docs/registry cross-references.

pub mod cli;
pub mod config;
pub mod outputs;
pub mod registry;
pub mod report;
pub mod skeleton;
pub mod structure;
pub mod util;
