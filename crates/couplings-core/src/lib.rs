//! # Couplings Core Library
//!
//! Storage, classification, and projection primitives for residue
//! coupling-score data, as produced by evolutionary-coupling pipelines and
//! consumed by contact-map visualization frontends.
//!
//! The library is split into two layers:
//!
//! - **[`core`]: The Foundation.** Immutable data models (`CouplingRecord`,
//!   `CouplingContainer`, `EmbeddingNode`) and CSV readers for the standard
//!   `coupling_scores.csv` / `contacts_monomer.csv` dataset formats.
//!
//! - **[`analysis`]: The Operations.** Pure, stateless functions over a
//!   populated container: observed-contact selection, top-N contact
//!   prediction with linear-separation filtering, and the viewport fit
//!   computation used to center 2D embeddings.
//!
//! A container is built once from a dataset and treated as read-only
//! afterwards; every analysis call is a side-effect-free read, so results
//! are deterministic for identical inputs.

pub mod analysis;
pub mod core;
