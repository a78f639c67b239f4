pub mod container;
pub mod node;
pub mod pair;
pub mod record;
pub mod residue;

pub use container::CouplingContainer;
pub use node::EmbeddingNode;
pub use pair::ResiduePair;
pub use record::CouplingRecord;
