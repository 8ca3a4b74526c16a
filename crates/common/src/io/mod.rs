mod edge_list;
mod metis;
mod ordering;

use clap::ValueEnum;
pub use edge_list::parse_edge_list;
pub use edge_list::read_edge_list;
pub use edge_list::write_edge_list;
pub use edge_list::ReadEdgeListError;
pub use metis::parse_metis;
pub use metis::read_metis;
pub use metis::write_metis;
pub use metis::ReadMetisError;
pub use ordering::parse_ordering;
pub use ordering::read_ordering;
pub use ordering::write_ordering;
pub use ordering::ReadOrderingError;

#[derive(Debug, Clone, Eq, PartialEq, ValueEnum)]
pub enum GraphFileType {
    Metis,
    EdgeList,
}
