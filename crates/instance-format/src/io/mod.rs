mod adjacency;
mod edge_list;

use clap::ValueEnum;
pub use adjacency::read_instance;
pub use adjacency::transform;
pub use adjacency::ConvertError;
pub use adjacency::EdgeRecord;
pub use adjacency::Transformed;
pub use edge_list::read_edge_list;
pub use edge_list::write_edge_list;
pub use edge_list::EdgeListFile;
pub use edge_list::ReadEdgeListError;

/// How edges are laid out in a transformed file.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputLayout {
    /// Header and edges joined by single spaces, each edge ending in a newline.
    #[default]
    Joined,
    /// One edge per line.
    Lines,
}
