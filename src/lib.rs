mod io;
mod parsers;
mod phylo;

pub use io::read;
pub use io::write;
pub use parsers::newick::DEFAULT_DEPTH_LIMIT;
pub use parsers::newick::NewickParseError;
pub use parsers::newick::parse_newick;
pub use parsers::newick::parse_newick_with_limit;
pub use parsers::newick::parse_node;
pub use parsers::newick::parse_node_with_limit;
pub use parsers::newick::write_newick;
pub use phylo::node::Node;
pub use phylo::node::NodeError;
pub use phylo::walk::PostorderWalk;
pub use phylo::walk::PreorderWalk;
