pub(crate) mod newick;
