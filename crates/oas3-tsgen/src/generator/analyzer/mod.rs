mod dependency_graph;
mod pruner;

pub(crate) use dependency_graph::DependencyGraph;
pub(crate) use pruner::DependencyPruner;

#[cfg(test)]
mod tests;
