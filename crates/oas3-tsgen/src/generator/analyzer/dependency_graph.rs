use indexmap::IndexSet;
use petgraph::{algo::kosaraju_scc, graphmap::DiGraphMap, visit::Dfs};

use crate::generator::ast::{DeclName, Declaration};

/// Reference edges between declarations, as recorded when each declaration
/// was registered.
pub(crate) struct DependencyGraph<'a> {
  nodes: IndexSet<&'a DeclName>,
  graph: DiGraphMap<&'a DeclName, ()>,
}

impl<'a> DependencyGraph<'a> {
  pub(crate) fn build(declarations: impl IntoIterator<Item = &'a Declaration>) -> Self {
    let mut graph = DiGraphMap::new();
    let mut nodes = IndexSet::new();
    let mut edges = vec![];

    for declaration in declarations {
      nodes.insert(declaration.name());
      graph.add_node(declaration.name());
      edges.extend(declaration.references().iter().map(|dep| (declaration.name(), dep)));
    }

    // edges into names outside the graph (tag-local names, unresolved refs) are dropped
    for (from, to) in edges {
      if let Some(to) = nodes.get(to).copied() {
        graph.add_edge(from, to, ());
      }
    }

    Self { nodes, graph }
  }

  /// Every node reachable from `roots`, roots included. Each node is visited
  /// once, so self and mutual references terminate.
  pub(crate) fn reachable_from<'r>(&self, roots: impl IntoIterator<Item = &'r DeclName>) -> IndexSet<&'a DeclName> {
    let mut reached = IndexSet::new();
    for root in roots {
      let Some(start) = self.nodes.get(root).copied() else {
        continue;
      };
      if reached.contains(start) {
        continue;
      }
      let mut dfs = Dfs::new(&self.graph, start);
      while let Some(node) = dfs.next(&self.graph) {
        reached.insert(node);
      }
    }
    reached
  }

  /// Strongly connected components that form a cycle.
  pub(crate) fn cycles(&self) -> Vec<Vec<&'a DeclName>> {
    kosaraju_scc(&self.graph)
      .into_iter()
      .filter(|scc| scc.len() > 1 || self.graph.contains_edge(scc[0], scc[0]))
      .map(|mut scc| {
        scc.sort_by_key(|name| self.nodes.get_index_of(*name));
        scc
      })
      .collect()
  }
}
