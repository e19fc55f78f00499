//! Dependency graph construction and analysis.
//!
//! Steps are stored in an arena indexed by position; edges point from a step
//! to the steps it depends on. Ids that are referenced but never defined get
//! their own node without outgoing edges, so traversal never has to special
//! case them.
//!
//! The traversals below use an explicit stack and a single shared marker
//! vector restored on backtrack. Cycle detection and the depth of an acyclic
//! graph run in O(nodes + edges); depth on a cyclic graph has to search
//! simple paths and is only bounded by the on-path marker.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::PlanStep;

/// Steps with more dependencies than this are reported as complex.
pub const COMPLEX_DEPENDENCY_THRESHOLD: usize = 2;

/// A step whose dependency count exceeds [`COMPLEX_DEPENDENCY_THRESHOLD`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComplexStep {
    pub step: u64,
    pub dependency_count: usize,
}

/// A dependency on an id that no step defines.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DanglingReference {
    pub step: u64,
    pub dependency: u64,
}

/// Everything the dependency evaluator reports about a plan's graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DependencyAnalysis {
    pub cycles_found: Vec<Vec<u64>>,
    pub complex_steps: Vec<ComplexStep>,
    pub max_depth: usize,
    pub total_dependency_count: usize,
}

impl DependencyAnalysis {
    /// Run every graph analysis over the given steps.
    pub fn of(steps: &[PlanStep]) -> Self {
        Self::from_graph(&DependencyGraph::build(steps))
    }

    /// Run the traversals over an already built graph.
    pub fn from_graph(graph: &DependencyGraph) -> Self {
        let cycles_found = graph.detect_cycles();
        let max_depth = graph.depth(cycles_found.is_empty());
        Self {
            cycles_found,
            complex_steps: graph.complex_steps().to_vec(),
            max_depth,
            total_dependency_count: graph.total_dependency_count(),
        }
    }
}

/// Directed graph from each step to the steps it depends on.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    ids: Vec<u64>,
    edges: Vec<Vec<usize>>,
    index: HashMap<u64, usize>,
    defined: usize,
    dangling: Vec<DanglingReference>,
    complex: Vec<ComplexStep>,
    total_dependencies: usize,
}

impl DependencyGraph {
    /// Build the graph in plan order.
    ///
    /// The first step carrying a given id defines that node's edges; later
    /// duplicates are ignored.
    pub fn build<'a>(steps: impl IntoIterator<Item = &'a PlanStep>) -> Self {
        let steps: Vec<&PlanStep> = steps.into_iter().collect();
        let mut graph = Self::default();

        let mut owners = Vec::with_capacity(steps.len());
        for &step in &steps {
            let count = step.dependencies.len();
            graph.total_dependencies += count;
            if count > COMPLEX_DEPENDENCY_THRESHOLD {
                graph.complex.push(ComplexStep {
                    step: step.id,
                    dependency_count: count,
                });
            }
            if !graph.index.contains_key(&step.id) {
                graph.insert_node(step.id);
                owners.push(step);
            }
        }
        graph.defined = graph.ids.len();

        for (node, step) in owners.into_iter().enumerate() {
            for &dep in &step.dependencies {
                let target = match graph.index.get(&dep) {
                    Some(&target) => target,
                    None => graph.insert_node(dep),
                };
                if target >= graph.defined {
                    graph.dangling.push(DanglingReference {
                        step: step.id,
                        dependency: dep,
                    });
                }
                graph.edges[node].push(target);
            }
        }

        graph
    }

    fn insert_node(&mut self, id: u64) -> usize {
        let node = self.ids.len();
        self.ids.push(id);
        self.edges.push(Vec::new());
        self.index.insert(id, node);
        node
    }

    /// Number of nodes, including undefined ids that were referenced.
    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// Dependency ids of a node, in declaration order.
    pub fn dependencies(&self, id: u64) -> Vec<u64> {
        self.index
            .get(&id)
            .map(|&node| self.edges[node].iter().map(|&t| self.ids[t]).collect())
            .unwrap_or_default()
    }

    /// Steps with more than [`COMPLEX_DEPENDENCY_THRESHOLD`] dependencies, in
    /// plan order. Independent of cycle status.
    pub fn complex_steps(&self) -> &[ComplexStep] {
        &self.complex
    }

    /// Sum of every step's dependency list length.
    pub fn total_dependency_count(&self) -> usize {
        self.total_dependencies
    }

    /// References to ids that no step defines, in plan order.
    pub fn dangling_references(&self) -> &[DanglingReference] {
        &self.dangling
    }

    /// Find cycles by depth-first traversal from each unvisited node.
    ///
    /// Each cycle is reported as the traversal path from its root through to
    /// the revisited node, inclusive, so `1 -> 2 -> 1` reads `[1, 2, 1]`.
    /// Traversal from a root stops at the first cycle it finds.
    pub fn detect_cycles(&self) -> Vec<Vec<u64>> {
        let n = self.ids.len();
        let mut visited = vec![false; n];
        let mut on_stack = vec![false; n];
        let mut cycles = Vec::new();

        for root in 0..n {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            on_stack[root] = true;
            let mut path = vec![root];
            let mut cursor = vec![0usize];

            while let (Some(&node), Some(next_edge)) = (path.last(), cursor.last_mut()) {
                let Some(&next) = self.edges[node].get(*next_edge) else {
                    on_stack[node] = false;
                    path.pop();
                    cursor.pop();
                    continue;
                };
                *next_edge += 1;

                if on_stack[next] {
                    let mut cycle: Vec<u64> = path.iter().map(|&p| self.ids[p]).collect();
                    cycle.push(self.ids[next]);
                    cycles.push(cycle);
                    for &p in &path {
                        on_stack[p] = false;
                    }
                    break;
                }
                if !visited[next] {
                    visited[next] = true;
                    on_stack[next] = true;
                    path.push(next);
                    cursor.push(0);
                }
            }
        }

        cycles
    }

    /// Number of nodes on the longest dependency chain.
    ///
    /// A step without dependencies has depth 1 and an empty graph depth 0.
    /// On a cyclic graph a chain never revisits a node already on it, so the
    /// result is the longest simple path and does not depend on step order.
    pub fn max_depth(&self) -> usize {
        self.depth(self.detect_cycles().is_empty())
    }

    fn depth(&self, acyclic: bool) -> usize {
        if acyclic {
            self.memoized_depth()
        } else {
            self.path_depth()
        }
    }

    /// Longest chain by post-order memoization. Only valid without cycles,
    /// where a node's depth never depends on the path that reached it.
    fn memoized_depth(&self) -> usize {
        let n = self.ids.len();
        let mut done = vec![false; n];
        let mut depth = vec![0usize; n];
        let mut best = vec![0usize; n];

        for root in 0..n {
            if done[root] {
                continue;
            }
            let mut path = vec![root];
            let mut cursor = vec![0usize];

            while let (Some(&node), Some(next_edge)) = (path.last(), cursor.last_mut()) {
                if let Some(&next) = self.edges[node].get(*next_edge) {
                    *next_edge += 1;
                    if done[next] {
                        best[node] = best[node].max(depth[next]);
                    } else {
                        path.push(next);
                        cursor.push(0);
                    }
                    continue;
                }

                depth[node] = best[node] + 1;
                done[node] = true;
                path.pop();
                cursor.pop();
                if let Some(&parent) = path.last() {
                    best[parent] = best[parent].max(depth[node]);
                }
            }
        }

        depth.into_iter().max().unwrap_or(0)
    }

    /// Longest simple path from any root, with the on-path marker restored
    /// on backtrack. Stops early once a chain covers every node.
    fn path_depth(&self) -> usize {
        let n = self.ids.len();
        let mut on_path = vec![false; n];
        let mut deepest = 0;

        for root in 0..n {
            if deepest == n {
                break;
            }
            on_path[root] = true;
            let mut path = vec![root];
            let mut cursor = vec![0usize];
            deepest = deepest.max(1);

            while let (Some(&node), Some(next_edge)) = (path.last(), cursor.last_mut()) {
                let Some(&next) = self.edges[node].get(*next_edge) else {
                    on_path[node] = false;
                    path.pop();
                    cursor.pop();
                    continue;
                };
                *next_edge += 1;

                if !on_path[next] {
                    on_path[next] = true;
                    path.push(next);
                    cursor.push(0);
                    deepest = deepest.max(path.len());
                }
            }
        }

        deepest
    }
}
