//! Dependency resolution.
//!
//! Every defined variable becomes a node in an arena. A node starts out
//! pending, counting the references in its expression that have not been
//! resolved yet, and keeps the list of nodes whose expressions reference it.
//! Nodes whose count is zero sit in a ready queue. Resolving a node sums its
//! terms and decrements the count of each dependent, queueing those that
//! reach zero. When the queue drains, any node still pending is on, or
//! downstream of, a cycle.

use crate::error::{Error, Result};
use crate::values::Values;
use eqn_surface::{Definitions, Expression, Term};
use la_arena::{Arena, Idx};
use log::{debug, trace};
use std::collections::{HashMap, VecDeque};
use std::mem;

type NodeId<'a> = Idx<Node<'a>>;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum State {
    /// Waiting on `unresolved` references; repeated references count twice.
    Pending { unresolved: usize },
    /// Final.
    Resolved(u64),
}

#[derive(Debug)]
struct Node<'a> {
    name: &'a str,
    expression: &'a Expression,
    dependents: Vec<NodeId<'a>>,
    state: State,
}

impl<'a> Node<'a> {
    fn new(name: &'a str, expression: &'a Expression) -> Node<'a> {
        Node {
            name,
            expression,
            dependents: Vec::new(),
            state: State::Pending { unresolved: 0 },
        }
    }

    fn is_pending(&self) -> bool {
        matches!(self.state, State::Pending { .. })
    }

    fn is_ready(&self) -> bool {
        self.state == State::Pending { unresolved: 0 }
    }
}

/// The dependency graph of a definition table.
pub struct DependencyGraph<'a> {
    nodes: Arena<Node<'a>>,
    index: HashMap<&'a str, NodeId<'a>>,
}

impl<'a> DependencyGraph<'a> {
    /// Build the graph, failing if any expression references a variable
    /// that is not defined.
    pub fn new(definitions: &'a Definitions) -> Result<DependencyGraph<'a>> {
        let mut nodes = Arena::new();
        let mut index = HashMap::with_capacity(definitions.len());
        for (name, expression) in definitions {
            let id = nodes.alloc(Node::new(name, expression));
            index.insert(name.as_str(), id);
        }

        // Collect the edges first; the arena cannot be mutated while it is
        // being walked.
        let mut edges = Vec::new();
        let mut undefined: Option<(&str, &str)> = None;
        for (id, node) in nodes.iter() {
            for reference in node.expression.references() {
                match index.get(reference) {
                    Some(&dependency) => edges.push((dependency, id)),
                    None => {
                        // Report the smallest offender so diagnostics do not
                        // depend on hash order.
                        let candidate = (node.name, reference);
                        if undefined.map_or(true, |current| candidate < current) {
                            undefined = Some(candidate);
                        }
                    }
                }
            }
        }
        if let Some((variable, reference)) = undefined {
            return Err(Error::UnresolvableReference {
                variable: variable.to_owned(),
                reference: reference.to_owned(),
            });
        }

        for (dependency, dependent) in edges {
            nodes[dependency].dependents.push(dependent);
            if let State::Pending { unresolved } = &mut nodes[dependent].state {
                *unresolved += 1;
            }
        }

        Ok(DependencyGraph { nodes, index })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Resolve every node in dependency order.
    pub fn resolve(mut self) -> Result<Values> {
        let mut ready: VecDeque<NodeId<'a>> = self
            .nodes
            .iter()
            .filter(|(_, node)| node.is_ready())
            .map(|(id, _)| id)
            .collect();
        debug!(
            "resolving {} variables, {} ready",
            self.nodes.len(),
            ready.len()
        );

        let mut values = Values::new();
        while let Some(id) = ready.pop_front() {
            let value = self.sum(id)?;
            let node = &mut self.nodes[id];
            node.state = State::Resolved(value);
            values.insert(node.name, value);
            trace!("{} = {value}", node.name);

            for dependent in mem::take(&mut node.dependents) {
                if let State::Pending { unresolved } = &mut self.nodes[dependent].state {
                    *unresolved -= 1;
                    if *unresolved == 0 {
                        ready.push_back(dependent);
                    }
                }
            }
        }

        if values.len() < self.nodes.len() {
            return Err(Error::CyclicDependency {
                cycle: self.find_cycle(),
            });
        }
        debug!("resolved {} variables", values.len());
        Ok(values)
    }

    /// Sum the terms of a ready node.
    fn sum(&self, id: NodeId<'a>) -> Result<u64> {
        let node = &self.nodes[id];
        node.expression
            .terms
            .iter()
            .try_fold(0u64, |total, term| {
                let value = match term {
                    Term::Literal(value) => *value,
                    Term::Reference(name) => self.resolved_value(name),
                };
                total.checked_add(value)
            })
            .ok_or_else(|| Error::Overflow {
                variable: node.name.to_owned(),
            })
    }

    fn resolved_value(&self, name: &str) -> u64 {
        match self.index.get(name).map(|&id| self.nodes[id].state) {
            Some(State::Resolved(value)) => value,
            _ => unreachable!("`{name}` summed before it was resolved"),
        }
    }

    /// The pending dependencies of a node, smallest name first.
    fn pending_dependency(&self, id: NodeId<'a>) -> Option<NodeId<'a>> {
        self.nodes[id]
            .expression
            .references()
            .filter_map(|name| self.index.get(name).copied())
            .filter(|&dependency| self.nodes[dependency].is_pending())
            .min_by_key(|&dependency| self.nodes[dependency].name)
    }

    /// Walk pending dependencies from the smallest pending name until a node
    /// repeats. Every pending node has a pending dependency, so the walk
    /// always closes a loop.
    fn find_cycle(&self) -> Vec<String> {
        let start = self
            .nodes
            .iter()
            .filter(|(_, node)| node.is_pending())
            .min_by_key(|(_, node)| node.name)
            .map(|(id, _)| id);

        let mut path: Vec<NodeId<'a>> = Vec::new();
        let mut seen: HashMap<NodeId<'a>, usize> = HashMap::new();
        let mut current = start;
        while let Some(id) = current {
            if let Some(&at) = seen.get(&id) {
                path.drain(..at);
                path.push(id);
                break;
            }
            seen.insert(id, path.len());
            path.push(id);
            current = self.pending_dependency(id);
        }
        path.into_iter()
            .map(|id| self.nodes[id].name.to_owned())
            .collect()
    }
}

/// Compute the value of every variable in the definition table.
pub fn resolve(definitions: &Definitions) -> Result<Values> {
    DependencyGraph::new(definitions)?.resolve()
}
