//! A plain in-memory saved-filter tree.
//!
//! Satisfies the insertion contract the panel needs; the surrounding
//! editing UI lives elsewhere. Nodes are stored flat with parent links.

use cdb_model::{FilterNode, FilterQuery, NodeKind};

use crate::collab::{FilterTree, NodeId};

#[derive(Debug)]
struct StoredNode {
    node: FilterNode,
    parent: Option<NodeId>,
}

#[derive(Debug, Default)]
pub struct InMemoryFilterTree {
    nodes: Vec<StoredNode>,
    selection: Option<NodeId>,
    expanded: bool,
    aggregate: Vec<FilterQuery>,
}

impl InMemoryFilterTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, node: Option<NodeId>) {
        self.selection = node;
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&FilterNode> {
        self.nodes.get(id).map(|stored| &stored.node)
    }

    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|stored| stored.parent)
    }

    pub fn children_of(&self, parent: Option<NodeId>) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, stored)| stored.parent == parent)
            .map(|(id, _)| id)
            .collect()
    }

    /// The queries of every pattern-filter row, as of the last recompute.
    pub fn aggregate(&self) -> &[FilterQuery] {
        &self.aggregate
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}

impl FilterTree for InMemoryFilterTree {
    fn current_selection(&self) -> Option<NodeId> {
        self.selection
    }

    fn node_kind(&self, node: NodeId) -> Option<NodeKind> {
        self.nodes.get(node).map(|stored| stored.node.node_kind)
    }

    fn insert(&mut self, parent: Option<NodeId>, node: FilterNode) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(StoredNode { node, parent });
        id
    }

    fn expand_all(&mut self) {
        self.expanded = true;
    }

    fn recompute_filters(&mut self) {
        self.aggregate = self
            .nodes
            .iter()
            .filter(|stored| stored.node.node_kind == NodeKind::PatternFilter)
            .filter_map(|stored| stored.node.query.clone())
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recompute_collects_pattern_queries_only() {
        let mut tree = InMemoryFilterTree::new();
        let rule = tree.insert(None, FilterNode::rule("endgames"));
        tree.insert(None, FilterNode::pattern(FilterQuery::sub_fen("8/8/8/3q4/8/8/8/8")));
        tree.insert(
            Some(rule),
            FilterNode::pattern(FilterQuery::sub_fen("8/8/8/8/8/8/8/R7")),
        );
        tree.recompute_filters();
        let patterns: Vec<&str> = tree
            .aggregate()
            .iter()
            .map(|query| query.sub_fen.as_str())
            .collect();
        assert_eq!(patterns, ["8/8/8/3q4/8/8/8/8", "8/8/8/8/8/8/8/R7"]);
    }

    #[test]
    fn parent_links_survive_insertion() {
        let mut tree = InMemoryFilterTree::new();
        let top = tree.insert(None, FilterNode::rule("group"));
        let child = tree.insert(
            Some(top),
            FilterNode::pattern(FilterQuery::sub_fen("8/8/8/8/8/8/8/R7")),
        );
        assert_eq!(tree.parent_of(child), Some(top));
        assert_eq!(tree.children_of(Some(top)), vec![child]);
        assert_eq!(tree.children_of(None), vec![top]);
    }
}
