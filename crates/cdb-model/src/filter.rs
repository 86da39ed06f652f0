//! Saved-filter vocabulary shared with the filter tree.

use serde::{Deserialize, Serialize};

/// Row kinds in the saved-filter tree: rule rows group, pattern rows match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Rule,
    PatternFilter,
}

/// What a node's query predicates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryKind {
    Rule,
    Pattern,
}

/// A position-pattern search predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    /// Placement pattern; blanked squares are wildcards.
    #[serde(rename = "sub-fen")]
    pub sub_fen: String,
}

impl FilterQuery {
    pub fn sub_fen(pattern: impl Into<String>) -> Self {
        Self {
            sub_fen: pattern.into(),
        }
    }

    /// Human-readable label for tree rows.
    pub fn formatted(&self) -> String {
        format!("sub-fen: {}", self.sub_fen)
    }
}

/// One saved-filter tree row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterNode {
    pub label: String,
    pub query: Option<FilterQuery>,
    pub query_kind: QueryKind,
    pub node_kind: NodeKind,
}

impl FilterNode {
    /// A pattern-filter leaf labelled from its query.
    pub fn pattern(query: FilterQuery) -> Self {
        Self {
            label: query.formatted(),
            query: Some(query),
            query_kind: QueryKind::Pattern,
            node_kind: NodeKind::PatternFilter,
        }
    }

    /// A grouping rule row; rules carry no query of their own.
    pub fn rule(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            query: None,
            query_kind: QueryKind::Rule,
            node_kind: NodeKind::Rule,
        }
    }
}
