//! Turning marked squares into a saved pattern filter.

use tracing::debug;

use cdb_model::{FilterNode, FilterQuery, NodeKind};

use crate::collab::{BoardView, FilterTree, GameList, NoticeSink};
use crate::panel::PreviewPanel;
use crate::sub_fen::sub_position_pattern;

impl<L, V, T, N> PreviewPanel<L, V, T, N>
where
    L: GameList,
    V: BoardView,
    T: FilterTree,
    N: NoticeSink,
{
    /// Extract a sub-position from the shown snapshot and the view's
    /// marked squares, and insert it into the filter tree.
    ///
    /// Rule rows take no pattern children: when one is selected the new
    /// node becomes a top-level sibling instead.
    pub fn add_filter(&mut self) {
        let marked = self.view.marked_cells();
        let pattern = {
            let state = self.shared.lock().unwrap();
            sub_position_pattern(state.model.board_at(state.shown), &marked)
        };
        let Some(pattern) = pattern else {
            debug!("nothing worth filtering on the shown position");
            return;
        };

        let parent = match self.tree.current_selection() {
            Some(node) if self.tree.node_kind(node) == Some(NodeKind::Rule) => None,
            other => other,
        };
        let node = FilterNode::pattern(FilterQuery::sub_fen(pattern));
        debug!(label = %node.label, "inserting pattern filter");
        self.tree.insert(parent, node);
        self.tree.expand_all();
        self.tree.recompute_filters();
    }
}
