//! Contracts consumed from the surrounding database perspective.
//!
//! The panel reaches every collaborator through one of these traits,
//! injected at construction. Nothing here is looked up through a global
//! registry.

use std::collections::BTreeSet;

use cdb_model::{Cord, FilterNode, GameModel, NodeKind};
use cdb_store::{GameRecord, LoadingError};

/// Identifier of a row in the saved-filter tree.
pub type NodeId = usize;

/// The game list this panel previews: selection lookup, record loading and
/// filtered reload.
pub trait GameList {
    /// Resolve a selected row to its record and target ply.
    fn resolve_selection(&self, row: usize) -> Option<(GameRecord, usize)>;

    /// Remembered ply cursor, used when a selection carries no target ply.
    fn filter_ply(&self) -> usize;

    fn set_filter_ply(&mut self, ply: usize);

    /// Set the full-position filter the next reload applies.
    fn set_position_filter(&mut self, fen: &str);

    /// Replay a record into `model`. On failure the model keeps whatever
    /// partial state the load reached.
    fn load_record(&self, record: &GameRecord, model: &mut GameModel)
    -> Result<(), LoadingError>;

    /// Recompute the visible rows from the active filters.
    fn reload(&mut self);
}

/// The external board widget: redraw requests out, marked squares in.
pub trait BoardView {
    fn request_redraw(&mut self);

    /// Squares the user has circled on the shown position.
    fn marked_cells(&self) -> BTreeSet<Cord>;
}

/// The saved-filter tree this panel inserts pattern filters into.
pub trait FilterTree {
    fn current_selection(&self) -> Option<NodeId>;

    fn node_kind(&self, node: NodeId) -> Option<NodeKind>;

    /// Insert under `parent`, or at top level when `parent` is `None`.
    fn insert(&mut self, parent: Option<NodeId>, node: FilterNode) -> NodeId;

    fn expand_all(&mut self);

    /// Recompute the tree's aggregate filter predicate.
    fn recompute_filters(&mut self);
}

/// Presents dismissible warnings; record-load failures end up here.
pub trait NoticeSink {
    fn warn_notice(&mut self, primary: &str, secondary: Option<&str>);
}
