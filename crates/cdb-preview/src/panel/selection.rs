//! List-selection handling: load the selected record into the shared state.

use tracing::{debug, warn};

use cdb_model::Board;

use crate::collab::{BoardView, FilterTree, GameList, NoticeSink};
use crate::panel::PreviewPanel;

impl<L, V, T, N> PreviewPanel<L, V, T, N>
where
    L: GameList,
    V: BoardView,
    T: FilterTree,
    N: NoticeSink,
{
    /// React to a list-selection change.
    ///
    /// `None` resets the board to a single empty snapshot. A selected row
    /// is resolved to its record and loaded under the shared-state lock;
    /// a `LoadingError` is surfaced as a notice and the sync carries on
    /// with whatever the load left behind. Selection never refilters the
    /// list.
    pub fn on_selection_changed(&mut self, row: Option<usize>) {
        let Some(row) = row else {
            let mut state = self.shared.lock().unwrap();
            state.model.reset(Board::empty());
            state.shown = 0;
            state.last_move = None;
            drop(state);
            self.view.request_redraw();
            return;
        };

        let Some((record, target_ply)) = self.list.resolve_selection(row) else {
            debug!(row, "selected row is gone; ignoring");
            return;
        };

        {
            let mut state = self.shared.lock().unwrap();
            if let Err(err) = self.list.load_record(&record, &mut state.model) {
                warn!(record = %record.summary, error = %err, "record failed to load");
                self.notices.warn_notice(&err.message, err.detail.as_deref());
            }
            state.last_move = None;
            state.shown = state.model.low_ply();
        }
        self.view.request_redraw();

        let ply = if target_ply > 0 {
            target_ply
        } else {
            self.list.filter_ply()
        };
        self.show_ply(ply);
    }
}
