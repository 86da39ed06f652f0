//! Filtered mode: the game list tracks the shown position.

use tracing::debug;

use crate::collab::{BoardView, FilterTree, GameList, NoticeSink};
use crate::panel::{FilterMode, PreviewPanel};

impl<L, V, T, N> PreviewPanel<L, V, T, N>
where
    L: GameList,
    V: BoardView,
    T: FilterTree,
    N: NoticeSink,
{
    /// Toggle filtered mode.
    ///
    /// Entering always shows, and filters by, the record's starting
    /// position: reposition first, then refresh exactly once. Leaving
    /// flips the state and lets the refresh fall through as a no-op, so
    /// the list keeps its last row set until something reloads it.
    pub fn toggle_filter_mode(&mut self) {
        match self.filtered {
            FilterMode::Inactive => {
                let first = self.shared.lock().unwrap().model.low_ply();
                self.show_ply(first);
                self.filtered = FilterMode::Active;
                self.refresh_game_list();
            }
            FilterMode::Active => {
                self.filtered = FilterMode::Inactive;
                self.refresh_game_list();
            }
        }
    }

    /// Push the shown position to the list and reload it. No-op while
    /// filtered mode is inactive.
    pub(crate) fn refresh_game_list(&mut self) {
        if self.filtered != FilterMode::Active {
            return;
        }
        let (ply, fen) = {
            let state = self.shared.lock().unwrap();
            (state.shown, state.model.board_at(state.shown).to_fen())
        };
        debug!(ply, "refiltering game list by the shown position");
        self.list.set_filter_ply(ply);
        self.list.set_position_filter(&fen);
        self.list.reload();
    }
}
