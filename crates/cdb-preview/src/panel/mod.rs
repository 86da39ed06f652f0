//! The preview panel: game-list selection synchronized with a board view.
//!
//! One instance per database perspective. All handlers run on the UI
//! event-processing thread; the shared state's lock only guards against
//! the renderer reading mid-load.

mod add_filter;
mod filter_mode;
mod navigate;
mod selection;

use std::sync::Arc;

use crate::collab::{BoardView, FilterTree, GameList, NoticeSink};
use crate::state::{PreviewState, SharedPreview};

/// Whether every ply navigation refilters the game list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    Inactive,
    Active,
}

pub struct PreviewPanel<L, V, T, N> {
    shared: SharedPreview,
    filtered: FilterMode,
    list: L,
    view: V,
    tree: T,
    notices: N,
}

impl<L, V, T, N> PreviewPanel<L, V, T, N>
where
    L: GameList,
    V: BoardView,
    T: FilterTree,
    N: NoticeSink,
{
    pub fn new(list: L, view: V, tree: T, notices: N) -> Self {
        Self {
            shared: PreviewState::shared(),
            filtered: FilterMode::default(),
            list,
            view,
            tree,
            notices,
        }
    }

    /// Handle to the shared board state, for the renderer.
    pub fn shared(&self) -> SharedPreview {
        Arc::clone(&self.shared)
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.filtered
    }

    pub fn shown_ply(&self) -> usize {
        self.shared.lock().unwrap().shown
    }

    /// Reposition the displayed ply, clamped into the loaded range.
    ///
    /// This is the board view's ply write: it redraws but never triggers a
    /// list refilter on its own.
    pub fn show_ply(&mut self, ply: usize) {
        {
            let mut state = self.shared.lock().unwrap();
            let clamped = state.model.clamp_ply(ply);
            state.shown = clamped;
            state.last_move = state.model.move_into(clamped);
        }
        self.view.request_redraw();
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut L {
        &mut self.list
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn tree(&self) -> &T {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut T {
        &mut self.tree
    }

    pub fn notices(&self) -> &N {
        &self.notices
    }
}
