//! Ply navigation. Each action repositions within the loaded record and
//! then refreshes the list filter; which record is loaded never changes.

use crate::collab::{BoardView, FilterTree, GameList, NoticeSink};
use crate::panel::PreviewPanel;

impl<L, V, T, N> PreviewPanel<L, V, T, N>
where
    L: GameList,
    V: BoardView,
    T: FilterTree,
    N: NoticeSink,
{
    pub fn to_first(&mut self) {
        let target = self.shared.lock().unwrap().model.low_ply();
        self.show_ply(target);
        self.refresh_game_list();
    }

    pub fn to_previous(&mut self) {
        let target = self.shared.lock().unwrap().shown.saturating_sub(1);
        self.show_ply(target);
        self.refresh_game_list();
    }

    pub fn to_next(&mut self) {
        let target = self.shared.lock().unwrap().shown + 1;
        self.show_ply(target);
        self.refresh_game_list();
    }

    pub fn to_last(&mut self) {
        let target = self.shared.lock().unwrap().model.high_ply();
        self.show_ply(target);
        self.refresh_game_list();
    }
}
