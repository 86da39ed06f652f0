//! `GameList` backed by a `cdb-store` collection.

use cdb_model::GameModel;
use cdb_store::{GameCollection, GameRecord, LoadingError};

use crate::collab::GameList;

impl GameList for GameCollection {
    fn resolve_selection(&self, row: usize) -> Option<(GameRecord, usize)> {
        GameCollection::record_at_row(self, row)
    }

    fn filter_ply(&self) -> usize {
        GameCollection::filter_ply(self)
    }

    fn set_filter_ply(&mut self, ply: usize) {
        GameCollection::set_filter_ply(self, ply);
    }

    fn set_position_filter(&mut self, fen: &str) {
        GameCollection::set_position_filter(self, fen);
    }

    fn load_record(
        &self,
        record: &GameRecord,
        model: &mut GameModel,
    ) -> Result<(), LoadingError> {
        GameCollection::load_record(self, record, model)
    }

    fn reload(&mut self) {
        GameCollection::reload(self);
    }
}
