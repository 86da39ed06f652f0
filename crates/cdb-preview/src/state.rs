//! The shared board-state holder.

use std::sync::{Arc, Mutex};

use cdb_model::{GameModel, Move};

/// Board state plus displayed ply, shared between the panel (writer) and
/// the external renderer (reader).
///
/// The selection handler holds the lock for the whole record load, so a
/// concurrent redraw never observes a half-loaded model.
#[derive(Debug)]
pub struct PreviewState {
    pub model: GameModel,
    /// Ply of the snapshot currently on display.
    pub shown: usize,
    /// Highlight for the move that produced the shown snapshot.
    pub last_move: Option<Move>,
}

impl PreviewState {
    pub fn new() -> Self {
        Self {
            model: GameModel::empty(),
            shown: 0,
            last_move: None,
        }
    }

    pub fn shared() -> SharedPreview {
        Arc::new(Mutex::new(Self::new()))
    }
}

impl Default for PreviewState {
    fn default() -> Self {
        Self::new()
    }
}

pub type SharedPreview = Arc<Mutex<PreviewState>>;
