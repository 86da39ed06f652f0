//! Game collections: parsing, record handles and filtered reload.
//!
//! A collection file is a sequence of games, each a block of PGN-style tag
//! pairs followed by movetext in coordinate notation. Lines starting with
//! `%` are skipped. The collection also owns the list-side filter state:
//! the remembered ply cursor, an optional position filter and the pattern
//! filters aggregated from the saved-filter tree.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use cdb_model::{Board, Cord, FilterQuery, GameModel};

use crate::error::{CollectionError, LoadingError};

/// PGN-style game metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTags {
    pub white: String,
    pub black: String,
    pub result: String,
    pub event: Option<String>,
    pub site: Option<String>,
    pub date: Option<String>,
    pub eco: Option<String>,
}

impl Default for GameTags {
    fn default() -> Self {
        Self {
            white: "?".to_string(),
            black: "?".to_string(),
            result: "*".to_string(),
            event: None,
            site: None,
            date: None,
            eco: None,
        }
    }
}

impl GameTags {
    /// Short "White - Black" line used in records and notices.
    pub fn summary(&self) -> String {
        format!("{} - {}", self.white, self.black)
    }
}

/// One stored game: tags, an optional set-up position and raw movetext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredGame {
    pub tags: GameTags,
    pub start_fen: Option<String>,
    pub movetext: String,
}

/// Opaque handle to a stored game, valid while its collection is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: usize,
    pub summary: String,
}

/// A visible list row after filtering: the game and the ply at which the
/// active filter matched (0 when no position filter applies).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleGame {
    pub id: usize,
    pub ply: usize,
}

#[derive(Debug, Default)]
pub struct GameCollection {
    games: Vec<StoredGame>,
    filter_ply: usize,
    position_filter: Option<Board>,
    pattern_filters: Vec<Board>,
    visible: Vec<VisibleGame>,
}

impl GameCollection {
    /// Read and parse a collection file.
    pub fn open(path: &Path) -> Result<Self, CollectionError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse collection text. Every game starts visible.
    pub fn parse(text: &str) -> Result<Self, CollectionError> {
        let mut games = Vec::new();
        let mut pending: Option<PendingGame> = None;

        for (number, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('%') {
                continue;
            }
            if line.starts_with('[') {
                let (key, value) = parse_tag_pair(line).ok_or_else(|| {
                    CollectionError::BadTagPair {
                        line: number + 1,
                        text: line.to_string(),
                    }
                })?;
                // A tag after movetext opens the next game.
                if pending.as_ref().is_some_and(|game| !game.movetext.is_empty()) {
                    if let Some(game) = pending.take() {
                        games.push(game.finish());
                    }
                }
                pending.get_or_insert_default().set_tag(key, value);
            } else {
                let game = pending.get_or_insert_default();
                if !game.movetext.is_empty() {
                    game.movetext.push(' ');
                }
                game.movetext.push_str(line);
            }
        }
        if let Some(game) = pending {
            games.push(game.finish());
        }

        debug!(games = games.len(), "parsed game collection");
        let visible = (0..games.len()).map(|id| VisibleGame { id, ply: 0 }).collect();
        Ok(Self {
            games,
            visible,
            ..Self::default()
        })
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub(crate) fn game(&self, id: usize) -> Option<&StoredGame> {
        self.games.get(id)
    }

    pub fn tags(&self, id: usize) -> Option<&GameTags> {
        self.games.get(id).map(|game| &game.tags)
    }

    /// Handle for a stored game by collection id.
    pub fn record(&self, id: usize) -> Option<GameRecord> {
        self.games.get(id).map(|game| GameRecord {
            id,
            summary: game.tags.summary(),
        })
    }

    /// Resolve a visible row to its record and the ply its filter matched at.
    pub fn record_at_row(&self, row: usize) -> Option<(GameRecord, usize)> {
        let visible = self.visible.get(row)?;
        Some((self.record(visible.id)?, visible.ply))
    }

    pub fn visible(&self) -> &[VisibleGame] {
        &self.visible
    }

    /// Remembered ply cursor of the list.
    pub fn filter_ply(&self) -> usize {
        self.filter_ply
    }

    pub fn set_filter_ply(&mut self, ply: usize) {
        self.filter_ply = ply;
    }

    /// Filter by a full position; games must reach it at some ply.
    pub fn set_position_filter(&mut self, fen: &str) {
        match Board::from_fen(fen) {
            Ok(board) => self.position_filter = Some(board),
            Err(err) => {
                warn!(error = %err, fen, "ignoring unparseable position filter");
                self.position_filter = None;
            }
        }
    }

    pub fn clear_position_filter(&mut self) {
        self.position_filter = None;
    }

    /// Replace the pattern filters with the tree's aggregate queries.
    pub fn set_pattern_filters(&mut self, queries: &[FilterQuery]) {
        self.pattern_filters = queries
            .iter()
            .filter_map(|query| match Board::from_fen(&query.sub_fen) {
                Ok(board) => Some(board),
                Err(err) => {
                    warn!(error = %err, pattern = %query.sub_fen, "ignoring unparseable pattern filter");
                    None
                }
            })
            .collect();
    }

    /// Recompute the visible row set from the active filters.
    pub fn reload(&mut self) {
        self.visible = (0..self.games.len())
            .filter_map(|id| self.match_game(id))
            .collect();
        debug!(
            visible = self.visible.len(),
            total = self.games.len(),
            "reloaded game list"
        );
    }

    fn match_game(&self, id: usize) -> Option<VisibleGame> {
        if self.position_filter.is_none() && self.pattern_filters.is_empty() {
            return Some(VisibleGame { id, ply: 0 });
        }
        let model = match self.replay(id) {
            Ok(model) => model,
            Err(err) => {
                // A broken record is surfaced when previewed, not hidden here.
                warn!(game = id + 1, error = %err, "game does not replay; keeping it visible");
                return Some(VisibleGame { id, ply: 0 });
            }
        };
        let mut matched_ply = 0;
        if let Some(filter) = &self.position_filter {
            matched_ply = (model.low_ply()..=model.high_ply())
                .find(|&ply| position_matches(model.board_at(ply), filter))?;
        }
        for pattern in &self.pattern_filters {
            let ply = (model.low_ply()..=model.high_ply())
                .find(|&ply| pattern_matches(model.board_at(ply), pattern))?;
            if matched_ply == 0 {
                matched_ply = ply;
            }
        }
        Some(VisibleGame {
            id,
            ply: matched_ply,
        })
    }

    fn replay(&self, id: usize) -> Result<GameModel, LoadingError> {
        let mut model = GameModel::empty();
        self.load_into(id, &mut model)?;
        Ok(model)
    }
}

/// Equality for position filters: placement and side to move; clocks and
/// rights are ignored so transposed move orders still match.
fn position_matches(board: &Board, filter: &Board) -> bool {
    board.turn() == filter.turn() && board.placement() == filter.placement()
}

/// A sub-position pattern matches when every occupied pattern square holds
/// the same piece on the board; blanked squares are wildcards.
fn pattern_matches(board: &Board, pattern: &Board) -> bool {
    Cord::all().all(|cord| match pattern.piece_at(cord) {
        Some(piece) => board.piece_at(cord) == Some(piece),
        None => true,
    })
}

#[derive(Debug, Default)]
struct PendingGame {
    tags: GameTags,
    start_fen: Option<String>,
    movetext: String,
}

impl PendingGame {
    fn set_tag(&mut self, key: &str, value: &str) {
        match key {
            "White" => self.tags.white = value.to_string(),
            "Black" => self.tags.black = value.to_string(),
            "Result" => self.tags.result = value.to_string(),
            "Event" => self.tags.event = Some(value.to_string()),
            "Site" => self.tags.site = Some(value.to_string()),
            "Date" => self.tags.date = Some(value.to_string()),
            "ECO" => self.tags.eco = Some(value.to_string()),
            "FEN" => self.start_fen = Some(value.to_string()),
            _ => {}
        }
    }

    fn finish(self) -> StoredGame {
        StoredGame {
            tags: self.tags,
            start_fen: self.start_fen,
            movetext: self.movetext,
        }
    }
}

/// Parse a `[Key "Value"]` tag pair.
fn parse_tag_pair(line: &str) -> Option<(&str, &str)> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?;
    let (key, rest) = inner.split_once(' ')?;
    let value = rest.trim().strip_prefix('"')?.strip_suffix('"')?;
    if key.is_empty() {
        return None;
    }
    Some((key, value))
}
