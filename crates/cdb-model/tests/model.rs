//! Tests for cdb-model types.

use cdb_model::{Board, FilterNode, GameModel, NodeKind, START_FEN};

#[test]
fn replayed_game_round_trips_through_fen() {
    let mut model = GameModel::from_start(Board::start());
    for token in ["e2e4", "c7c5", "g1f3", "d7d6", "d2d4", "c5d4", "f3d4"] {
        model
            .push_move(token.parse().expect("move"))
            .expect("replay");
    }
    let last = model.board_at(model.high_ply());
    let reparsed = Board::from_fen(&last.to_fen()).expect("fen");
    assert_eq!(&reparsed, last);
    assert_eq!(
        last.placement(),
        "rnbqkbnr/pp2pppp/3p4/8/3NP3/8/PPP2PPP/RNBQKB1R"
    );
}

#[test]
fn start_board_serializes_to_the_canonical_constant() {
    assert_eq!(Board::start().to_fen(), START_FEN);
}

#[test]
fn filter_node_serializes() {
    let node = FilterNode::rule("White wins");
    let json = serde_json::to_string(&node).expect("serialize node");
    let round: FilterNode = serde_json::from_str(&json).expect("deserialize node");
    assert_eq!(round.node_kind, NodeKind::Rule);
    assert_eq!(round.query, None);
}
