//! Tests for collection parsing, record loading and filtered reload.

use cdb_model::{FilterQuery, GameModel};
use cdb_store::{CollectionError, GameCollection};

const SAMPLE: &str = r#"% sample collection
[Event "Test Open"]
[White "Adams"]
[Black "Baird"]
[Result "1-0"]

1. e2e4 e7e5 2. g1f3 b8c6 1-0

[White "Carls"]
[Black "Duras"]
[Result "0-1"]

1. d2d4 d7d5 2. c2c4 0-1
"#;

fn sample() -> GameCollection {
    GameCollection::parse(SAMPLE).expect("sample parses")
}

#[test]
fn parses_games_with_tags_and_movetext() {
    let collection = sample();
    assert_eq!(collection.len(), 2);
    let tags = collection.tags(0).expect("first game");
    assert_eq!(tags.white, "Adams");
    assert_eq!(tags.black, "Baird");
    assert_eq!(tags.event.as_deref(), Some("Test Open"));
    assert_eq!(collection.tags(1).expect("second game").result, "0-1");
    assert_eq!(collection.visible().len(), 2);
}

#[test]
fn malformed_tag_pairs_carry_the_line_number() {
    let err = GameCollection::parse("[White Adams]\n").expect_err("bad tag pair");
    match err {
        CollectionError::BadTagPair { line, text } => {
            assert_eq!(line, 1);
            assert_eq!(text, "[White Adams]");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn records_load_into_a_model() {
    let collection = sample();
    let record = collection.record(0).expect("record");
    assert_eq!(record.summary, "Adams - Baird");

    let mut model = GameModel::empty();
    collection
        .load_record(&record, &mut model)
        .expect("record loads");
    assert_eq!(model.low_ply(), 0);
    assert_eq!(model.high_ply(), 4);
    assert_eq!(
        model.board_at(2).placement(),
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR"
    );
}

#[test]
fn set_up_positions_shift_the_ply_range() {
    let text = "[White \"Endgame\"]\n[FEN \"4k3/8/8/8/8/8/8/4K3 b - - 0 20\"]\n\ne8d8 e1d1\n";
    let collection = GameCollection::parse(text).expect("parses");
    let record = collection.record(0).expect("record");
    let mut model = GameModel::empty();
    collection
        .load_record(&record, &mut model)
        .expect("record loads");
    assert_eq!(model.low_ply(), 39);
    assert_eq!(model.high_ply(), 41);
}

#[test]
fn load_failure_keeps_the_partial_replay() {
    let text = "[White \"Adams\"]\n[Black \"Baird\"]\n\ne2e4 zz9x e7e5\n";
    let collection = GameCollection::parse(text).expect("parses");
    let record = collection.record(0).expect("record");
    let mut model = GameModel::empty();
    let err = collection
        .load_record(&record, &mut model)
        .expect_err("replay fails");
    assert_eq!(err.message, "Adams - Baird could not be fully loaded");
    assert!(err.detail.expect("detail").contains("zz9x"));
    // Start position plus the one replayed move survive.
    assert_eq!(model.snapshot_count(), 2);
    assert_eq!(model.high_ply(), 1);
}

#[test]
fn position_filter_narrows_and_records_the_matched_ply() {
    let mut collection = sample();
    collection
        .set_position_filter("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2");
    collection.reload();
    assert_eq!(collection.visible().len(), 1);
    let (record, ply) = collection.record_at_row(0).expect("visible row");
    assert_eq!(record.summary, "Adams - Baird");
    assert_eq!(ply, 2);
}

#[test]
fn pattern_filter_matches_occupied_squares_only() {
    let mut collection = sample();
    collection.set_pattern_filters(&[FilterQuery::sub_fen("8/8/8/8/3P4/8/8/8")]);
    collection.reload();
    assert_eq!(collection.visible().len(), 1);
    let (record, _) = collection.record_at_row(0).expect("visible row");
    assert_eq!(record.summary, "Carls - Duras");
}

#[test]
fn games_that_do_not_replay_stay_visible_under_filters() {
    let text = "[White \"Adams\"]\n\ne2e4 zz9x\n\n[White \"Carls\"]\n\nd2d4 d7d5\n";
    let mut collection = GameCollection::parse(text).expect("parses");
    collection.set_pattern_filters(&[FilterQuery::sub_fen("8/8/8/3p4/8/8/8/8")]);
    collection.reload();
    let rows: Vec<String> = collection
        .visible()
        .iter()
        .map(|row| {
            collection
                .record(row.id)
                .map(|record| record.summary)
                .unwrap_or_default()
        })
        .collect();
    assert_eq!(rows, ["Adams - ?", "Carls - ?"]);
}

#[test]
fn clearing_filters_restores_every_row() {
    let mut collection = sample();
    collection.set_position_filter("8/8/8/8/8/8/8/8 w - - 0 1");
    collection.reload();
    assert!(collection.visible().is_empty());

    collection.clear_position_filter();
    collection.set_pattern_filters(&[]);
    collection.reload();
    assert_eq!(collection.visible().len(), 2);
}

#[test]
fn tags_serialize() {
    let collection = sample();
    let tags = collection.tags(0).expect("tags");
    let json = serde_json::to_string(tags).expect("serialize tags");
    assert!(json.contains("\"white\":\"Adams\""));
}
