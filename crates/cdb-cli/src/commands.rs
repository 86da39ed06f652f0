//! Command implementations.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, anyhow, bail};
use serde_json::json;
use tracing::warn;

use cdb_model::{Board, Cord, FilterQuery, GameModel};
use cdb_preview::{BoardView, InMemoryFilterTree, NoticeSink, PreviewPanel};
use cdb_store::GameCollection;

use crate::cli::{FilterArgs, SearchArgs, ShowArgs};

/// Board view stand-in for a headless run: marked squares come from the
/// command line, redraws go nowhere.
struct MarkedSquares {
    marked: BTreeSet<Cord>,
}

impl BoardView for MarkedSquares {
    fn request_redraw(&mut self) {}

    fn marked_cells(&self) -> BTreeSet<Cord> {
        self.marked.clone()
    }
}

/// Notices end up on the log instead of in a dialog.
struct LoggedNotices;

impl NoticeSink for LoggedNotices {
    fn warn_notice(&mut self, primary: &str, secondary: Option<&str>) {
        match secondary {
            Some(detail) => warn!("{primary}: {detail}"),
            None => warn!("{primary}"),
        }
    }
}

pub fn run_show(collection_path: &Path, args: &ShowArgs) -> anyhow::Result<()> {
    let collection = open_collection(collection_path)?;
    let record = collection
        .record(game_index(args.game, &collection)?)
        .context("record lookup failed")?;

    let mut model = GameModel::empty();
    if let Err(err) = collection.load_record(&record, &mut model) {
        // Same policy as the preview panel: warn and show what loaded.
        match &err.detail {
            Some(detail) => warn!("{}: {detail}", err.message),
            None => warn!("{}", err.message),
        }
    }

    let tags = collection.tags(record.id).context("record lookup failed")?;
    println!("{} ({})", record.summary, tags.result);
    if let Some(event) = &tags.event {
        println!("{event}");
    }
    let ply = args.ply.map_or_else(|| model.high_ply(), |p| model.clamp_ply(p));
    let board = model.board_at(ply);
    println!();
    println!("{board}");
    println!();
    println!("ply {ply}: {}", board.to_fen());
    Ok(())
}

pub fn run_search(collection_path: &Path, args: &SearchArgs) -> anyhow::Result<()> {
    let mut collection = open_collection(collection_path)?;
    match (&args.fen, &args.sub_fen) {
        (None, None) => bail!("pass --fen or --sub-fen to search by"),
        (Some(fen), _) => {
            Board::from_fen(fen).with_context(|| format!("invalid --fen {fen:?}"))?;
            collection.set_position_filter(fen);
        }
        (None, Some(pattern)) => {
            Board::from_fen(pattern)
                .with_context(|| format!("invalid --sub-fen {pattern:?}"))?;
            collection.set_pattern_filters(&[FilterQuery::sub_fen(pattern.clone())]);
        }
    }
    collection.reload();
    print_matches(&collection, args.json);
    Ok(())
}

pub fn run_filter(collection_path: &Path, args: &FilterArgs) -> anyhow::Result<()> {
    let collection = open_collection(collection_path)?;
    let row = game_index(args.game, &collection)?;
    let marked = parse_squares(&args.squares)?;

    let mut panel = PreviewPanel::new(
        collection,
        MarkedSquares { marked },
        InMemoryFilterTree::new(),
        LoggedNotices,
    );
    panel.on_selection_changed(Some(row));
    match args.ply {
        Some(ply) => panel.show_ply(ply),
        None => panel.to_last(),
    }
    panel.add_filter();

    let queries = panel.tree().aggregate().to_vec();
    let Some(query) = queries.first() else {
        println!("nothing to filter: starting position with no marked squares");
        return Ok(());
    };

    panel.list_mut().set_pattern_filters(&queries);
    panel.list_mut().reload();

    if args.json {
        let matches: Vec<_> = panel
            .list()
            .visible()
            .iter()
            .map(|row| json!({ "game": row.id + 1, "ply": row.ply }))
            .collect();
        println!(
            "{}",
            json!({ "sub-fen": query.sub_fen, "matches": matches })
        );
    } else {
        println!("sub-fen: {}", query.sub_fen);
        println!(
            "matches {} of {} games",
            panel.list().visible().len(),
            panel.list().len()
        );
    }
    Ok(())
}

fn open_collection(path: &Path) -> anyhow::Result<GameCollection> {
    GameCollection::open(path)
        .with_context(|| format!("could not open collection {}", path.display()))
}

/// Translate a 1-based game number into a collection index.
fn game_index(game: usize, collection: &GameCollection) -> anyhow::Result<usize> {
    let index = game
        .checked_sub(1)
        .context("game numbers start at 1")?;
    if index >= collection.len() {
        bail!("the collection holds {} games", collection.len());
    }
    Ok(index)
}

fn parse_squares(squares: &[String]) -> anyhow::Result<BTreeSet<Cord>> {
    squares
        .iter()
        .map(|square| square.parse::<Cord>().map_err(|err| anyhow!(err)))
        .collect()
}

fn print_matches(collection: &GameCollection, as_json: bool) {
    if as_json {
        let matches: Vec<_> = collection
            .visible()
            .iter()
            .map(|row| {
                let summary = collection
                    .record(row.id)
                    .map(|record| record.summary)
                    .unwrap_or_default();
                json!({ "game": row.id + 1, "summary": summary, "ply": row.ply })
            })
            .collect();
        println!("{}", json!({ "matches": matches }));
    } else {
        for row in collection.visible() {
            let summary = collection
                .record(row.id)
                .map(|record| record.summary)
                .unwrap_or_default();
            println!("{:>4}  {} (ply {})", row.id + 1, summary, row.ply);
        }
        println!(
            "{} of {} games match",
            collection.visible().len(),
            collection.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_parse_into_cords() {
        let marked = parse_squares(&["a1".to_string(), "h8".to_string()]).expect("squares");
        assert_eq!(marked.len(), 2);
        assert!(parse_squares(&["j9".to_string()]).is_err());
    }

    #[test]
    fn game_numbers_are_one_based() {
        let collection =
            GameCollection::parse("[White \"A\"]\n\ne2e4\n").expect("collection");
        assert_eq!(game_index(1, &collection).expect("first game"), 0);
        assert!(game_index(0, &collection).is_err());
        assert!(game_index(2, &collection).is_err());
    }
}
