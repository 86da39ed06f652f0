//! Synchronization core between a game list, a board preview and the
//! saved-filter tree of the database perspective.

pub mod collab;
pub mod list;
pub mod panel;
pub mod state;
pub mod sub_fen;
pub mod tree;

pub use collab::{BoardView, FilterTree, GameList, NodeId, NoticeSink};
pub use panel::{FilterMode, PreviewPanel};
pub use state::{PreviewState, SharedPreview};
pub use sub_fen::sub_position_pattern;
pub use tree::InMemoryFilterTree;
