//! Chess position model: squares, pieces and FEN serialization.
//!
//! A `Board` is one position snapshot. Positions serialize to the usual
//! six-field FEN string; the first field alone (`placement`) is what
//! sub-position filters are built from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FenError;

/// Standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
/// Position with no pieces on the board.
pub const EMPTY_FEN: &str = "8/8/8/8/8/8/8/8 w - - 0 1";
/// Placement field of a board with every square blank.
pub const EMPTY_PLACEMENT: &str = "8/8/8/8/8/8/8/8";

/// A square index, rank-major from a1 (a1 = 0, h1 = 7, a8 = 56).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cord(u8);

impl Cord {
    /// Build a square from a raw index, rejecting anything past h8.
    pub fn new(index: u8) -> Option<Self> {
        (index < 64).then_some(Self(index))
    }

    /// Build a square from file and rank. Both must be below 8.
    pub const fn at(file: u8, rank: u8) -> Self {
        debug_assert!(file < 8 && rank < 8);
        Self(rank * 8 + file)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// File 0..8, a-file first.
    pub fn file(self) -> u8 {
        self.0 % 8
    }

    /// Rank 0..8, first rank first.
    pub fn rank(self) -> u8 {
        self.0 / 8
    }

    /// All 64 squares, a1 through h8.
    pub fn all() -> impl Iterator<Item = Cord> {
        (0..64).map(Cord)
    }
}

impl fmt::Display for Cord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, self.rank() + 1)
    }
}

impl FromStr for Cord {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if let &[file @ b'a'..=b'h', rank @ b'1'..=b'8'] = bytes {
            Ok(Cord::at(file - b'a', rank - b'1'))
        } else {
            Err(format!("Unknown square: {}", s))
        }
    }
}

/// Side to move or piece color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    fn fen_field(self) -> &'static str {
        match self {
            Color::White => "w",
            Color::Black => "b",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Parse a lowercase FEN piece letter.
    pub fn from_fen_char(c: char) -> Option<Self> {
        match c {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    pub(crate) fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Parse a FEN piece letter; uppercase is White.
    pub fn from_fen_char(c: char) -> Option<Self> {
        let kind = PieceKind::from_fen_char(c.to_ascii_lowercase())?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self { color, kind })
    }

    pub fn fen_char(self) -> char {
        match self.color {
            Color::White => self.kind.fen_char().to_ascii_uppercase(),
            Color::Black => self.kind.fen_char(),
        }
    }
}

/// Castling availability, the third FEN field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Castling {
    pub white_king: bool,
    pub white_queen: bool,
    pub black_king: bool,
    pub black_queen: bool,
}

impl Castling {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn full() -> Self {
        Self {
            white_king: true,
            white_queen: true,
            black_king: true,
            black_queen: true,
        }
    }

    fn from_fen_field(field: &str) -> Result<Self, FenError> {
        let mut castling = Castling::none();
        if field == "-" {
            return Ok(castling);
        }
        for c in field.chars() {
            match c {
                'K' => castling.white_king = true,
                'Q' => castling.white_queen = true,
                'k' => castling.black_king = true,
                'q' => castling.black_queen = true,
                _ => {
                    return Err(FenError::BadField {
                        field: "castling",
                        value: field.to_string(),
                    });
                }
            }
        }
        Ok(castling)
    }

    fn fen_field(self) -> String {
        let mut field = String::new();
        if self.white_king {
            field.push('K');
        }
        if self.white_queen {
            field.push('Q');
        }
        if self.black_king {
            field.push('k');
        }
        if self.black_queen {
            field.push('q');
        }
        if field.is_empty() {
            field.push('-');
        }
        field
    }
}

/// One position snapshot: 64 cells plus the non-placement FEN metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    turn: Color,
    castling: Castling,
    en_passant: Option<Cord>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Board {
    /// A board with no pieces, White to move.
    pub fn empty() -> Self {
        Self {
            squares: [None; 64],
            turn: Color::White,
            castling: Castling::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The standard starting position.
    pub fn start() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let mut board = Self::empty();
        for file in 0..8 {
            board.squares[Cord::at(file, 0).index()] =
                Some(Piece::new(Color::White, BACK_RANK[file as usize]));
            board.squares[Cord::at(file, 1).index()] =
                Some(Piece::new(Color::White, PieceKind::Pawn));
            board.squares[Cord::at(file, 6).index()] =
                Some(Piece::new(Color::Black, PieceKind::Pawn));
            board.squares[Cord::at(file, 7).index()] =
                Some(Piece::new(Color::Black, BACK_RANK[file as usize]));
        }
        board.castling = Castling::full();
        board
    }

    /// Parse a FEN string. The placement field is required; missing trailing
    /// fields fall back to `w - - 0 1`.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut fields = fen.split_whitespace();
        let placement = fields.next().ok_or(FenError::MissingField("placement"))?;

        let mut board = Self::empty();
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }
        for (row, rank_field) in ranks.iter().enumerate() {
            let rank = 7 - row as u8;
            let mut file: u8 = 0;
            for c in rank_field.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if skip == 0 || skip > 8 {
                        return Err(FenError::BadRank { rank: rank + 1 });
                    }
                    file += skip as u8;
                } else {
                    let piece = Piece::from_fen_char(c).ok_or(FenError::UnknownPiece(c))?;
                    if file >= 8 {
                        return Err(FenError::BadRank { rank: rank + 1 });
                    }
                    board.squares[Cord::at(file, rank).index()] = Some(piece);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::BadRank { rank: rank + 1 });
            }
        }

        if let Some(turn) = fields.next() {
            board.turn = match turn {
                "w" => Color::White,
                "b" => Color::Black,
                _ => {
                    return Err(FenError::BadField {
                        field: "side to move",
                        value: turn.to_string(),
                    });
                }
            };
        }
        if let Some(castling) = fields.next() {
            board.castling = Castling::from_fen_field(castling)?;
        }
        if let Some(en_passant) = fields.next() {
            board.en_passant = match en_passant {
                "-" => None,
                square => Some(square.parse().map_err(|_| FenError::BadField {
                    field: "en passant",
                    value: square.to_string(),
                })?),
            };
        }
        if let Some(halfmove) = fields.next() {
            board.halfmove_clock = halfmove.parse().map_err(|_| FenError::BadField {
                field: "halfmove clock",
                value: halfmove.to_string(),
            })?;
        }
        if let Some(fullmove) = fields.next() {
            board.fullmove_number = fullmove.parse().map_err(|_| FenError::BadField {
                field: "fullmove number",
                value: fullmove.to_string(),
            })?;
        }
        Ok(board)
    }

    /// Serialize the full six-field FEN string.
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.placement(),
            self.turn.fen_field(),
            self.castling.fen_field(),
            self.en_passant
                .map_or_else(|| "-".to_string(), |sq| sq.to_string()),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// The piece-placement field alone, the sub-position filter currency.
    pub fn placement(&self) -> String {
        let mut placement = String::new();
        for rank in (0..8).rev() {
            let mut blanks = 0;
            for file in 0..8 {
                match self.squares[Cord::at(file, rank).index()] {
                    Some(piece) => {
                        if blanks > 0 {
                            placement.push(char::from_digit(blanks, 10).unwrap_or('8'));
                            blanks = 0;
                        }
                        placement.push(piece.fen_char());
                    }
                    None => blanks += 1,
                }
            }
            if blanks > 0 {
                placement.push(char::from_digit(blanks, 10).unwrap_or('8'));
            }
            if rank > 0 {
                placement.push('/');
            }
        }
        placement
    }

    pub fn piece_at(&self, cord: Cord) -> Option<Piece> {
        self.squares[cord.index()]
    }

    pub fn set(&mut self, cord: Cord, piece: Piece) {
        self.squares[cord.index()] = Some(piece);
    }

    /// Blank a square.
    pub fn clear(&mut self, cord: Cord) {
        self.squares[cord.index()] = None;
    }

    /// Remove and return the piece on a square.
    pub fn take(&mut self, cord: Cord) -> Option<Piece> {
        self.squares[cord.index()].take()
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn castling(&self) -> Castling {
        self.castling
    }

    pub fn en_passant(&self) -> Option<Cord> {
        self.en_passant
    }

    /// Half-move index of this position: 0 for the starting position, odd
    /// whenever Black is to move.
    pub fn ply(&self) -> usize {
        let base = (self.fullmove_number.saturating_sub(1) as usize) * 2;
        match self.turn {
            Color::White => base,
            Color::Black => base + 1,
        }
    }

    pub(crate) fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
    }

    pub(crate) fn set_en_passant(&mut self, target: Option<Cord>) {
        self.en_passant = target;
    }

    pub(crate) fn castling_mut(&mut self) -> &mut Castling {
        &mut self.castling
    }

    pub(crate) fn set_halfmove_clock(&mut self, clock: u32) {
        self.halfmove_clock = clock;
    }

    pub(crate) fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub(crate) fn advance_fullmove(&mut self) {
        self.fullmove_number += 1;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let cell = self.squares[Cord::at(file, rank).index()]
                    .map_or('.', |piece| piece.fen_char());
                write!(f, "{}", cell)?;
                if file < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cord_round_trip() {
        for cord in Cord::all() {
            let parsed: Cord = cord.to_string().parse().expect("algebraic square");
            assert_eq!(parsed, cord);
        }
        assert_eq!("a1".parse::<Cord>(), Ok(Cord::at(0, 0)));
        assert_eq!("h8".parse::<Cord>(), Ok(Cord::at(7, 7)));
        assert!("i9".parse::<Cord>().is_err());
        assert!("e".parse::<Cord>().is_err());
    }

    #[test]
    fn start_board_matches_start_fen() {
        assert_eq!(Board::start().to_fen(), START_FEN);
        let parsed = Board::from_fen(START_FEN).expect("start fen");
        assert_eq!(parsed, Board::start());
    }

    #[test]
    fn empty_board_matches_empty_fen() {
        assert_eq!(Board::empty().to_fen(), EMPTY_FEN);
        assert_eq!(Board::empty().placement(), EMPTY_PLACEMENT);
    }

    #[test]
    fn fen_round_trip_mid_game() {
        let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
        let board = Board::from_fen(fen).expect("valid fen");
        assert_eq!(board.to_fen(), fen);
        assert_eq!(board.ply(), 4);
    }

    #[test]
    fn placement_only_fen_gets_defaults() {
        let board = Board::from_fen("8/8/8/3k4/8/8/8/4K3").expect("placement only");
        assert_eq!(board.turn(), Color::White);
        assert_eq!(board.castling(), Castling::none());
        assert_eq!(board.en_passant(), None);
    }

    #[test]
    fn bad_fens_are_rejected() {
        assert!(matches!(Board::from_fen(""), Err(FenError::MissingField(_))));
        assert!(matches!(
            Board::from_fen("8/8/8/8/8/8/8"),
            Err(FenError::RankCount(7))
        ));
        assert!(matches!(
            Board::from_fen("9/8/8/8/8/8/8/8"),
            Err(FenError::BadRank { rank: 8 })
        ));
        assert!(matches!(
            Board::from_fen("x7/8/8/8/8/8/8/8"),
            Err(FenError::UnknownPiece('x'))
        ));
        assert!(matches!(
            Board::from_fen("8/8/8/8/8/8/8/8 z"),
            Err(FenError::BadField { .. })
        ));
    }

    #[test]
    fn ply_tracks_side_to_move() {
        let white = Board::from_fen("8/8/8/8/8/8/8/8 w - - 0 5").expect("fen");
        let black = Board::from_fen("8/8/8/8/8/8/8/8 b - - 0 5").expect("fen");
        assert_eq!(white.ply(), 8);
        assert_eq!(black.ply(), 9);
    }
}
