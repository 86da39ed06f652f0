//! Coordinate-notation moves and position replay.
//!
//! Replay is what a database needs to page through stored games: pieces are
//! moved without legality checking, with just enough chess awareness
//! (castling rook hop, en passant, promotion, rights and clocks) to keep
//! every snapshot's FEN faithful.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Cord, Piece, PieceKind};
use crate::error::MoveError;

/// A half-move in coordinate notation: source, destination and an optional
/// promotion piece (`e2e4`, `e7e8q`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Cord,
    pub to: Cord,
    pub promotion: Option<PieceKind>,
}

impl Move {
    pub fn new(from: Cord, to: Cord) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    pub fn promoting(from: Cord, to: Cord, kind: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(kind),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.fen_char())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return Err(MoveError::BadNotation(s.to_string()));
        }
        let from: Cord = s[0..2]
            .parse()
            .map_err(|_| MoveError::BadNotation(s.to_string()))?;
        let to: Cord = s[2..4]
            .parse()
            .map_err(|_| MoveError::BadNotation(s.to_string()))?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match PieceKind::from_fen_char(c.to_ascii_lowercase()) {
                Some(PieceKind::Pawn) | Some(PieceKind::King) | None => {
                    return Err(MoveError::BadNotation(s.to_string()));
                }
                kind => kind,
            },
        };
        Ok(Self {
            from,
            to,
            promotion,
        })
    }
}

impl Board {
    /// Replay a move onto this position, producing the next snapshot.
    pub fn apply(&self, mv: Move) -> Result<Board, MoveError> {
        let mut next = self.clone();
        let piece = next.take(mv.from).ok_or(MoveError::EmptySource(mv.from))?;

        let mut capture = self.piece_at(mv.to).is_some();
        if piece.kind == PieceKind::Pawn
            && mv.from.file() != mv.to.file()
            && self.piece_at(mv.to).is_none()
        {
            // En passant: the bypassed pawn sits beside the destination.
            next.clear(Cord::at(mv.to.file(), mv.from.rank()));
            capture = true;
        }

        if piece.kind == PieceKind::King && mv.from.file().abs_diff(mv.to.file()) == 2 {
            let rank = mv.from.rank();
            let (rook_from, rook_to) = if mv.to.file() == 6 {
                (Cord::at(7, rank), Cord::at(5, rank))
            } else {
                (Cord::at(0, rank), Cord::at(3, rank))
            };
            if let Some(rook) = next.take(rook_from) {
                next.set(rook_to, rook);
            }
        }

        let placed = match mv.promotion {
            Some(kind) if piece.kind == PieceKind::Pawn => Piece::new(piece.color, kind),
            _ => piece,
        };
        next.set(mv.to, placed);

        let double_push = piece.kind == PieceKind::Pawn && mv.from.rank().abs_diff(mv.to.rank()) == 2;
        next.set_en_passant(double_push.then(|| {
            Cord::at(mv.from.file(), mv.from.rank().midpoint(mv.to.rank()))
        }));

        withdraw_castling_rights(&mut next, piece, mv);

        if piece.kind == PieceKind::Pawn || capture {
            next.set_halfmove_clock(0);
        } else {
            next.set_halfmove_clock(self.halfmove_clock() + 1);
        }
        if self.turn() == Color::Black {
            next.advance_fullmove();
        }
        next.set_turn(self.turn().opposite());
        Ok(next)
    }
}

/// Kings and rooks leaving (or a rook being captured on) a home square
/// withdraw the matching castling rights.
fn withdraw_castling_rights(board: &mut Board, piece: Piece, mv: Move) {
    let castling = board.castling_mut();
    if piece.kind == PieceKind::King {
        match piece.color {
            Color::White => {
                castling.white_king = false;
                castling.white_queen = false;
            }
            Color::Black => {
                castling.black_king = false;
                castling.black_queen = false;
            }
        }
    }
    for cord in [mv.from, mv.to] {
        match (cord.file(), cord.rank()) {
            (0, 0) => castling.white_queen = false,
            (7, 0) => castling.white_king = false,
            (0, 7) => castling.black_queen = false,
            (7, 7) => castling.black_king = false,
            _ => {}
        }
    }
}
