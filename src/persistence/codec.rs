use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::game::{Board, Cell, GameState, LastMove, Outcome, Player};

fn in_progress() -> Outcome {
    Outcome::InProgress
}

/// On-disk form of a game, detached from any live `GameState`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Row-major cells, bottom row first. `null` is an empty cell.
    pub cells: Vec<Option<Player>>,
    pub columns: usize,
    pub rows: usize,
    pub win_length: usize,
    /// Player to move first, then the opponent.
    pub players: [Player; 2],
    #[serde(default = "in_progress")]
    pub outcome: Outcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_move: Option<LastMove>,
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        let board = state.board();
        let active = state.active_player();
        Snapshot {
            cells: board.cells().iter().map(|cell| cell.owner()).collect(),
            columns: board.columns(),
            rows: board.rows(),
            win_length: state.win_length(),
            players: [active, active.next()],
            outcome: state.outcome(),
            last_move: state.last_move(),
        }
    }
}

impl TryFrom<Snapshot> for GameState {
    type Error = DecodeError;

    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        let malformed = |msg: String| Err(DecodeError::Malformed(msg));

        if snapshot.columns == 0 || snapshot.rows == 0 {
            return malformed(format!(
                "board must be at least 1x1, got {}x{}",
                snapshot.columns, snapshot.rows
            ));
        }
        if snapshot.win_length == 0 {
            return malformed("win_length must be at least 1".into());
        }
        let [active, other] = snapshot.players;
        if active == other {
            return malformed("players must be distinct".into());
        }

        let cell_count = snapshot.cells.len();
        let cells = snapshot
            .cells
            .into_iter()
            .map(|owner| owner.map_or(Cell::Empty, Cell::Owned))
            .collect();
        let Some(board) = Board::from_cells(snapshot.columns, snapshot.rows, cells) else {
            return malformed(format!(
                "expected {} cells for a {}x{} board, found {}",
                snapshot.columns.saturating_mul(snapshot.rows),
                snapshot.columns,
                snapshot.rows,
                cell_count
            ));
        };

        if let Some(col) = board.floating_column() {
            return malformed(format!("column {} has a piece above an empty cell", col + 1));
        }
        if let Some(last) = snapshot.last_move {
            if last.position >= board.len() || board.cell(last.position) != Cell::Owned(last.player) {
                return malformed(format!(
                    "last move at {} does not match the board",
                    last.position
                ));
            }
        }
        if let Outcome::Won(winner) = snapshot.outcome {
            if winner != active {
                return malformed("winner must be listed first".into());
            }
        }

        Ok(GameState::from_parts(
            board,
            snapshot.win_length,
            active,
            snapshot.last_move,
            snapshot.outcome,
        ))
    }
}

/// Serialize a game to bytes.
pub fn encode(state: &GameState) -> Vec<u8> {
    serde_json::to_vec_pretty(&Snapshot::from(state)).expect("snapshot serializes")
}

/// Rebuild a game from bytes produced by [`encode`].
pub fn decode(bytes: &[u8]) -> Result<GameState, DecodeError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(DecodeError::Empty);
    }
    let snapshot: Snapshot = serde_json::from_slice(bytes)?;
    GameState::try_from(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_decode_empty() {
        assert!(matches!(decode(b""), Err(DecodeError::Empty)));
        assert!(matches!(decode(b" \n"), Err(DecodeError::Empty)));
    }

    #[test]
    fn test_decode_truncated_is_malformed() {
        let mut state = GameState::new(7, 7, 4);
        state.place(3).unwrap();
        let bytes = encode(&state);
        let truncated = &bytes[..bytes.len() / 2];
        assert!(matches!(decode(truncated), Err(DecodeError::Malformed(_))));
        assert!(matches!(decode(b"\x80\x03]q\x00"), Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn test_field_order_and_shape() {
        let mut state = GameState::new(2, 1, 2);
        state.place(1).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&encode(&state)).unwrap();
        assert_eq!(json["cells"], serde_json::json!([null, "first"]));
        assert_eq!(json["columns"], 2);
        assert_eq!(json["rows"], 1);
        assert_eq!(json["win_length"], 2);
        assert_eq!(json["players"], serde_json::json!(["second", "first"]));

        let text = String::from_utf8(encode(&state)).unwrap();
        let order: Vec<usize> = ["\"cells\"", "\"columns\"", "\"rows\"", "\"win_length\"", "\"players\""]
            .iter()
            .map(|key| text.find(key).unwrap())
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_minimal_record_decodes() {
        let json = r#"{"cells":[null,null,null,null],"columns":2,"rows":2,"win_length":2,"players":["first","second"]}"#;
        let state = decode(json.as_bytes()).unwrap();
        assert_eq!(state, GameState::new(2, 2, 2));
    }

    #[test]
    fn test_rejects_inconsistent_records() {
        let cases = [
            r#"{"cells":[null,null,null],"columns":2,"rows":2,"win_length":2,"players":["first","second"]}"#,
            r#"{"cells":[],"columns":0,"rows":2,"win_length":2,"players":["first","second"]}"#,
            r#"{"cells":[null],"columns":1,"rows":1,"win_length":0,"players":["first","second"]}"#,
            r#"{"cells":[null],"columns":1,"rows":1,"win_length":1,"players":["first","first"]}"#,
            r#"{"cells":[null],"columns":1,"rows":1,"win_length":1,"players":["first","second"],"last_move":{"position":0,"player":"first"}}"#,
            r#"{"cells":["second"],"columns":1,"rows":1,"win_length":1,"players":["first","second"],"outcome":{"won":"second"}}"#,
            r#"{"cells":[null,"first"],"columns":1,"rows":2,"win_length":1,"players":["first","second"]}"#,
        ];
        for json in cases {
            assert!(
                matches!(decode(json.as_bytes()), Err(DecodeError::Malformed(_))),
                "accepted {json}"
            );
        }
    }

    #[test]
    fn test_floating_piece_is_malformed() {
        let json = r#"{"cells":[null,"first"],"columns":1,"rows":2,"win_length":2,"players":["second","first"]}"#;
        match decode(json.as_bytes()) {
            Err(DecodeError::Malformed(msg)) => assert!(msg.contains("above an empty cell"), "{msg}"),
            other => panic!("expected malformed, got {other:?}"),
        }
    }

    #[test]
    fn test_active_player_survives_round_trip() {
        let mut state = GameState::new(7, 7, 4);
        state.place(0).unwrap();
        let restored = decode(&encode(&state)).unwrap();
        assert_eq!(restored.active_player(), Player::Second);
    }

    #[test]
    fn test_round_trip_over_random_games() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let columns = rng.random_range(1..9);
            let rows = rng.random_range(1..9);
            let win_length = rng.random_range(1..=columns.max(rows));
            let mut state = GameState::new(columns, rows, win_length);
            let moves = rng.random_range(0..columns * rows + 2);
            for _ in 0..moves {
                let _ = state.place(rng.random_range(0..columns as i64) as isize);
                let restored = decode(&encode(&state)).unwrap();
                assert_eq!(restored, state);
            }
        }
    }
}
