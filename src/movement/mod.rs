//! Robot movement over the board.
//!
//! ## Push chains
//!
//! A robot moving into an occupied space pushes the occupant ahead of it,
//! which may push the next one, and so on. The whole chain moves or nothing
//! moves: [`push_robots`] first walks the chain to find a free space, and
//! only then relocates robots, starting from the far end. Each relocation
//! clears its source before filling the destination.
//!
//! A chain is blocked when the next space has a wall on the side facing the
//! direction of travel, or when the chain wraps all the way around the board
//! back to the robot that started it.
//!
//! ## Turning
//!
//! Turns change the heading only: right is [`Heading::next`], left is
//! [`Heading::prev`], a U-turn is two right turns.

use tracing::trace;

use crate::board::Board;
use crate::core::{Heading, PlayerId, Position};

/// Move the robot at `position` one step in `heading`, pushing any robots in
/// the way.
///
/// Returns false, with nothing moved, if there is no robot at `position` or
/// the chain is blocked.
///
/// Robots are relocated one at a time, far end first, and each relocation
/// emits its own pair of [`BoardEvent::SpaceChanged`] events. Observers
/// therefore see the intermediate boards of a multi-robot push.
///
/// [`BoardEvent::SpaceChanged`]: crate::core::BoardEvent::SpaceChanged
pub fn push_robots(board: &mut Board, position: Position, heading: Heading) -> bool {
    if board.space_at(position).and_then(|s| s.player()).is_none() {
        return false;
    }

    // Occupied positions from the mover outwards.
    let mut chain = vec![position];
    let mut cursor = position;
    loop {
        let Some(next) = board.neighbour(cursor, heading) else {
            return false;
        };
        if next.has_wall(heading) {
            trace!(from = %cursor, %heading, "push blocked by wall");
            return false;
        }
        let next_position = next.position();
        if next_position == position {
            trace!(from = %position, %heading, "push chain wraps onto itself");
            return false;
        }
        if next.is_free() {
            break;
        }
        chain.push(next_position);
        cursor = next_position;
    }

    for &from in chain.iter().rev() {
        let Some(player) = board.space_at(from).and_then(|s| s.player()) else {
            continue;
        };
        let Some(to) = board.neighbour(from, heading).map(|s| s.position()) else {
            continue;
        };
        board.place_player(player, Some(to));
    }
    true
}

fn step(board: &mut Board, player: PlayerId, heading: Heading) -> bool {
    match board.player(player).and_then(|p| p.position()) {
        Some(position) => push_robots(board, position, heading),
        None => false,
    }
}

/// Move one step in the robot's heading.
pub fn move_forward(board: &mut Board, player: PlayerId) -> bool {
    let Some(heading) = board.player(player).map(|p| p.heading()) else {
        return false;
    };
    step(board, player, heading)
}

/// Move one step against the robot's heading, without turning.
pub fn move_backward(board: &mut Board, player: PlayerId) -> bool {
    let Some(heading) = board.player(player).map(|p| p.heading()) else {
        return false;
    };
    step(board, player, heading.opposite())
}

/// Two independent forward steps. A blocked first step does not prevent the
/// second attempt. Returns true if either step moved the robot.
pub fn fast_forward(board: &mut Board, player: PlayerId) -> bool {
    let first = move_forward(board, player);
    let second = move_forward(board, player);
    first || second
}

fn turn(board: &mut Board, player: PlayerId, rotate: impl Fn(Heading) -> Heading) {
    if let Some(heading) = board.player(player).map(|p| p.heading()) {
        board.set_heading(player, rotate(heading));
    }
}

pub fn turn_right(board: &mut Board, player: PlayerId) {
    turn(board, player, Heading::next);
}

pub fn turn_left(board: &mut Board, player: PlayerId) {
    turn(board, player, Heading::prev);
}

pub fn u_turn(board: &mut Board, player: PlayerId) {
    turn(board, player, Heading::opposite);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    fn robot(board: &mut Board, x: usize, y: usize, heading: Heading) -> PlayerId {
        let id = board.add_player(Player::new(format!("R{}", board.players_count()), None));
        board.place_player(id, Some(Position::new(x, y)));
        board.set_heading(id, heading);
        id
    }

    fn at(board: &Board, id: PlayerId) -> Position {
        board.player(id).unwrap().position().unwrap()
    }

    #[test]
    fn test_move_forward_into_free_space() {
        let mut board = Board::with_size(8, 8);
        let p = robot(&mut board, 0, 0, Heading::South);

        assert!(move_forward(&mut board, p));
        assert_eq!(at(&board, p), Position::new(0, 1));
        assert!(board.space(0, 0).unwrap().is_free());
    }

    #[test]
    fn test_fast_forward_moves_two() {
        let mut board = Board::with_size(8, 8);
        let p = robot(&mut board, 0, 0, Heading::South);

        assert!(fast_forward(&mut board, p));
        assert_eq!(at(&board, p), Position::new(0, 2));
    }

    #[test]
    fn test_move_backward_keeps_heading() {
        let mut board = Board::with_size(8, 8);
        let p = robot(&mut board, 3, 3, Heading::North);

        assert!(move_backward(&mut board, p));
        assert_eq!(at(&board, p), Position::new(3, 4));
        assert_eq!(board.player(p).unwrap().heading(), Heading::North);
    }

    #[test]
    fn test_push_chain_moves_everyone() {
        let mut board = Board::with_size(8, 8);
        let a = robot(&mut board, 1, 1, Heading::South);
        let b = robot(&mut board, 1, 2, Heading::East);
        let c = robot(&mut board, 1, 3, Heading::West);

        assert!(move_forward(&mut board, a));

        assert_eq!(at(&board, a), Position::new(1, 2));
        assert_eq!(at(&board, b), Position::new(1, 3));
        assert_eq!(at(&board, c), Position::new(1, 4));
        assert!(board.space(1, 1).unwrap().is_free());
        // Pushed robots keep their heading
        assert_eq!(board.player(b).unwrap().heading(), Heading::East);
    }

    #[test]
    fn test_push_chain_blocked_by_wall_moves_nobody() {
        let mut board = Board::with_size(8, 8);
        let a = robot(&mut board, 1, 1, Heading::South);
        let b = robot(&mut board, 1, 2, Heading::South);
        board.space_mut(1, 3).unwrap().add_wall(Heading::South);

        assert!(!move_forward(&mut board, a));

        assert_eq!(at(&board, a), Position::new(1, 1));
        assert_eq!(at(&board, b), Position::new(1, 2));
        assert!(board.space(1, 3).unwrap().is_free());
    }

    #[test]
    fn test_wall_on_next_space_blocks_single_robot() {
        let mut board = Board::with_size(8, 8);
        let a = robot(&mut board, 2, 2, Heading::East);
        board.space_mut(3, 2).unwrap().add_wall(Heading::East);

        assert!(!move_forward(&mut board, a));
        assert_eq!(at(&board, a), Position::new(2, 2));
    }

    #[test]
    fn test_full_ring_cannot_push() {
        let mut board = Board::with_size(3, 1);
        let a = robot(&mut board, 0, 0, Heading::East);
        let b = robot(&mut board, 1, 0, Heading::East);
        let c = robot(&mut board, 2, 0, Heading::East);

        assert!(!move_forward(&mut board, a));
        assert_eq!(at(&board, a), Position::new(0, 0));
        assert_eq!(at(&board, b), Position::new(1, 0));
        assert_eq!(at(&board, c), Position::new(2, 0));
    }

    #[test]
    fn test_push_wraps_around_edge() {
        let mut board = Board::with_size(4, 4);
        let a = robot(&mut board, 2, 0, Heading::East);
        let b = robot(&mut board, 3, 0, Heading::East);

        assert!(move_forward(&mut board, a));
        assert_eq!(at(&board, a), Position::new(3, 0));
        assert_eq!(at(&board, b), Position::new(0, 0));
    }

    #[test]
    fn test_fast_forward_second_step_after_blocked_first() {
        let mut board = Board::with_size(8, 8);
        let a = robot(&mut board, 0, 0, Heading::South);
        board.space_mut(0, 1).unwrap().add_wall(Heading::South);

        assert!(!fast_forward(&mut board, a));
        assert_eq!(at(&board, a), Position::new(0, 0));
    }

    #[test]
    fn test_push_from_empty_space() {
        let mut board = Board::with_size(4, 4);
        assert!(!push_robots(&mut board, Position::new(1, 1), Heading::North));
    }

    #[test]
    fn test_turns() {
        let mut board = Board::with_size(4, 4);
        let p = robot(&mut board, 0, 1, Heading::North);

        turn_right(&mut board, p);
        assert_eq!(board.player(p).unwrap().heading(), Heading::East);

        turn_left(&mut board, p);
        turn_left(&mut board, p);
        assert_eq!(board.player(p).unwrap().heading(), Heading::West);

        u_turn(&mut board, p);
        assert_eq!(board.player(p).unwrap().heading(), Heading::East);
        assert_eq!(at(&board, p), Position::new(0, 1));
    }
}
