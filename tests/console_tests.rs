use std::io::Cursor;

use naval_duel::{run_game, Console, DirectorySink, MemorySink, Player, SnapshotSink};

fn play(script: &str) -> (anyhow::Result<Player>, String, MemorySink) {
    let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let mut sink = MemorySink::new();
    let result = run_game(&mut console, &mut sink);
    let output = String::from_utf8(console.into_output()).unwrap();
    (result, output, sink)
}

#[test]
fn full_game_player_one_wins() {
    let script = "\
3
3
A1,B1,C1
a3, b3, c3
A3
A1
B3
A2
C3
";
    let (result, output, sink) = play(script);
    assert_eq!(result.unwrap(), Player::One);
    assert!(output.contains("Player 1, place your ships:"));
    assert!(output.contains("Player 2, place your ships:"));
    assert!(output.contains("Player 1's turn:"));
    assert!(output.contains("Player 2's turn:"));
    assert!(output.contains("Player 1 wins!"));
    assert!(output.contains("GAME OVER"));

    // snapshots are never hidden and track the latest state
    assert_eq!(
        sink.get("player_two_board.txt"),
        Some("   A B C\n 1 ~ ~ ~\n 2 ~ ~ ~\n 3 X X X\n")
    );
    assert_eq!(
        sink.get("player_one_board.txt"),
        Some("   A B C\n 1 X O O\n 2 * ~ ~\n 3 ~ ~ ~\n")
    );
    // two placements plus five consuming attacks
    assert_eq!(sink.writes(), 7);
}

#[test]
fn bad_answers_are_reported_and_reprompted() {
    let script = "\
twelve
2
3
1
A1,B2
B3
A1
Z9
B2
A2
B1
B2
";
    let (result, output, _sink) = play(script);
    assert!(output.contains("Please enter whole numbers only."));
    assert!(output.contains("Each ship must be at least 1 and at most the board size long."));
    assert!(output.contains("Wrong number of coordinates for this ship."));
    assert!(output.contains("Invalid coordinate number."));
    assert!(output.contains("Invalid coordinate letter."));
    assert_eq!(result.unwrap(), Player::One);
}

#[test]
fn repeated_attack_keeps_the_turn() {
    let script = "\
2
1
A1
B2
A2
B1
A2
B2
";
    let (result, output, _sink) = play(script);
    assert!(output.contains("Position already attacked."));
    assert_eq!(result.unwrap(), Player::One);
    assert_eq!(output.matches("Player 1's turn:").count(), 2);
    assert_eq!(output.matches("Player 2's turn:").count(), 1);
}

#[test]
fn opponent_board_is_shown_with_ships_hidden() {
    let script = "2\n1\nA1\nB2\nA1\n";
    let (result, output, _sink) = play(script);
    assert!(result.is_err());
    let turn = output.split("Player 1's turn:").nth(1).unwrap();
    assert!(turn.starts_with("\n   A B\n 1 ~ ~\n 2 ~ ~\n"));
}

#[test]
fn closed_input_is_an_error() {
    let (result, _output, _sink) = play("3\n");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("input closed"));
}

#[test]
fn directory_sink_writes_files() {
    let dir = std::env::temp_dir().join(format!("naval-duel-test-{}", std::process::id()));
    let mut sink = DirectorySink::new(&dir);
    sink.save("player_one_board.txt", "   A\n 1 ~\n").unwrap();
    let written = std::fs::read_to_string(dir.join("player_one_board.txt")).unwrap();
    assert_eq!(written, "   A\n 1 ~\n");
    std::fs::remove_dir_all(&dir).unwrap();
}
