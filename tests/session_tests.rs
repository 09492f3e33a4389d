//! Session tests - configuration, autoplay, and transcript output

use std::io::Write;

use match3::core::check_matches;
use match3::sim::{Autoplayer, Session, SimConfig, SimError, Summary, TranscriptWriter};

#[test]
fn test_config_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("match3.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "width = 5").unwrap();
    writeln!(file, "height = 6").unwrap();
    writeln!(file, "alphabet = [\"a\", \"b\", \"c\"]").unwrap();
    writeln!(file, "seed = 42").unwrap();
    drop(file);

    let config = SimConfig::load(&path).unwrap();
    assert_eq!(config.width, 5);
    assert_eq!(config.height, 6);
    assert_eq!(config.alphabet, vec!["a", "b", "c"]);
    assert_eq!(config.seed, 42);
    assert_eq!(config.max_moves, SimConfig::default().max_moves);
}

#[test]
fn test_config_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = SimConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, SimConfig::default());

    let err = SimConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, SimError::FileRead { .. }));
}

#[test]
fn test_config_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "width = \"wide\"\n").unwrap();
    assert!(matches!(
        SimConfig::load(&path),
        Err(SimError::TomlParse(_))
    ));

    std::fs::write(&path, "alphabet = [\"only\"]\n").unwrap();
    assert!(matches!(SimConfig::load(&path), Err(SimError::Generator(_))));
}

#[test]
fn test_autoplay_is_reproducible() {
    let config = SimConfig {
        width: 6,
        height: 6,
        seed: 2024,
        max_moves: 15,
        ..SimConfig::default()
    };

    let run = || {
        let mut session = Session::from_config(&config).unwrap();
        let mut boards = Vec::new();
        Autoplayer::new(config.seed).run(&mut session, |result| {
            boards.push(result.board.clone());
        });
        (session.moves(), boards)
    };

    let (moves_a, boards_a) = run();
    let (moves_b, boards_b) = run();
    assert_eq!(moves_a, moves_b);
    assert_eq!(boards_a, boards_b);
    for board in &boards_a {
        assert!(board.is_filled());
        assert!(check_matches(board).is_empty());
    }
}

#[test]
fn test_full_transcript() {
    let config = SimConfig {
        width: 5,
        height: 5,
        seed: 8,
        max_moves: 4,
        ..SimConfig::default()
    };
    let mut session = Session::from_config(&config).unwrap();
    let mut player = Autoplayer::new(config.seed);
    let mut writer = TranscriptWriter::new(Vec::new());

    writer.write_start(&config, session.board()).unwrap();
    while let Some((first, second)) = player.choose(&session) {
        let result = session.play(first, second);
        writer.write_move(first, second, &result).unwrap();
    }
    writer
        .write_end(Summary {
            moves: session.moves(),
            matches: session.matches_cleared(),
            cascades: session.cascades(),
            stuck: session.is_stuck(),
        })
        .unwrap();

    let text = String::from_utf8(writer.into_inner()).unwrap();
    let records: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(records.first().unwrap()["type"], "start");
    assert_eq!(records.last().unwrap()["type"], "end");
    assert_eq!(records.len() as u32, session.moves() + 2);

    let moves = &records[1..records.len() - 1];
    for (i, record) in moves.iter().enumerate() {
        assert_eq!(record["type"], "move");
        assert_eq!(record["seq"], i as u64 + 1);
        let effects = record["effects"].as_array().unwrap();
        assert_eq!(effects.first().unwrap()["kind"], "Match");
        assert_eq!(effects.last().unwrap()["kind"], "Refill");
        assert_eq!(record["board"]["grid"].as_array().unwrap().len(), 5);
    }
}
