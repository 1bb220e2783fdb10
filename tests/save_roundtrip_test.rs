//! Integration test: full-fidelity save/load round trips over real game
//! state, including mid-run snapshots with loot, XP, and explored rooms.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use delve::core::game::Game;
use delve::creatures::player::Player;
use delve::save::{SaveError, SaveManager};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn temp_save_path() -> PathBuf {
    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);
    let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!("delve-integration-{test_id}"));
    fs::create_dir_all(&dir).unwrap();
    dir.join("save.dat")
}

/// Plays a handful of turns so the snapshot carries real state.
fn mid_run_game(seed: u64) -> Game {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut game = Game::new(Player::new("Tester"));
    game.player.stats.modify_attack(2000);
    game.player.stats.modify_max_health(500);
    game.player.stats.modify_current_health(500);

    game.take_potion(0).unwrap();
    game.take_weapon().unwrap();
    for _ in 0..6 {
        if !game.playing {
            break;
        }
        if game.current_room().unwrap().monster.is_some() {
            game.fight(&mut rng, |_| {}).unwrap();
        } else if !game.current_room().unwrap().is_boss {
            game.advance(&mut rng).unwrap();
        }
    }
    game
}

#[test]
fn test_mid_run_snapshot_roundtrip() {
    let game = mid_run_game(5);
    let manager = SaveManager::with_path(temp_save_path());

    manager.save(&game.to_snapshot()).unwrap();
    let restored = Game::from_snapshot(manager.load().unwrap()).unwrap();

    assert_eq!(restored.player, game.player);
    assert_eq!(restored.current, game.current);
    assert_eq!(restored.map.room_count(), game.map.room_count());

    // Room contents survive: compare derived descriptions room by room.
    for index in 0..game.map.room_count() {
        assert_eq!(
            restored.map.room(index).unwrap().describe(),
            game.map.room(index).unwrap().describe()
        );
        assert_eq!(
            restored.map.room(index).unwrap().is_boss,
            game.map.room(index).unwrap().is_boss
        );
    }
}

#[test]
fn test_loaded_game_is_playable() {
    let game = mid_run_game(8);
    let manager = SaveManager::with_path(temp_save_path());
    manager.save(&game.to_snapshot()).unwrap();

    let mut restored = Game::from_snapshot(manager.load().unwrap()).unwrap();
    assert!(restored.playing);

    // The restored game accepts further play.
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    if restored.current_room().unwrap().monster.is_some() {
        restored.fight(&mut rng, |_| {}).unwrap();
    }
    if !restored.current_room().unwrap().is_boss {
        restored.advance(&mut rng).unwrap();
    }
    assert!(restored.map.room_count() >= game.map.room_count());
}

#[test]
fn test_saving_twice_overwrites_cleanly() {
    let manager = SaveManager::with_path(temp_save_path());

    let early = mid_run_game(1);
    manager.save(&early.to_snapshot()).unwrap();

    let later = mid_run_game(2);
    manager.save(&later.to_snapshot()).unwrap();

    let restored = manager.load().unwrap();
    assert_eq!(restored.player, later.player);
    assert_eq!(restored.map.room_count(), later.map.room_count());
}

#[test]
fn test_tampered_save_is_detected() {
    let path = temp_save_path();
    let manager = SaveManager::with_path(path.clone());
    let game = mid_run_game(3);
    manager.save(&game.to_snapshot()).unwrap();

    // Flip one payload byte; the stored checksum must catch it.
    let mut bytes = fs::read(&path).unwrap();
    let middle = bytes.len() / 2;
    bytes[middle] ^= 0x01;
    fs::write(&path, &bytes).unwrap();

    assert!(matches!(manager.load(), Err(SaveError::ChecksumMismatch)));
}
