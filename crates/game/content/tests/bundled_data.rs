use std::path::PathBuf;

use game_content::{ContentFactory, standard_catalog};
use game_core::{GameConfig, GameSession};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data")
}

#[test]
fn bundled_catalog_matches_builtin() {
    let factory = ContentFactory::new(data_dir());
    let catalog = factory.load_catalog().unwrap();
    assert_eq!(catalog, standard_catalog());
}

#[test]
fn bundled_config_leaves_seed_unset() {
    let factory = ContentFactory::new(data_dir());
    assert_eq!(factory.load_config().unwrap(), GameConfig::default());
}

#[test]
fn loaded_catalog_drives_a_session() {
    let catalog = ContentFactory::new(data_dir()).load_catalog().unwrap();
    let mut session = GameSession::seeded(catalog, 5);

    session.start().unwrap();
    session.select_weapon(1).unwrap();
    for _ in 0..20 {
        session.perform_shot().unwrap();
    }
    let snapshot = session.end_session().unwrap();

    assert_eq!(snapshot.shots_fired, 20);
    assert!(snapshot.history.iter().all(|&p| p == 10 || p == 20));
    assert_eq!(
        snapshot.final_score,
        snapshot.history.iter().map(|&p| u64::from(p)).sum::<u64>()
    );
}
