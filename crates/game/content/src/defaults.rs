//! Built-in content used when no data directory is configured.

use game_core::{Catalog, Target, Weapon};

/// Built-in weapons as `(id, hit probability)`.
pub const STANDARD_WEAPONS: [(&str, f64); 2] = [("rifle", 0.8), ("shotgun", 0.5)];

/// The classic two-gun, two-animal gallery.
///
/// | weapon  | hit probability |   | target | points |
/// |---------|-----------------|---|--------|--------|
/// | rifle   | 0.8             |   | deer   | 10     |
/// | shotgun | 0.5             |   | bear   | 20     |
pub fn standard_catalog() -> Catalog {
    let weapons = STANDARD_WEAPONS
        .iter()
        .map(|&(id, p)| {
            Weapon::new(id, p).expect("built-in weapon table holds valid probabilities")
        })
        .collect();

    let targets = vec![
        Target::new("deer", 10).with_appearance("The deer looks around cautiously."),
        Target::new("bear", 20).with_appearance("The bear growls menacingly."),
    ];

    Catalog::new(weapons, targets)
}
