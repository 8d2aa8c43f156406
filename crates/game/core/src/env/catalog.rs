use super::{Target, Weapon};

/// Static weapon and target catalogs for one session.
///
/// The catalog is fixed at construction; the engine only ever reads from it.
/// Weapons are referenced by index once equipped, and targets are selected by
/// index when spawned.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    weapons: Vec<Weapon>,
    targets: Vec<Target>,
}

impl Catalog {
    pub fn new(weapons: Vec<Weapon>, targets: Vec<Target>) -> Self {
        Self { weapons, targets }
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn weapon(&self, index: usize) -> Option<&Weapon> {
        self.weapons.get(index)
    }

    pub fn target(&self, index: usize) -> Option<&Target> {
        self.targets.get(index)
    }

    pub fn weapon_count(&self) -> usize {
        self.weapons.len()
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }
}
