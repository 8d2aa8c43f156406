//! Target definitions.

/// Stable identifier for a target in the catalog (e.g. `"deer"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TargetId(pub String);

impl TargetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for TargetId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Points awarded for a single hit.
pub type Points = u32;

/// Something that can appear in the gallery and be shot.
///
/// `appearance` is an optional flavour line the front end may show when the
/// target is spawned; it has no effect on scoring.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    id: TargetId,
    point_value: Points,
    #[cfg_attr(feature = "serde", serde(default))]
    appearance: Option<String>,
}

impl Target {
    pub fn new(id: impl Into<String>, point_value: Points) -> Self {
        Self {
            id: TargetId::new(id),
            point_value,
            appearance: None,
        }
    }

    /// Attaches a flavour line (builder pattern).
    #[must_use]
    pub fn with_appearance(mut self, appearance: impl Into<String>) -> Self {
        self.appearance = Some(appearance.into());
        self
    }

    pub fn id(&self) -> &TargetId {
        &self.id
    }

    pub fn point_value(&self) -> Points {
        self.point_value
    }

    pub fn appearance(&self) -> Option<&str> {
        self.appearance.as_deref()
    }

    /// Points this target yields when hit.
    pub fn resolve_hit(&self) -> Points {
        self.point_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_hit_returns_point_value() {
        assert_eq!(Target::new("deer", 10).resolve_hit(), 10);
        assert_eq!(Target::new("bear", 20).resolve_hit(), 20);
    }

    #[test]
    fn appearance_is_optional() {
        let deer = Target::new("deer", 10);
        assert_eq!(deer.appearance(), None);

        let bear = Target::new("bear", 20).with_appearance("The bear growls menacingly.");
        assert_eq!(bear.appearance(), Some("The bear growls menacingly."));
        assert_eq!(bear.id().as_str(), "bear");
    }
}
