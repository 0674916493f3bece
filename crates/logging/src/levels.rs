//! Diagnostic categories and their per-category levels.

/// Tracing target for mask construction and evaluation.
pub const MASK_TARGET: &str = "dar::mask";
/// Tracing target for overwrite policy evaluation.
pub const POLICY_TARGET: &str = "dar::policy";
/// Tracing target for classification and listing.
pub const CATALOGUE_TARGET: &str = "dar::catalogue";
/// Tracing target for statistics updates.
pub const STATS_TARGET: &str = "dar::stats";

/// Highest meaningful level: everything down to trace events.
pub const MAX_LEVEL: u8 = 3;

/// Diagnostic categories of the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// Path and name selection.
    Mask,
    /// Conflict resolution between in-place and to-be-added entries.
    Policy,
    /// Entry classification and catalogue listing.
    Catalogue,
    /// Counter updates and snapshots.
    Stats,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 4] = [Self::Mask, Self::Policy, Self::Catalogue, Self::Stats];

    /// Tracing target used by events of this category.
    #[must_use]
    pub const fn target(self) -> &'static str {
        match self {
            Self::Mask => MASK_TARGET,
            Self::Policy => POLICY_TARGET,
            Self::Catalogue => CATALOGUE_TARGET,
            Self::Stats => STATS_TARGET,
        }
    }

    /// Short name used in flag tokens such as `policy2`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mask => "mask",
            Self::Policy => "policy",
            Self::Catalogue => "catalogue",
            Self::Stats => "stats",
        }
    }

    /// Looks a category up by its short name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.name() == name)
    }
}

/// Level of each category, `0` meaning silent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CategoryLevels {
    /// Level for [`Category::Mask`].
    pub mask: u8,
    /// Level for [`Category::Policy`].
    pub policy: u8,
    /// Level for [`Category::Catalogue`].
    pub catalogue: u8,
    /// Level for [`Category::Stats`].
    pub stats: u8,
}

impl CategoryLevels {
    /// Returns the level of `category`.
    #[must_use]
    pub const fn get(&self, category: Category) -> u8 {
        match category {
            Category::Mask => self.mask,
            Category::Policy => self.policy,
            Category::Catalogue => self.catalogue,
            Category::Stats => self.stats,
        }
    }

    /// Sets the level of `category`, clamped to [`MAX_LEVEL`].
    pub fn set(&mut self, category: Category, level: u8) {
        let level = level.min(MAX_LEVEL);
        match category {
            Category::Mask => self.mask = level,
            Category::Policy => self.policy = level,
            Category::Catalogue => self.catalogue = level,
            Category::Stats => self.stats = level,
        }
    }

    /// Sets every category to `level`.
    pub fn set_all(&mut self, level: u8) {
        for category in Category::ALL {
            self.set(category, level);
        }
    }
}
