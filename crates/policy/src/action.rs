use std::fmt;

/// What to do with the data of an entry present on both sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DataAction {
    /// Keep the in-place data.
    Preserve,
    /// Replace it with the data being added.
    Overwrite,
    /// Keep the in-place data and mark it as already saved.
    PreserveMarkAlreadySaved,
    /// Take the data being added and mark it as already saved.
    OverwriteMarkAlreadySaved,
    /// Remove the in-place entry.
    Remove,
    /// Defer the decision to the user.
    Ask,
}

impl DataAction {
    /// Every data action.
    pub const ALL: [Self; 6] = [
        Self::Preserve,
        Self::Overwrite,
        Self::PreserveMarkAlreadySaved,
        Self::OverwriteMarkAlreadySaved,
        Self::Remove,
        Self::Ask,
    ];

    /// Letter used in textual policies.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Preserve => 'P',
            Self::Overwrite => 'O',
            Self::PreserveMarkAlreadySaved => 'S',
            Self::OverwriteMarkAlreadySaved => 'T',
            Self::Remove => 'R',
            Self::Ask => 'A',
        }
    }

    /// Parses a policy letter. `Some(None)` is the undefined letter `*`.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Option<Self>> {
        Some(Some(match letter {
            'P' => Self::Preserve,
            'O' => Self::Overwrite,
            'S' => Self::PreserveMarkAlreadySaved,
            'T' => Self::OverwriteMarkAlreadySaved,
            'R' => Self::Remove,
            'A' => Self::Ask,
            '*' => return Some(None),
            _ => return None,
        }))
    }
}

/// What to do with the extended and filesystem attributes of an entry
/// present on both sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AttrAction {
    /// Keep the in-place attributes.
    Preserve,
    /// Replace them with the attributes being added.
    Overwrite,
    /// Drop the attributes.
    Clear,
    /// Keep the in-place attributes and mark them as already saved.
    PreserveMarkAlreadySaved,
    /// Take the attributes being added and mark them as already saved.
    OverwriteMarkAlreadySaved,
    /// Union of both sets; the in-place value wins on conflicts.
    MergePreserve,
    /// Union of both sets; the added value wins on conflicts.
    MergeOverwrite,
    /// Defer the decision to the user.
    Ask,
}

impl AttrAction {
    /// Every attribute action.
    pub const ALL: [Self; 8] = [
        Self::Preserve,
        Self::Overwrite,
        Self::Clear,
        Self::PreserveMarkAlreadySaved,
        Self::OverwriteMarkAlreadySaved,
        Self::MergePreserve,
        Self::MergeOverwrite,
        Self::Ask,
    ];

    /// Letter used in textual policies.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Preserve => 'p',
            Self::Overwrite => 'o',
            Self::Clear => 'r',
            Self::PreserveMarkAlreadySaved => 's',
            Self::OverwriteMarkAlreadySaved => 't',
            Self::MergePreserve => 'm',
            Self::MergeOverwrite => 'n',
            Self::Ask => 'a',
        }
    }

    /// Parses a policy letter. `Some(None)` is the undefined letter `*`.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Option<Self>> {
        Some(Some(match letter {
            'p' => Self::Preserve,
            'o' => Self::Overwrite,
            'r' => Self::Clear,
            's' => Self::PreserveMarkAlreadySaved,
            't' => Self::OverwriteMarkAlreadySaved,
            'm' => Self::MergePreserve,
            'n' => Self::MergeOverwrite,
            'a' => Self::Ask,
            '*' => return Some(None),
            _ => return None,
        }))
    }
}

/// Result of evaluating an [`Action`](crate::Action): each axis is either
/// decided or still undefined (`None`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    /// Data axis.
    pub data: Option<DataAction>,
    /// Attribute axis.
    pub attrs: Option<AttrAction>,
}

impl Outcome {
    /// Both axes undefined.
    pub const UNDEFINED: Self = Self {
        data: None,
        attrs: None,
    };

    /// Both axes decided.
    #[must_use]
    pub const fn new(data: DataAction, attrs: AttrAction) -> Self {
        Self {
            data: Some(data),
            attrs: Some(attrs),
        }
    }

    /// True once both axes are decided.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.data.is_some() && self.attrs.is_some()
    }

    /// Fills each axis still undefined from `later`, leaving decided axes as
    /// they are.
    pub fn fill_from(&mut self, later: Self) {
        if self.data.is_none() {
            self.data = later.data;
        }
        if self.attrs.is_none() {
            self.attrs = later.attrs;
        }
    }

    /// Replaces undefined axes with `defaults`.
    #[must_use]
    pub fn or_defaults(self, defaults: Resolution) -> Resolution {
        Resolution {
            data: self.data.unwrap_or(defaults.data),
            attrs: self.attrs.unwrap_or(defaults.attrs),
        }
    }
}

impl fmt::Display for Outcome {
    /// Two policy letters, `*` for undefined axes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data.map_or('*', DataAction::letter);
        let attrs = self.attrs.map_or('*', AttrAction::letter);
        write!(f, "{data}{attrs}")
    }
}

/// Fully decided pair of actions handed back to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    /// Data action.
    pub data: DataAction,
    /// Attribute action.
    pub attrs: AttrAction,
}

impl Resolution {
    /// Applied to axes a policy leaves undefined: keep what is in place.
    pub const DEFAULT: Self = Self {
        data: DataAction::Preserve,
        attrs: AttrAction::Preserve,
    };

    /// Pair of decided actions.
    #[must_use]
    pub const fn new(data: DataAction, attrs: AttrAction) -> Self {
        Self { data, attrs }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<Resolution> for Outcome {
    fn from(resolution: Resolution) -> Self {
        Self::new(resolution.data, resolution.attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_round_trip() {
        for action in DataAction::ALL {
            assert_eq!(DataAction::from_letter(action.letter()), Some(Some(action)));
        }
        for action in AttrAction::ALL {
            assert_eq!(AttrAction::from_letter(action.letter()), Some(Some(action)));
        }
        assert_eq!(DataAction::from_letter('*'), Some(None));
        assert_eq!(AttrAction::from_letter('*'), Some(None));
        assert_eq!(DataAction::from_letter('p'), None);
        assert_eq!(AttrAction::from_letter('P'), None);
    }

    #[test]
    fn fill_from_keeps_decided_axes() {
        let mut outcome = Outcome {
            data: Some(DataAction::Overwrite),
            attrs: None,
        };
        outcome.fill_from(Outcome::new(DataAction::Remove, AttrAction::Clear));
        assert_eq!(outcome, Outcome::new(DataAction::Overwrite, AttrAction::Clear));
    }

    #[test]
    fn defaults_apply_only_to_undefined_axes() {
        let outcome = Outcome {
            data: None,
            attrs: Some(AttrAction::MergeOverwrite),
        };
        assert_eq!(
            outcome.or_defaults(Resolution::DEFAULT),
            Resolution::new(DataAction::Preserve, AttrAction::MergeOverwrite)
        );
    }

    #[test]
    fn display_uses_policy_letters() {
        assert_eq!(Outcome::UNDEFINED.to_string(), "**");
        assert_eq!(
            Outcome::new(DataAction::OverwriteMarkAlreadySaved, AttrAction::Clear).to_string(),
            "Tr"
        );
    }
}
