use catalogue::EntryDescriptor;

use crate::action::{AttrAction, DataAction, Outcome, Resolution};
use crate::criterion::Criterion;
use crate::debug_policy::trace_resolution;

/// Overwriting policy: decides, for one conflicting pair, what happens to
/// the data and to the attributes.
#[derive(Clone, Debug)]
pub enum Action {
    /// Always the same outcome. Either axis may be undefined.
    Constant(Outcome),
    /// Evaluates a criterion and delegates to one branch.
    Conditional {
        /// Condition.
        criterion: Criterion,
        /// Policy used when the condition holds.
        go_true: Box<Action>,
        /// Policy used otherwise.
        go_false: Box<Action>,
    },
    /// Evaluates members in order; each axis takes the first defined value.
    Chain(Vec<Action>),
}

impl Action {
    /// Constant policy deciding both axes.
    #[must_use]
    pub const fn constant(data: DataAction, attrs: AttrAction) -> Self {
        Self::Constant(Outcome::new(data, attrs))
    }

    /// Constant policy leaving both axes undefined.
    #[must_use]
    pub const fn undefined() -> Self {
        Self::Constant(Outcome::UNDEFINED)
    }

    /// Conditional policy.
    #[must_use]
    pub fn conditional(criterion: Criterion, go_true: Self, go_false: Self) -> Self {
        Self::Conditional {
            criterion,
            go_true: Box::new(go_true),
            go_false: Box::new(go_false),
        }
    }

    /// Chain of policies.
    #[must_use]
    pub fn chain(members: impl IntoIterator<Item = Self>) -> Self {
        Self::Chain(members.into_iter().collect())
    }

    /// Evaluates the policy; axes may stay undefined.
    ///
    /// A chain stops scanning once both axes are defined. An empty chain
    /// leaves both undefined.
    #[must_use]
    pub fn evaluate(&self, in_place: &EntryDescriptor, to_be_added: &EntryDescriptor) -> Outcome {
        match self {
            Self::Constant(outcome) => *outcome,
            Self::Conditional {
                criterion,
                go_true,
                go_false,
            } => {
                if criterion.evaluate(in_place, to_be_added) {
                    go_true.evaluate(in_place, to_be_added)
                } else {
                    go_false.evaluate(in_place, to_be_added)
                }
            }
            Self::Chain(members) => {
                let mut outcome = Outcome::UNDEFINED;
                for member in members {
                    if outcome.is_complete() {
                        break;
                    }
                    outcome.fill_from(member.evaluate(in_place, to_be_added));
                }
                outcome
            }
        }
    }

    /// Evaluates the policy and completes undefined axes with
    /// [`Resolution::DEFAULT`] (preserve data, preserve attributes).
    ///
    /// # Examples
    ///
    /// ```
    /// use catalogue::{EntryDescriptor, EntryVariant};
    /// use policy::{Action, DataAction, AttrAction, Resolution};
    ///
    /// let a = EntryDescriptor::new("a", EntryVariant::PlainFile);
    /// assert_eq!(Action::chain([]).resolve(&a, &a), Resolution::DEFAULT);
    /// assert_eq!(
    ///     Action::constant(DataAction::Overwrite, AttrAction::Clear).resolve(&a, &a),
    ///     Resolution::new(DataAction::Overwrite, AttrAction::Clear),
    /// );
    /// ```
    #[must_use]
    pub fn resolve(&self, in_place: &EntryDescriptor, to_be_added: &EntryDescriptor) -> Resolution {
        self.resolve_with(in_place, to_be_added, Resolution::DEFAULT)
    }

    /// Evaluates the policy and completes undefined axes with `defaults`.
    #[must_use]
    pub fn resolve_with(
        &self,
        in_place: &EntryDescriptor,
        to_be_added: &EntryDescriptor,
        defaults: Resolution,
    ) -> Resolution {
        let outcome = self.evaluate(in_place, to_be_added);
        let resolved = outcome.or_defaults(defaults);
        trace_resolution(
            in_place.name(),
            &outcome.to_string(),
            &Outcome::from(resolved).to_string(),
        );
        resolved
    }
}

impl Default for Action {
    /// Empty chain: every axis undefined.
    fn default() -> Self {
        Self::Chain(Vec::new())
    }
}

impl From<Outcome> for Action {
    fn from(outcome: Outcome) -> Self {
        Self::Constant(outcome)
    }
}

/// Incremental constructor for [`Action::Chain`].
///
/// # Examples
///
/// ```
/// use policy::{Action, AttrAction, ChainBuilder, DataAction};
///
/// let mut builder = ChainBuilder::new();
/// builder
///     .add(Action::undefined())
///     .add(Action::constant(DataAction::Overwrite, AttrAction::Preserve));
/// assert_eq!(builder.len(), 2);
/// let chain = builder.build();
/// assert!(matches!(chain, Action::Chain(ref members) if members.len() == 2));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ChainBuilder {
    members: Vec<Action>,
}

impl ChainBuilder {
    /// Empty chain.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Appends one member.
    pub fn add(&mut self, action: Action) -> &mut Self {
        self.members.push(action);
        self
    }

    /// Appends `action`; a chain is spliced member by member instead of
    /// nested.
    pub fn gobe(&mut self, action: Action) -> &mut Self {
        match action {
            Action::Chain(members) => self.members.extend(members),
            other => self.members.push(other),
        }
        self
    }

    /// Number of members so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when no member was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Freezes the chain.
    #[must_use]
    pub fn build(self) -> Action {
        Action::Chain(self.members)
    }
}

impl Extend<Action> for ChainBuilder {
    fn extend<I: IntoIterator<Item = Action>>(&mut self, iter: I) {
        self.members.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use catalogue::EntryVariant;

    use super::*;

    fn entry() -> EntryDescriptor {
        EntryDescriptor::new("a", EntryVariant::PlainFile)
    }

    #[test]
    fn undefined_then_constant_fills_both_axes() {
        let chain = Action::chain([
            Action::undefined(),
            Action::constant(DataAction::Overwrite, AttrAction::Preserve),
        ]);
        assert_eq!(
            chain.evaluate(&entry(), &entry()),
            Outcome::new(DataAction::Overwrite, AttrAction::Preserve)
        );
    }

    #[test]
    fn axes_are_filled_independently() {
        let chain = Action::chain([
            Action::Constant(Outcome {
                data: Some(DataAction::Remove),
                attrs: None,
            }),
            Action::Constant(Outcome {
                data: None,
                attrs: None,
            }),
            Action::constant(DataAction::Overwrite, AttrAction::MergePreserve),
        ]);
        assert_eq!(
            chain.evaluate(&entry(), &entry()),
            Outcome::new(DataAction::Remove, AttrAction::MergePreserve)
        );
    }

    #[test]
    fn defined_axis_is_not_overwritten_by_later_members() {
        let chain = Action::chain([
            Action::Constant(Outcome {
                data: Some(DataAction::Overwrite),
                attrs: None,
            }),
            Action::constant(DataAction::Preserve, AttrAction::Overwrite),
        ]);
        assert_eq!(
            chain.evaluate(&entry(), &entry()),
            Outcome::new(DataAction::Overwrite, AttrAction::Overwrite)
        );
    }

    #[test]
    fn empty_chain_is_fully_undefined() {
        assert_eq!(Action::default().evaluate(&entry(), &entry()), Outcome::UNDEFINED);
        assert_eq!(Action::default().resolve(&entry(), &entry()), Resolution::DEFAULT);
    }

    #[test]
    fn resolve_with_custom_defaults() {
        let defaults = Resolution::new(DataAction::Ask, AttrAction::Ask);
        let action = Action::Constant(Outcome {
            data: Some(DataAction::Overwrite),
            attrs: None,
        });
        assert_eq!(
            action.resolve_with(&entry(), &entry(), defaults),
            Resolution::new(DataAction::Overwrite, AttrAction::Ask)
        );
    }

    #[test]
    fn conditional_branches_may_stay_undefined() {
        let action = Action::conditional(
            Criterion::IsDirectory,
            Action::constant(DataAction::Overwrite, AttrAction::Overwrite),
            Action::undefined(),
        );
        assert_eq!(action.evaluate(&entry(), &entry()), Outcome::UNDEFINED);
        let dir = EntryDescriptor::new("d", EntryVariant::Directory);
        assert_eq!(
            action.evaluate(&dir, &entry()),
            Outcome::new(DataAction::Overwrite, AttrAction::Overwrite)
        );
    }

    #[test]
    fn gobe_splices_chains() {
        let mut builder = ChainBuilder::new();
        builder.add(Action::undefined());
        builder.gobe(Action::chain([Action::undefined(), Action::undefined()]));
        builder.gobe(Action::undefined());
        assert_eq!(builder.len(), 4);
        assert!(!builder.is_empty());
    }
}
