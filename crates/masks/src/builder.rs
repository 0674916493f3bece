use crate::mask::Mask;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Combinator {
    All,
    Any,
}

/// Incrementally assembles an `And` or `Or` mask.
///
/// Children are appended while the builder is open; [`build`](Self::build)
/// freezes the composite for evaluation.
///
/// # Examples
///
/// ```
/// use masks::{Mask, MaskBuilder};
///
/// let mut builder = MaskBuilder::any();
/// builder.add_mask(Mask::glob("*.c", true)?);
/// builder.add_mask(Mask::glob("*.h", true)?);
/// let sources = builder.build();
/// assert!(sources.evaluate("main.c"));
/// assert!(!sources.evaluate("main.o"));
/// # Ok::<(), masks::MaskError>(())
/// ```
#[derive(Clone, Debug)]
pub struct MaskBuilder {
    combinator: Combinator,
    children: Vec<Mask>,
}

impl MaskBuilder {
    /// Starts a conjunction.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            combinator: Combinator::All,
            children: Vec::new(),
        }
    }

    /// Starts a disjunction.
    #[must_use]
    pub const fn any() -> Self {
        Self {
            combinator: Combinator::Any,
            children: Vec::new(),
        }
    }

    /// Appends a child.
    pub fn add_mask(&mut self, mask: Mask) -> &mut Self {
        self.children.push(mask);
        self
    }

    /// Appends a child, consuming and returning the builder.
    #[must_use]
    pub fn with_mask(mut self, mask: Mask) -> Self {
        self.children.push(mask);
        self
    }

    /// Number of children added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether no child was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Freezes the composite.
    ///
    /// A single child is returned as is, since wrapping it changes nothing.
    #[must_use]
    pub fn build(mut self) -> Mask {
        if self.children.len() == 1 {
            if let Some(only) = self.children.pop() {
                return only;
            }
        }
        match self.combinator {
            Combinator::All => Mask::And(self.children),
            Combinator::Any => Mask::Or(self.children),
        }
    }
}

impl Extend<Mask> for MaskBuilder {
    fn extend<T: IntoIterator<Item = Mask>>(&mut self, iter: T) {
        self.children.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builders_keep_vacuous_semantics() {
        assert!(MaskBuilder::all().build().evaluate("x"));
        assert!(!MaskBuilder::any().build().evaluate("x"));
    }

    #[test]
    fn single_child_is_unwrapped() {
        let mask = MaskBuilder::all().with_mask(Mask::NEVER).build();
        assert!(matches!(mask, Mask::Constant(false)));
    }

    #[test]
    fn children_accumulate_in_order() {
        let mut builder = MaskBuilder::all();
        builder
            .add_mask(Mask::subtree_of("/home", true))
            .add_mask(!Mask::subtree_of("/home/cache", true));
        builder.extend([Mask::ALWAYS]);
        assert_eq!(builder.len(), 3);
        let mask = builder.build();
        assert!(mask.evaluate("/home/user"));
        assert!(!mask.evaluate("/home/cache/blob"));
    }
}
