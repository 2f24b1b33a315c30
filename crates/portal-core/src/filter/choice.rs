/// Value of a categorical filter: either the `ANY` sentinel or one member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice<T> {
    /// Matches everything.
    Any,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::Any
    }
}

impl<T: PartialEq> Choice<T> {
    /// Whether an entity attribute passes this filter.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Choice::Any => true,
            Choice::Only(expected) => expected == value,
        }
    }
}

impl<T> Choice<T> {
    pub fn is_any(&self) -> bool {
        matches!(self, Choice::Any)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Choice::Any => None,
            Choice::Only(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Choice<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Choice::Only(value),
            None => Choice::Any,
        }
    }
}
