//! Storage predicates built from resource filters.
//!
//! A [`Predicate`] is the opaque condition handed to a
//! [`RecordStore`](crate::traits::RecordStore). Repositories compose the
//! resource-specific predicate with the soft-delete visibility rule via
//! [`Predicate::and`].

use serde::{Deserialize, Serialize};

use super::filter::FilterField;

/// A boolean condition over the columns of one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum Predicate {
    /// Matches every row.
    #[default]
    All,
    /// A single column condition.
    Condition(FilterField),
    /// All inner predicates must hold.
    And(Vec<Predicate>),
    /// At least one inner predicate must hold.
    Or(Vec<Predicate>),
}

impl Predicate {
    /// Conjunction, flattening nested `And`s and dropping `All`.
    pub fn and(self, other: impl Into<Predicate>) -> Self {
        match (self, other.into()) {
            (Self::All, p) | (p, Self::All) => p,
            (Self::And(mut left), Self::And(right)) => {
                left.extend(right);
                Self::And(left)
            }
            (Self::And(mut left), p) => {
                left.push(p);
                Self::And(left)
            }
            (p, Self::And(mut right)) => {
                right.insert(0, p);
                Self::And(right)
            }
            (a, b) => Self::And(vec![a, b]),
        }
    }

    /// Disjunction of the given predicates.
    ///
    /// An empty list imposes no constraint and yields [`Predicate::All`].
    pub fn any_of(predicates: impl IntoIterator<Item = impl Into<Predicate>>) -> Self {
        let mut items: Vec<Predicate> = predicates.into_iter().map(Into::into).collect();
        match items.len() {
            0 => Self::All,
            1 => items.remove(0),
            _ => Self::Or(items),
        }
    }

    /// Whether this predicate matches every row.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl From<FilterField> for Predicate {
    fn from(field: FilterField) -> Self {
        Self::Condition(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_drops_all() {
        let p = Predicate::All.and(FilterField::eq("city", "Lisbon"));
        assert_eq!(p, Predicate::Condition(FilterField::eq("city", "Lisbon")));
        assert!(Predicate::All.and(Predicate::All).is_all());
    }

    #[test]
    fn test_and_flattens() {
        let p = Predicate::All
            .and(FilterField::eq("a", 1i64))
            .and(FilterField::eq("b", 2i64))
            .and(FilterField::is_null("deleted_at"));
        match p {
            Predicate::And(items) => assert_eq!(items.len(), 3),
            other => panic!("expected And, got {other:?}"),
        }
    }

    #[test]
    fn test_any_of_collapses() {
        assert!(Predicate::any_of(Vec::<FilterField>::new()).is_all());
        let single = Predicate::any_of(vec![FilterField::eq("a", 1i64)]);
        assert!(matches!(single, Predicate::Condition(_)));
        let many = Predicate::any_of(vec![FilterField::eq("a", 1i64), FilterField::eq("b", 2i64)]);
        assert!(matches!(many, Predicate::Or(ref v) if v.len() == 2));
    }
}
