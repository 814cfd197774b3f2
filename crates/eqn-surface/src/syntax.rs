use derive_new::new;
use log::debug;
use std::collections::hash_map::{self, HashMap};
use std::fmt;

/// A single summand of an expression.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub enum Term {
    Literal(u64),
    Reference(String),
}

impl Term {
    pub fn literal(value: u64) -> Term {
        Term::Literal(value)
    }

    pub fn reference(name: impl Into<String>) -> Term {
        Term::Reference(name.into())
    }

    /// The referenced variable, if this term is a reference.
    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Term::Literal(_) => None,
            Term::Reference(name) => Some(name),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Term::Literal(value) => write!(f, "{value}"),
            Term::Reference(name) => write!(f, "{name}"),
        }
    }
}

/// The right-hand side of a definition. Its value is the sum of its terms;
/// an expression with no terms is worth zero.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Default, new)]
pub struct Expression {
    pub terms: Vec<Term>,
}

impl Expression {
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The names referenced by this expression, in order, with repeats.
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().filter_map(Term::as_reference)
    }
}

impl FromIterator<Term> for Expression {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Expression::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for term in &self.terms {
            if !first {
                write!(f, " + ")?;
            }
            write!(f, "{term}")?;
            first = false;
        }
        Ok(())
    }
}

/// One parsed line: `name = expression`.
#[derive(Clone, Eq, PartialEq, Debug, Hash, new)]
pub struct Definition {
    pub name: String,
    pub expression: Expression,
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.expression.is_empty() {
            write!(f, "{} =", self.name)
        } else {
            write!(f, "{} = {}", self.name, self.expression)
        }
    }
}

/// The definition table. Order is irrelevant; a later definition of a name
/// replaces the earlier one.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Definitions {
    table: HashMap<String, Expression>,
}

impl Definitions {
    pub fn new() -> Definitions {
        Definitions::default()
    }

    /// Insert a definition, returning the expression it replaced.
    pub fn insert(&mut self, definition: Definition) -> Option<Expression> {
        let Definition { name, expression } = definition;
        if let Some(previous) = self.table.get(&name) {
            debug!("`{name}` redefined, replacing `{previous}`");
        }
        self.table.insert(name, expression)
    }

    pub fn get(&self, name: &str) -> Option<&Expression> {
        self.table.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Iterate the definitions in no particular order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, Expression> {
        self.table.iter()
    }
}

impl FromIterator<Definition> for Definitions {
    fn from_iter<I: IntoIterator<Item = Definition>>(iter: I) -> Self {
        let mut definitions = Definitions::new();
        for definition in iter {
            definitions.insert(definition);
        }
        definitions
    }
}

impl<'a> IntoIterator for &'a Definitions {
    type Item = (&'a String, &'a Expression);
    type IntoIter = hash_map::Iter<'a, String, Expression>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
