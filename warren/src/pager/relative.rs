use crate::error::WarrenError;
use crate::model::link::{Link, Links};
use crate::WarrenResult;
use itertools::Itertools;
use log::warn;
use std::fmt;
use std::iter::FromIterator;
use std::str::FromStr;

/// Navigational position inside a paginated collection
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PagerRelation {
    First,
    Prev,
    Next,
    Last,
}

impl PagerRelation {
    /// Traversal order of every pager
    pub const ALL: [PagerRelation; 4] =
        [PagerRelation::First, PagerRelation::Prev, PagerRelation::Next, PagerRelation::Last];

    /// Key of the relation inside a JSON:API `links` object. `Prev` is `"prev"` here;
    /// use [`PagerRelation::long_name`] for the spelled-out `"previous"`.
    pub fn as_str(self) -> &'static str {
        match self {
            PagerRelation::First => "first",
            PagerRelation::Prev => "prev",
            PagerRelation::Next => "next",
            PagerRelation::Last => "last",
        }
    }

    /// Spelled-out name: `first`, `previous`, `next`, `last`
    pub fn long_name(self) -> &'static str { self.alias().unwrap_or_else(|| self.as_str()) }

    fn alias(self) -> Option<&'static str> {
        match self {
            PagerRelation::Prev => Some("previous"),
            _ => None,
        }
    }
}

impl fmt::Display for PagerRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for PagerRelation {
    type Err = WarrenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PagerRelation::ALL
            .iter()
            .copied()
            .find(|rel| rel.as_str() == s || rel.alias() == Some(s))
            .ok_or_else(|| WarrenError::UnknownRelation(s.into()))
    }
}

/// One optional value per pager relation
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RelativePages<T> {
    pub first: Option<T>,
    pub prev: Option<T>,
    pub next: Option<T>,
    pub last: Option<T>,
}

impl<T> Default for RelativePages<T> {
    fn default() -> Self { Self { first: None, prev: None, next: None, last: None } }
}

impl<T> RelativePages<T> {
    pub fn get(&self, relation: PagerRelation) -> Option<&T> {
        match relation {
            PagerRelation::First => self.first.as_ref(),
            PagerRelation::Prev => self.prev.as_ref(),
            PagerRelation::Next => self.next.as_ref(),
            PagerRelation::Last => self.last.as_ref(),
        }
    }

    fn slot_mut(&mut self, relation: PagerRelation) -> &mut Option<T> {
        match relation {
            PagerRelation::First => &mut self.first,
            PagerRelation::Prev => &mut self.prev,
            PagerRelation::Next => &mut self.next,
            PagerRelation::Last => &mut self.last,
        }
    }

    /// Returns the previous value of the slot, if any
    pub fn insert(&mut self, relation: PagerRelation, value: T) -> Option<T> {
        self.slot_mut(relation).replace(value)
    }

    pub fn remove(&mut self, relation: PagerRelation) -> Option<T> { self.slot_mut(relation).take() }

    /// Present entries in `first`, `prev`, `next`, `last` order
    pub fn iter(&self) -> impl Iterator<Item = (PagerRelation, &T)> + '_ {
        let order: &'static [PagerRelation; 4] = &PagerRelation::ALL;
        order.iter().filter_map(move |&rel| self.get(rel).map(|v| (rel, v)))
    }

    pub fn relations(&self) -> Vec<PagerRelation> { self.iter().map(|(rel, _)| rel).collect() }

    pub fn len(&self) -> usize { self.iter().count() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Maps every present entry, stopping at the first failure
    pub fn try_map<U, E, F>(&self, mut f: F) -> Result<RelativePages<U>, E>
    where
        F: FnMut(PagerRelation, &T) -> Result<U, E>,
    {
        let mut mapped = RelativePages::default();
        for (rel, value) in self.iter() {
            mapped.insert(rel, f(rel, value)?);
        }
        Ok(mapped)
    }
}

impl<T> FromIterator<(PagerRelation, T)> for RelativePages<T> {
    fn from_iter<I: IntoIterator<Item = (PagerRelation, T)>>(iter: I) -> Self {
        let mut pages = RelativePages::default();
        for (rel, value) in iter {
            pages.insert(rel, value);
        }
        pages
    }
}

impl<T> IntoIterator for RelativePages<T> {
    type IntoIter = std::vec::IntoIter<(PagerRelation, T)>;
    type Item = (PagerRelation, T);

    fn into_iter(self) -> Self::IntoIter {
        let RelativePages { first, prev, next, last } = self;
        vec![
            (PagerRelation::First, first),
            (PagerRelation::Prev, prev),
            (PagerRelation::Next, next),
            (PagerRelation::Last, last),
        ]
        .into_iter()
        .filter_map(|(rel, v)| v.map(|vv| (rel, vv)))
        .collect::<Vec<_>>()
        .into_iter()
    }
}

impl<T: fmt::Display> fmt::Display for RelativePages<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.iter().map(|(rel, v)| format!("{}: {}", rel, v)).join(", "))
    }
}

/// Pagination links of one upstream listing response
pub type PageLinkSet = RelativePages<Link>;

impl RelativePages<Link> {
    /// Picks the pager relations out of a `links` object. `prev` is preferred over `previous`
    /// when both are present, and other keys such as `self` are ignored.
    pub fn from_links(links: &Links) -> Self {
        PagerRelation::ALL
            .iter()
            .filter_map(|&rel| {
                links
                    .get(rel.as_str())
                    .or_else(|| rel.alias().and_then(|alias| links.get(alias)))
                    .map(|link| (rel, link.clone()))
            })
            .collect()
    }

    /// Builds a link set from `(relation name, url)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> WarrenResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut set = PageLinkSet::default();
        for (key, url) in pairs {
            let rel = key.as_ref().parse::<PagerRelation>()?;
            let url = url.as_ref();
            let link = url.parse::<Link>().map_err(|err| WarrenError::InvalidUri(url.into(), err))?;
            if set.insert(rel, link).is_some() {
                warn!("pager relation `{}` given twice, keeping the last one", rel);
            }
        }
        Ok(set)
    }
}
