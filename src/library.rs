use std::{collections::HashMap, hash::Hash, str::FromStr};

use num::Num;

/// A multiset backed by a `HashMap`. Used wherever a day needs "how many of
/// each" bookkeeping (vent overlap counts, polymer pair counts, and so on).
#[derive(Debug, Clone)]
pub struct Counter<T: Hash + Eq> {
    counts: HashMap<T, usize>,
}

impl<T: Hash + Eq> Counter<T> {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    pub fn add(&mut self, item: T, count: usize) {
        *self.counts.entry(item).or_default() += count;
    }

    pub fn add_one(&mut self, item: T) {
        self.add(item, 1)
    }

    pub fn iter_counts(&self) -> impl Iterator<Item = (&T, usize)> + '_ {
        self.counts.iter().map(|(item, &count)| (item, count))
    }
}

impl<T: Hash + Eq> Default for Counter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> Extend<T> for Counter<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.add_one(item))
    }
}

impl<T: Hash + Eq> FromIterator<T> for Counter<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

/// Parse each token of an iterator of string slices into a collection.
/// Tokens are trimmed first, so iterators produced by `str::split` can be
/// used directly on inputs with a trailing newline.
pub fn parse_input_iter<'a, T, C, I>(items: I) -> Result<C, T::Err>
where
    I: IntoIterator<Item = &'a str>,
    T: FromStr,
    C: FromIterator<T>,
{
    items.into_iter().map(|item| item.trim().parse()).collect()
}

pub trait StrExt {
    fn parse_radix<N: Num>(&self, radix: u32) -> Result<N, N::FromStrRadixErr>;
}

impl StrExt for str {
    fn parse_radix<N: Num>(&self, radix: u32) -> Result<N, N::FromStrRadixErr> {
        N::from_str_radix(self, radix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter() {
        let counter: Counter<char> = "abracadabra".chars().collect();

        let mut counts: Vec<(char, usize)> = counter
            .iter_counts()
            .map(|(&item, count)| (item, count))
            .collect();
        counts.sort_unstable();

        assert_eq!(counts, [('a', 5), ('b', 2), ('c', 1), ('d', 1), ('r', 2)]);
    }

    #[test]
    fn test_counter_add() {
        let mut counter = Counter::new();
        counter.add("fish", 10);
        counter.add_one("fish");
        counter.add_one("crab");

        let mut counts: Vec<(&str, usize)> = counter
            .iter_counts()
            .map(|(&item, count)| (item, count))
            .collect();
        counts.sort_unstable();

        assert_eq!(counts, [("crab", 1), ("fish", 11)]);
    }

    #[test]
    fn test_parse_input_iter() {
        let numbers: Vec<i32> = parse_input_iter("3, 4,3,1,2\n".split(',')).unwrap();
        assert_eq!(numbers, [3, 4, 3, 1, 2]);
    }

    #[test]
    fn test_parse_input_iter_bad_token() {
        let numbers: Result<Vec<i32>, _> = parse_input_iter("3,4,x,1".split(','));
        assert!(numbers.is_err());
    }

    #[test]
    fn test_parse_radix() {
        assert_eq!("10110".parse_radix::<u32>(2).unwrap(), 22);
    }
}
