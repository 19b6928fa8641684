use crate::Assignment;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

impl<S: BuildHasher> Assignment for HashMap<String, bool, S> {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.get(name).cloned()
    }
}

impl<S: BuildHasher> Assignment for HashMap<&str, bool, S> {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.get(name).cloned()
    }
}

impl Assignment for BTreeMap<String, bool> {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.get(name).cloned()
    }
}

impl Assignment for BTreeMap<&str, bool> {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.get(name).cloned()
    }
}

/// Pairs are searched linearly. If a name appears more than once, the last value is used.
impl Assignment for [(&str, bool)] {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.iter()
            .rev()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }
}

impl<const N: usize> Assignment for [(&str, bool); N] {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.as_slice().value_of(name)
    }
}

impl Assignment for Vec<(&str, bool)> {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.as_slice().value_of(name)
    }
}

impl<T: Assignment + ?Sized> Assignment for &T {
    fn value_of(&self, name: &str) -> Option<bool> {
        (**self).value_of(name)
    }
}
