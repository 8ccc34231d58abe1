use std::fmt;
use std::ops::Index;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Activity;

/// Activity name -> activity, kept in insertion order so listings come out
/// the way the activities were seeded. Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<(String, Activity)>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds an activity at the end, or replaces an existing one in place.
    pub fn insert(&mut self, name: String, activity: Activity) {
        match self.get_mut(&name) {
            Some(existing) => *existing = activity,
            None => self.entries.push((name, activity)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Activity> {
        self.entries.iter().map(|(_, a)| a)
    }
}

impl FromIterator<(String, Activity)> for Registry {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        let mut registry = Registry::new();
        for (name, activity) in iter {
            registry.insert(name, activity);
        }
        registry
    }
}

impl Index<&str> for Registry {
    type Output = Activity;

    fn index(&self, name: &str) -> &Activity {
        match self.get(name) {
            Some(a) => a,
            None => panic!("no activity named {:?}", name),
        }
    }
}

impl Serialize for Registry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Registry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RegistryVisitor)
    }
}

struct RegistryVisitor;

impl<'de> Visitor<'de> for RegistryVisitor {
    type Value = Registry;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of activity name to activity")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Registry, M::Error> {
        let mut registry = Registry::new();
        while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
            registry.insert(name, activity);
        }
        Ok(registry)
    }
}
