//! Batch results keyed by port.

use crate::types::{Port, ToPort};
use serde::ser::{Serialize, Serializer};
use std::collections::HashMap;

/// Reachability per port, in the order ports were first probed.
///
/// Probing a port twice keeps its first position and overwrites its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    entries: Vec<(Port, bool)>,
    index: HashMap<Port, usize>,
}

impl BatchResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty result with room for `capacity` ports.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Record a port's result, returning the value it replaced.
    pub fn insert(&mut self, port: Port, open: bool) -> Option<bool> {
        match self.index.get(&port) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, open)),
            None => {
                self.index.insert(port, self.entries.len());
                self.entries.push((port, open));
                None
            }
        }
    }

    /// Look up a port's result. Out-of-range ports are simply absent.
    pub fn get<P: ToPort>(&self, port: P) -> Option<bool> {
        let port = port.to_port().ok()?;
        self.index.get(&port).map(|&i| self.entries[i].1)
    }

    /// Whether a port was probed.
    pub fn contains<P: ToPort>(&self, port: P) -> bool {
        self.get(port).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(port, open)` pairs in probe order.
    pub fn iter(&self) -> impl Iterator<Item = (Port, bool)> + '_ {
        self.entries.iter().copied()
    }

    /// Ports that accepted a connection, in probe order.
    pub fn open_ports(&self) -> impl Iterator<Item = Port> + '_ {
        self.iter().filter(|&(_, open)| open).map(|(port, _)| port)
    }

    /// Ports that did not, in probe order.
    pub fn closed_ports(&self) -> impl Iterator<Item = Port> + '_ {
        self.iter().filter(|&(_, open)| !open).map(|(port, _)| port)
    }
}

impl IntoIterator for BatchResult {
    type Item = (Port, bool);
    type IntoIter = std::vec::IntoIter<(Port, bool)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(Port, bool)> for BatchResult {
    fn from_iter<I: IntoIterator<Item = (Port, bool)>>(iter: I) -> Self {
        let mut result = Self::new();
        for (port, open) in iter {
            result.insert(port, open);
        }
        result
    }
}

#[derive(serde::Serialize)]
struct Entry {
    port: Port,
    open: bool,
}

impl Serialize for BatchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|(port, open)| Entry { port, open }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut result = BatchResult::new();
        assert!(result.is_empty());
        assert_eq!(result.insert(Port::new(80), true), None);
        assert_eq!(result.insert(Port::new(443), false), None);

        assert_eq!(result.len(), 2);
        assert_eq!(result.get(80), Some(true));
        assert_eq!(result.get(443u16), Some(false));
        assert_eq!(result.get(22), None);
        assert!(!result.contains(70000));
    }

    #[test]
    fn test_last_write_wins_in_place() {
        let mut result = BatchResult::new();
        result.insert(Port::new(8080), false);
        result.insert(Port::new(22), true);
        assert_eq!(result.insert(Port::new(8080), true), Some(false));

        let entries: Vec<(u16, bool)> = result.iter().map(|(p, o)| (p.as_u16(), o)).collect();
        assert_eq!(entries, vec![(8080, true), (22, true)]);
    }

    #[test]
    fn test_open_and_closed_ports() {
        let result: BatchResult = [(Port::new(1), false), (Port::new(2), true), (Port::new(3), false)]
            .into_iter()
            .collect();
        assert_eq!(result.open_ports().collect::<Vec<_>>(), vec![Port::new(2)]);
        assert_eq!(
            result.closed_ports().collect::<Vec<_>>(),
            vec![Port::new(1), Port::new(3)]
        );
    }

    #[test]
    fn test_serializes_as_ordered_list() {
        let result: BatchResult = [(Port::new(9001), false), (Port::new(9000), true)]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"[{"port":9001,"open":false},{"port":9000,"open":true}]"#
        );
    }
}
