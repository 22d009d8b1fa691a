use std::{
    collections::{HashMap, HashSet, VecDeque},
    fmt::Display,
    sync::Arc,
};

use serde::Serialize;
use tracing::{debug, trace};

use crate::network::Network;

/// A route through the network. An empty path means no route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Journey {
    pub path: Vec<Arc<str>>,
    pub hops: usize,
}

impl Journey {
    fn empty() -> Self {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn origin(&self) -> Option<&str> {
        self.path.first().map(|name| &**name)
    }

    pub fn destination(&self) -> Option<&str> {
        self.path.last().map(|name| &**name)
    }
}

impl Display for Journey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, station) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str("  →  ")?;
            }
            f.write_str(station)?;
        }
        Ok(())
    }
}

/// Fewest-hops search over a [`Network`].
pub struct JourneyPlanner<'a> {
    network: &'a Network,
}

impl<'a> JourneyPlanner<'a> {
    pub fn new(network: &'a Network) -> Self {
        Self { network }
    }

    /// Breadth first search from `src` to `dst`.
    ///
    /// Unknown stations and unreachable targets both give an empty journey.
    /// When several routes share the lowest hop count the one found first
    /// through link insertion order wins.
    pub fn shortest_path(&self, src: &str, dst: &str) -> Journey {
        let (Some(src), Some(dst)) = (self.network.station(src), self.network.station(dst))
        else {
            debug!("Unknown station in {src} -> {dst}");
            return Journey::empty();
        };
        if src.name == dst.name {
            return Journey {
                path: vec![src.name.clone()],
                hops: 0,
            };
        }

        let mut queue: VecDeque<&Arc<str>> = VecDeque::from([&src.name]);
        let mut visited: HashSet<&str> = HashSet::from([&*src.name]);
        let mut prev: HashMap<&str, &Arc<str>> = HashMap::new();

        while let Some(current) = queue.pop_front() {
            if *current == dst.name {
                break;
            }
            trace!("Exploring {current}");
            let Some(station) = self.network.station(current) else {
                continue;
            };
            for next in station.links() {
                if visited.insert(next) {
                    prev.insert(next, current);
                    queue.push_back(next);
                }
            }
        }

        if !visited.contains(&*dst.name) {
            debug!("No route from {} to {}", src.name, dst.name);
            return Journey::empty();
        }

        let mut path: Vec<Arc<str>> = vec![dst.name.clone()];
        let mut at: &str = &dst.name;
        while let Some(parent) = prev.get(at) {
            path.push((*parent).clone());
            at = parent;
        }
        path.reverse();
        let hops = path.len() - 1;
        debug!("Found route {} -> {} in {hops} hops", src.name, dst.name);
        Journey { path, hops }
    }
}
