mod loader;
pub mod planner;

pub use loader::*;
pub use planner::*;

use std::{collections::HashMap, io, sync::Arc};
use thiserror::Error;
use tracing::trace;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Station {0} can not be linked to itself")]
    SelfLoop(String),
}

#[derive(Debug, Clone)]
pub struct Station {
    pub name: Arc<str>,
    // Insertion order, no duplicates
    links: Vec<Arc<str>>,
}

impl Station {
    fn new(name: Arc<str>) -> Self {
        Self {
            name,
            links: Vec::new(),
        }
    }

    pub fn links(&self) -> &[Arc<str>] {
        &self.links
    }

    pub fn is_linked_to(&self, name: &str) -> bool {
        self.links.iter().any(|link| &**link == name)
    }

    fn link(&mut self, name: Arc<str>) {
        if !self.is_linked_to(&name) {
            self.links.push(name);
        }
    }
}

/// Undirected graph of named stations.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: HashMap<Arc<str>, Station>,
}

impl Network {
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the station called `name`, creating it first if needed.
    pub fn add_station(&mut self, name: &str) -> &Station {
        if !self.stations.contains_key(name) {
            trace!("Adding station {name}");
        }
        self.stations
            .entry(name.into())
            .or_insert_with_key(|key| Station::new(key.clone()))
    }

    /// Links `a` and `b` in both directions, adding either station if absent.
    pub fn connect(&mut self, a: &str, b: &str) -> Result<(), self::Error> {
        if a == b {
            return Err(self::Error::SelfLoop(a.to_string()));
        }
        let a_name = self.add_station(a).name.clone();
        let b_name = self.add_station(b).name.clone();
        if let Some(station) = self.stations.get_mut(a) {
            station.link(b_name);
        }
        if let Some(station) = self.stations.get_mut(b) {
            station.link(a_name);
        }
        Ok(())
    }

    pub fn has_station(&self, name: &str) -> bool {
        self.stations.contains_key(name)
    }

    pub fn station(&self, name: &str) -> Option<&Station> {
        self.stations.get(name)
    }

    pub fn neighbors(&self, name: &str) -> Vec<&str> {
        self.stations
            .get(name)
            .map(|station| station.links.iter().map(|link| &**link).collect())
            .unwrap_or_default()
    }

    pub fn all_stations(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.stations.keys().map(|name| &**name).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn planner(&self) -> JourneyPlanner<'_> {
        JourneyPlanner::new(self)
    }
}
