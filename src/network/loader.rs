use std::{fs::File, io::Read, path::Path};

use serde::Deserialize;
use tracing::info;

use crate::network::{self, Network};

/// One row of a link list, `from_station,to_station`.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkRecord {
    pub from_station: String,
    pub to_station: String,
}

impl Network {
    /// Builds a network from a csv link list, connecting rows in file order.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, network::Error> {
        let mut network = Network::new();
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut links = 0;
        for record in reader.deserialize() {
            let link: LinkRecord = record?;
            network.connect(&link.from_station, &link.to_station)?;
            links += 1;
        }
        info!("Loaded {} stations from {links} links", network.len());
        Ok(network)
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, network::Error> {
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }
}
