use crate::error::Result;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Embedded CSV listing the six study communities and their ACIS station ids.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/communities.csv");

/// One of the six fixed Alaska communities covered by both data sources.
///
/// The name doubles as the column header in the WRF grid CSV; the sid is the
/// station identifier used in ACIS `StnData` queries.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Community {
    /// Display name (e.g., "Fairbanks")
    pub name: String,
    /// ACIS station identifier (e.g., "USW00026411")
    pub sid: String,
}

impl Community {
    /// Get the community vector from the embedded fixture CSV.
    pub fn get_community_vector() -> Vec<Community> {
        if let Ok(c) = Community::parse_community_csv(CSV_OBJECT) {
            c
        } else {
            panic!("failed to parse communities csv file")
        }
    }

    /// Parse a CSV string of community metadata into a vector of Communities.
    ///
    /// Expected CSV columns: name, sid
    pub fn parse_community_csv(csv_object: &str) -> Result<Vec<Community>> {
        let mut community_list: Vec<Community> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            let community = Community {
                name: String::from(record.get(0).expect("name parse fail")),
                sid: String::from(record.get(1).expect("sid parse fail")),
            };
            community_list.push(community);
        }
        Ok(community_list)
    }
}
