use crate::types::OutageRecord;
use std::collections::HashMap;

/// Canonical join key for a county name. Both sides of the join go
/// through this, so "Miami-Dade" and "MIAMI-DADE" land on the same key.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

/// Case-insensitive lookup from county name to outage record.
///
/// If two records normalize to the same key the last one wins; the
/// collision is accepted, not an error. The maximum outage count is taken
/// over every record seen, including any that were overwritten.
pub struct OutageIndex {
    map: HashMap<String, OutageRecord>,
    max_outage: u64,
}

impl OutageIndex {
    pub fn build(records: Vec<OutageRecord>) -> Self {
        let mut map = HashMap::new();
        let mut max_outage = 0;
        for record in records {
            max_outage = max_outage.max(record.outage_count);
            map.insert(normalize_name(&record.county_name), record);
        }
        Self { map, max_outage }
    }

    pub fn get(&self, county_name: &str) -> Option<&OutageRecord> {
        self.map.get(&normalize_name(county_name))
    }

    pub fn max_outage(&self) -> u64 {
        self.max_outage
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
