use std::collections::HashSet;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// One device's contribution to a demand-average calculation.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceDcavgInfo {
    pub device_id: String,
    pub device_name: String,
    pub capacity: Decimal,
    pub qty: i32,
}

pub struct DeviceCollection(pub Vec<DeviceDcavgInfo>);

impl DeviceCollection {
    pub fn get_unique_device_ids(&self) -> Vec<String> {
        let seen = Mutex::new(HashSet::new());

        let unique_device_ids: Vec<String> = self
            .0
            .par_iter()
            .filter_map(|device| {
                let mut seen = seen.lock().unwrap();
                if seen.insert(&device.device_id) {
                    Some(device.device_id.clone())
                } else {
                    None
                }
            })
            .collect();

        unique_device_ids
    }
}
