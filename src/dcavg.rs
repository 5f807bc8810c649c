use std::time::Instant;

use rayon::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::device::{DeviceCollection, DeviceDcavgInfo};
use crate::error::ServiceError;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DemandCalculationRequest {
    pub devices: Option<Vec<DeviceDcavgInfo>>,
    pub demand_rate: Decimal,
    pub series_count: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDemand {
    pub device_id: String,
    pub device_name: String,
    pub connected_load: Decimal,
    pub demand_load: Decimal,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DcavgResult {
    pub device_count: usize,
    pub total_connected_load: Decimal,
    pub demand_rate: Decimal,
    pub series_count: i32,
    pub demand_load: Decimal,
    pub series_average: Decimal,
    pub devices: Vec<DeviceDemand>,
}

impl DcavgResult {
    fn empty(demand_rate: Decimal, series_count: i32) -> DcavgResult {
        DcavgResult {
            device_count: 0,
            total_connected_load: dec!(0.0),
            demand_rate,
            series_count,
            demand_load: dec!(0.0),
            series_average: dec!(0.0),
            devices: vec![],
        }
    }
}

/// Runs the regular DCAVG pass: per-device connected and demand loads, then
/// the aggregate demand spread across the requested number of series.
pub fn calculate_regular(request: &DemandCalculationRequest) -> Result<DcavgResult, ServiceError> {
    // A missing device list is a legitimate request state
    let devices = match &request.devices {
        Some(devices) if !devices.is_empty() => devices,
        _ => return Ok(DcavgResult::empty(request.demand_rate, request.series_count)),
    };

    if request.series_count <= 0 {
        return Err(ServiceError::InvalidSeriesCount(request.series_count));
    }

    let calc_start = Instant::now();

    let rows: Vec<DeviceDemand> = devices
        .par_iter()
        .map(|device| {
            let connected_load = device.capacity * Decimal::from(device.qty);

            DeviceDemand {
                device_id: device.device_id.to_owned(),
                device_name: device.device_name.to_owned(),
                connected_load,
                demand_load: connected_load * request.demand_rate,
            }
        })
        .collect();

    let total_connected_load: Decimal = rows.iter().map(|row| row.connected_load).sum();
    let demand_load = total_connected_load * request.demand_rate;
    let series_average = demand_load / Decimal::from(request.series_count);

    let device_count = DeviceCollection(devices.to_vec())
        .get_unique_device_ids()
        .len();

    let calc_dur = calc_start.elapsed();
    log::debug!("Dcavg calculation took: {:?}", calc_dur);

    Ok(DcavgResult {
        device_count,
        total_connected_load,
        demand_rate: request.demand_rate,
        series_count: request.series_count,
        demand_load,
        series_average,
        devices: rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(id: &str, capacity: Decimal, qty: i32) -> DeviceDcavgInfo {
        DeviceDcavgInfo {
            device_id: id.to_string(),
            device_name: format!("Device {}", id),
            capacity,
            qty,
        }
    }

    #[test]
    fn default_request_has_no_devices() {
        let request = DemandCalculationRequest::default();

        assert_eq!(request.devices, None);
        assert_eq!(request.demand_rate, dec!(0.0));
        assert_eq!(request.series_count, 0);
    }

    #[test]
    fn request_fields_pass_through_unchanged() {
        let d1 = device("ACB-01", dec!(10.0), 2);
        let d2 = device("MCCB-02", dec!(5.0), 1);

        let request = DemandCalculationRequest {
            devices: Some(vec![d1.clone(), d2.clone()]),
            demand_rate: dec!(3.5),
            series_count: 2,
        };

        assert_eq!(request.devices, Some(vec![d1, d2]));
        assert_eq!(request.demand_rate, dec!(3.5));
        assert_eq!(request.series_count, 2);
    }

    #[test]
    fn regular_pass_computes_loads_and_series_average() {
        let request = DemandCalculationRequest {
            devices: Some(vec![
                device("ACB-01", dec!(10.0), 2),
                device("MCCB-02", dec!(5.0), 1),
            ]),
            demand_rate: dec!(3.5),
            series_count: 2,
        };

        let result = calculate_regular(&request).unwrap();

        assert_eq!(result.device_count, 2);
        assert_eq!(result.total_connected_load, dec!(25.0));
        assert_eq!(result.demand_load, dec!(87.5));
        assert_eq!(result.series_average, dec!(43.75));
        assert_eq!(result.demand_rate, dec!(3.5));
        assert_eq!(result.series_count, 2);

        assert_eq!(result.devices.len(), 2);
        assert_eq!(result.devices[0].device_id, "ACB-01");
        assert_eq!(result.devices[0].connected_load, dec!(20.0));
        assert_eq!(result.devices[0].demand_load, dec!(70.0));
        assert_eq!(result.devices[1].connected_load, dec!(5.0));
    }

    #[test]
    fn missing_device_list_yields_empty_result() {
        let request = DemandCalculationRequest {
            devices: None,
            demand_rate: dec!(0.65),
            series_count: 3,
        };

        let result = calculate_regular(&request).unwrap();

        assert_eq!(result.device_count, 0);
        assert_eq!(result.total_connected_load, dec!(0.0));
        assert_eq!(result.demand_load, dec!(0.0));
        assert_eq!(result.series_average, dec!(0.0));
        assert!(result.devices.is_empty());
        assert_eq!(result.demand_rate, dec!(0.65));
        assert_eq!(result.series_count, 3);
    }

    #[test]
    fn empty_device_list_yields_empty_result() {
        let request = DemandCalculationRequest {
            devices: Some(vec![]),
            demand_rate: dec!(0.65),
            series_count: 3,
        };

        let result = calculate_regular(&request).unwrap();

        assert_eq!(result.device_count, 0);
        assert!(result.devices.is_empty());
    }

    #[test]
    fn non_positive_series_count_is_rejected() {
        let request = DemandCalculationRequest {
            devices: Some(vec![device("ACB-01", dec!(10.0), 1)]),
            demand_rate: dec!(0.65),
            series_count: 0,
        };

        let result = calculate_regular(&request);

        assert!(matches!(result, Err(ServiceError::InvalidSeriesCount(0))));
    }

    #[test]
    fn duplicate_device_ids_count_once() {
        let request = DemandCalculationRequest {
            devices: Some(vec![
                device("ACB-01", dec!(10.0), 1),
                device("ACB-01", dec!(10.0), 1),
            ]),
            demand_rate: dec!(1.0),
            series_count: 1,
        };

        let result = calculate_regular(&request).unwrap();

        assert_eq!(result.device_count, 1);
        assert_eq!(result.devices.len(), 2);
        assert_eq!(result.total_connected_load, dec!(20.0));
    }
}
