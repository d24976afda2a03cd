// Device domain model
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Number of daily samples every device carries.
pub const HISTORY_DAYS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Healthy,
    Problem,
}

impl DeviceStatus {
    pub fn is_healthy(self) -> bool {
        self == DeviceStatus::Healthy
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub status: DeviceStatus,
    pub best: u32,
    pub normal: u32,
    pub worst: u32,
    pub last_30_days: Vec<u32>,
}

impl Device {
    pub fn new(
        id: impl Into<String>,
        status: DeviceStatus,
        best: u32,
        normal: u32,
        worst: u32,
        last_30_days: Vec<u32>,
    ) -> Self {
        Self {
            id: id.into(),
            status,
            best,
            normal,
            worst,
            last_30_days,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("device dataset is empty")]
    Empty,
    #[error("duplicate device id {0:?}")]
    DuplicateId(String),
    #[error("device {id:?} has {len} history samples, expected {expected}", expected = HISTORY_DAYS)]
    WrongHistoryLength { id: String, len: usize },
}

/// Fixed, ordered, non-empty list of monitored devices.
#[derive(Debug, Clone)]
pub struct Dataset {
    devices: Vec<Device>,
}

impl Dataset {
    pub fn new(devices: Vec<Device>) -> Result<Self, DatasetError> {
        if devices.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut seen = HashSet::new();
        for device in &devices {
            if !seen.insert(device.id.as_str()) {
                return Err(DatasetError::DuplicateId(device.id.clone()));
            }
            if device.last_30_days.len() != HISTORY_DAYS {
                return Err(DatasetError::WrongHistoryLength {
                    id: device.id.clone(),
                    len: device.last_30_days.len(),
                });
            }
        }

        Ok(Self { devices })
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Device at `index`, falling back to the first device when out of range.
    pub fn get_or_first(&self, index: usize) -> &Device {
        self.devices.get(index).unwrap_or(&self.devices[0])
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.devices.iter().position(|d| d.id == id)
    }
}

/// The two batteries shipped with the dashboard.
pub fn default_devices() -> Vec<Device> {
    vec![
        Device::new(
            "Battery A",
            DeviceStatus::Healthy,
            50,
            30,
            10,
            vec![
                2, 18, 16, 0, 12, 6, 4, 3, 2, 6, 7, 8, 9, 10, 11, 18, 17, 16, 12, 14, 15, 10, 9,
                6, 7, 8, 2, 1, 4, 10,
            ],
        ),
        Device::new(
            "Battery B",
            DeviceStatus::Problem,
            30,
            40,
            20,
            vec![
                1, 2, 3, 4, 5, 6, 10, 12, 14, 15, 16, 18, 17, 10, 8, 7, 6, 5, 10, 14, 18, 20, 16,
                15, 14, 13, 6, 5, 8, 12,
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(id: &str, value: u32) -> Device {
        Device::new(id, DeviceStatus::Healthy, 1, 1, 1, vec![value; HISTORY_DAYS])
    }

    #[test]
    fn test_default_dataset_is_valid() {
        let dataset = Dataset::new(default_devices()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.devices()[0].id, "Battery A");
        assert_eq!(dataset.devices()[1].status, DeviceStatus::Problem);
    }

    #[test]
    fn test_rejects_empty_dataset() {
        assert_eq!(Dataset::new(vec![]).unwrap_err(), DatasetError::Empty);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = Dataset::new(vec![flat("x", 1), flat("x", 2)]).unwrap_err();
        assert_eq!(err, DatasetError::DuplicateId("x".to_string()));
    }

    #[test]
    fn test_rejects_short_history() {
        let mut device = flat("short", 3);
        device.last_30_days.pop();
        let err = Dataset::new(vec![device]).unwrap_err();
        assert_eq!(
            err,
            DatasetError::WrongHistoryLength {
                id: "short".to_string(),
                len: 29
            }
        );
    }

    #[test]
    fn test_get_or_first_and_position() {
        let dataset = Dataset::new(vec![flat("a", 1), flat("b", 2)]).unwrap();
        assert_eq!(dataset.get_or_first(1).id, "b");
        assert_eq!(dataset.get_or_first(7).id, "a");
        assert_eq!(dataset.position("b"), Some(1));
        assert_eq!(dataset.position("zzz"), None);
    }

    #[test]
    fn test_status_deserializes_lowercase() {
        let status: DeviceStatus = serde_json::from_str("\"problem\"").unwrap();
        assert_eq!(status, DeviceStatus::Problem);
        assert!(DeviceStatus::Healthy.is_healthy());
    }
}
