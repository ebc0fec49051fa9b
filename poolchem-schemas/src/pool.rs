use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolType {
    Chlorine,
    Salt,
    Mineral,
    Natural,
}

/// Physical profile of the pool being serviced.
///
/// `volume_gallons` is optional because client records are often incomplete;
/// the engine refuses to dose against a missing or non-positive volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolProfile {
    pub volume_gallons: Option<f64>,
    pub pool_type: PoolType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

impl PoolProfile {
    pub fn new(volume_gallons: f64, pool_type: PoolType) -> Self {
        Self {
            volume_gallons: Some(volume_gallons),
            pool_type,
            client_id: None,
        }
    }

    pub fn with_client(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// The volume if it is usable for dosing: present, finite and positive.
    pub fn usable_volume(&self) -> Option<f64> {
        self.volume_gallons.filter(|v| v.is_finite() && *v > 0.0)
    }
}
