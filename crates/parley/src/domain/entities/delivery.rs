//! Delivery Plan and Broadcast Report
//!
//! Both are built fresh for one broadcast and dropped afterwards.

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::ActorId;

/// One recipient's fully composed message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Delivery {
    pub recipient: ActorId,
    pub recipient_name: String,
    pub text: String,
}

/// Ordered recipient -> composed text mapping
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryPlan {
    pub deliveries: Vec<Delivery>,
}

impl DeliveryPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, delivery: Delivery) {
        self.deliveries.push(delivery);
    }

    /// Text composed for a recipient, if they are in the plan
    pub fn text_for(&self, recipient: &ActorId) -> Option<&str> {
        self.deliveries
            .iter()
            .find(|d| d.recipient == *recipient)
            .map(|d| d.text.as_str())
    }

    pub fn contains(&self, recipient: &ActorId) -> bool {
        self.text_for(recipient).is_some()
    }

    pub fn recipients(&self) -> impl Iterator<Item = &ActorId> {
        self.deliveries.iter().map(|d| &d.recipient)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Delivery> {
        self.deliveries.iter()
    }

    pub fn len(&self) -> usize {
        self.deliveries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deliveries.is_empty()
    }
}

impl IntoIterator for DeliveryPlan {
    type Item = Delivery;
    type IntoIter = std::vec::IntoIter<Delivery>;

    fn into_iter(self) -> Self::IntoIter {
        self.deliveries.into_iter()
    }
}

/// Outcome of a broadcast that got past validation and parsing
#[derive(Debug, Clone, Default)]
pub struct BroadcastReport {
    /// Recipients a delivery was attempted for
    pub attempted: usize,
    pub delivered: usize,
    /// Isolated per-recipient failures (`DomainError::DeliveryFailure`)
    pub failures: Vec<DomainError>,
}

impl BroadcastReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
