//! Pointer focus over placed bodies.
//!
//! The host feeds pointer-enter/leave events one at a time; the state
//! only decides which body (if any) is described in the centre void.

use super::data::{CelestialBody, ChartData, DegreeMinute};
use serde::{Deserialize, Serialize};

/// Which ring a body is placed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Natal,
    Transit,
}

/// Identity of a placed body: its name within a layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyId {
    pub name: String,
    pub layer: Layer,
}

impl BodyId {
    pub fn natal(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layer: Layer::Natal,
        }
    }

    pub fn transit(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layer: Layer::Transit,
        }
    }

    pub fn is_overlay(&self) -> bool {
        self.layer == Layer::Transit
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusEvent {
    PointerEnter(BodyId),
    PointerLeave,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FocusState {
    #[default]
    Idle,
    Focused(BodyId),
}

/// Detail of the focused body, shown in place of the default centre text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusedBody {
    pub id: BodyId,
    pub longitude: f64,
    pub position: DegreeMinute,
    pub sign: String,
}

impl FocusState {
    /// Next state after `event`.
    pub fn transition(self, event: FocusEvent) -> Self {
        match event {
            FocusEvent::PointerEnter(id) => {
                log::debug!("focus -> {} ({:?})", id.name, id.layer);
                FocusState::Focused(id)
            }
            FocusEvent::PointerLeave => {
                if let FocusState::Focused(id) = &self {
                    log::debug!("focus released from {}", id.name);
                }
                FocusState::Idle
            }
        }
    }

    pub fn apply(&mut self, event: FocusEvent) {
        let current = std::mem::take(self);
        *self = current.transition(event);
    }

    pub fn focused(&self) -> Option<&BodyId> {
        match self {
            FocusState::Idle => None,
            FocusState::Focused(id) => Some(id),
        }
    }

    /// Resolve the focused identity against the current inputs.
    /// A focus whose body is no longer present yields `None`.
    pub fn detail(
        &self,
        chart: &ChartData,
        transits: Option<&[CelestialBody]>,
    ) -> Option<FocusedBody> {
        let id = self.focused()?;
        let body = match id.layer {
            Layer::Natal => chart.find_planet(&id.name),
            Layer::Transit => transits?.iter().find(|b| b.name == id.name),
        }?;

        Some(FocusedBody {
            id: id.clone(),
            longitude: body.longitude,
            position: DegreeMinute::from_longitude(body.longitude),
            sign: body.display_sign().to_string(),
        })
    }
}
