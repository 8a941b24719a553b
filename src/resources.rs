//! Resource totals for a habitat layout: module upkeep plus crew life
//! support, summed from the per-unit constants in the catalog.

use serde::{Deserialize, Serialize};

use crate::catalog::{CrewNeeds, find_crew_role, find_module};

/// Share of capacity above which power draw is flagged
pub const WARNING_THRESHOLD: f64 = 60.0;
pub const CRITICAL_THRESHOLD: f64 = 80.0;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModuleCount {
    pub module: String,
    pub count: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CrewCount {
    pub role: String,
    pub count: u32,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceRequest {
    pub modules: Vec<ModuleCount>,
    pub crew: Vec<CrewCount>,
    pub power_capacity: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    Nominal,
    Warning,
    Critical,
}

impl LoadStatus {
    pub fn classify(current: f64, capacity: f64) -> Self {
        let percentage = current / capacity * 100.0;
        if percentage > CRITICAL_THRESHOLD {
            LoadStatus::Critical
        } else if percentage > WARNING_THRESHOLD {
            LoadStatus::Warning
        } else {
            LoadStatus::Nominal
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSummary {
    pub power: f64,
    pub maintenance: f64,
    pub crew_total: u64,
    pub needs: CrewNeeds,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_status: Option<LoadStatus>,
    /// Module ids and crew roles with no catalog entry
    pub unknown: Vec<String>,
}

pub fn estimate(request: &ResourceRequest) -> ResourceSummary {
    let mut power = 0.0;
    let mut maintenance = 0.0;
    let mut unknown = Vec::new();

    for entry in &request.modules {
        match find_module(&entry.module) {
            Some(module) => {
                power += module.resources.power * f64::from(entry.count);
                maintenance += module.resources.maintenance * f64::from(entry.count);
            }
            None => unknown.push(entry.module.clone()),
        }
    }

    let mut needs = CrewNeeds {
        oxygen: 0.0,
        water: 0.0,
        food: 0.0,
    };
    let mut crew_total: u64 = 0;

    for member in &request.crew {
        crew_total += u64::from(member.count);
        match find_crew_role(&member.role) {
            Some(role) => {
                let count = f64::from(member.count);
                needs.oxygen += role.needs.oxygen * count;
                needs.water += role.needs.water * count;
                needs.food += role.needs.food * count;
            }
            None => unknown.push(member.role.clone()),
        }
    }

    let power_status = request
        .power_capacity
        .filter(|capacity| *capacity > 0.0)
        .map(|capacity| LoadStatus::classify(power, capacity));

    ResourceSummary {
        power,
        maintenance,
        crew_total,
        needs,
        power_status,
        unknown,
    }
}
