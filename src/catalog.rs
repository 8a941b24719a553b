//! Fixed reference data offered by the habitat designer: locations, the
//! module library, crew roles and the enumerated form options.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Planet {
    pub id: &'static str,
    pub name: &'static str,
    pub gravity: &'static str,
    pub atmosphere: &'static str,
    pub temperature: &'static str,
    pub radiation: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Footprint {
    pub width: u32,
    pub height: u32,
}

/// Per-unit running cost of a module
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModuleUpkeep {
    pub power: f64,
    pub maintenance: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct HabitatModule {
    pub id: &'static str,
    pub name: &'static str,
    pub size: Footprint,
    pub resources: ModuleUpkeep,
}

/// Daily consumption of one crew member (kg oxygen, litres water, kg food)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CrewNeeds {
    pub oxygen: f64,
    pub water: f64,
    pub food: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CrewRole {
    pub role: &'static str,
    pub needs: CrewNeeds,
}

const STANDARD_NEEDS: CrewNeeds = CrewNeeds {
    oxygen: 0.8,
    water: 3.0,
    food: 2.5,
};

pub const PLANETS: &[Planet] = &[
    Planet {
        id: "mars",
        name: "Mars",
        gravity: "0.38g",
        atmosphere: "Thin CO₂",
        temperature: "-63°C avg",
        radiation: "Moderate",
    },
    Planet {
        id: "moon",
        name: "Moon",
        gravity: "0.16g",
        atmosphere: "None",
        temperature: "-23°C avg",
        radiation: "High",
    },
    Planet {
        id: "europa",
        name: "Europa",
        gravity: "0.13g",
        atmosphere: "Trace O₂",
        temperature: "-160°C avg",
        radiation: "Extreme",
    },
    Planet {
        id: "titan",
        name: "Titan",
        gravity: "0.14g",
        atmosphere: "Dense N₂",
        temperature: "-179°C avg",
        radiation: "Low",
    },
    Planet {
        id: "orbit",
        name: "Free Space Orbit",
        gravity: "0g",
        atmosphere: "Vacuum",
        temperature: "Variable",
        radiation: "High",
    },
];

const fn module(
    id: &'static str,
    name: &'static str,
    width: u32,
    height: u32,
    power: f64,
    maintenance: f64,
) -> HabitatModule {
    HabitatModule {
        id,
        name,
        size: Footprint { width, height },
        resources: ModuleUpkeep { power, maintenance },
    }
}

pub const MODULES: &[HabitatModule] = &[
    module("living", "Living Quarters", 2, 2, 5.0, 2.0),
    module("lab", "Laboratory", 2, 2, 15.0, 5.0),
    module("hydroponics", "Hydroponics Bay", 3, 2, 20.0, 8.0),
    module("control", "Control Room", 2, 1, 10.0, 3.0),
    module("recreation", "Recreation", 2, 2, 8.0, 2.0),
    module("storage", "Storage", 1, 1, 1.0, 1.0),
    module("medical", "Medical Bay", 2, 2, 12.0, 4.0),
    module("gym", "Exercise Area", 2, 1, 5.0, 2.0),
    module("airlock", "Airlock", 1, 1, 3.0, 5.0),
];

pub const CREW_ROLES: &[CrewRole] = &[
    CrewRole { role: "Scientists", needs: STANDARD_NEEDS },
    CrewRole { role: "Engineers", needs: STANDARD_NEEDS },
    CrewRole { role: "Medical", needs: STANDARD_NEEDS },
    CrewRole { role: "Pilots", needs: STANDARD_NEEDS },
    CrewRole { role: "Botanists", needs: STANDARD_NEEDS },
    CrewRole { role: "Support", needs: STANDARD_NEEDS },
];

/// Choices offered by the design request form
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormOptions {
    pub locations: &'static [&'static str],
    pub sizes: &'static [&'static str],
    pub shapes: &'static [&'static str],
    pub purposes: &'static [&'static str],
    pub lifestyles: &'static [&'static str],
    pub systems: &'static [&'static str],
}

pub const FORM_OPTIONS: FormOptions = FormOptions {
    locations: &["mars", "moon", "titan", "iss-orbit", "europa", "custom"],
    sizes: &["small", "medium", "large"],
    shapes: &["cylindrical", "dome", "modular", "inflatable", "hybrid"],
    purposes: &["research", "mining", "farming", "leisure", "mixed", "colonization"],
    lifestyles: &["minimalist", "balanced", "luxury", "high-activity", "sustainable"],
    systems: &[
        "life-support",
        "waste-management",
        "exercise-area",
        "laboratory",
        "kitchen",
        "storage",
        "recreation",
        "greenhouse",
        "workshop",
        "medical-bay",
    ],
};

/// Everything the designer needs to render its pickers
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub planets: &'static [Planet],
    pub modules: &'static [HabitatModule],
    pub crew_roles: &'static [CrewRole],
    pub form_options: FormOptions,
}

pub fn catalog() -> Catalog {
    Catalog {
        planets: PLANETS,
        modules: MODULES,
        crew_roles: CREW_ROLES,
        form_options: FORM_OPTIONS,
    }
}

pub fn find_planet(id: &str) -> Option<&'static Planet> {
    PLANETS.iter().find(|planet| planet.id == id)
}

pub fn find_module(id: &str) -> Option<&'static HabitatModule> {
    MODULES.iter().find(|module| module.id == id)
}

pub fn find_crew_role(role: &str) -> Option<&'static CrewRole> {
    CREW_ROLES.iter().find(|crew| crew.role == role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups() {
        assert_eq!(find_planet("europa").map(|p| p.radiation), Some("Extreme"));
        assert_eq!(find_planet("pluto").map(|p| p.name), None);

        let hydroponics = find_module("hydroponics").unwrap();
        assert_eq!(hydroponics.size, Footprint { width: 3, height: 2 });
        assert_eq!(hydroponics.resources.power, 20.0);

        assert_eq!(find_crew_role("Pilots").unwrap().needs, STANDARD_NEEDS);
        assert!(find_crew_role("pilots").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<&str> = MODULES.iter().map(|m| m.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), MODULES.len());
    }

    #[test]
    fn test_catalog_serializes_camel_case() {
        let value = serde_json::to_value(catalog()).unwrap();

        assert_eq!(value["planets"].as_array().unwrap().len(), 5);
        assert_eq!(value["modules"].as_array().unwrap().len(), 9);
        assert_eq!(value["crewRoles"].as_array().unwrap().len(), 6);
        assert_eq!(value["formOptions"]["systems"].as_array().unwrap().len(), 10);
        assert_eq!(value["modules"][0]["size"]["width"], 2);
    }
}
