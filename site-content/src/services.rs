use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Service {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub capabilities: &'static [&'static str],
    /// Image URL under `/assets/icons`.
    pub icon: &'static str,
}

static SERVICES: &[Service] = &[
    Service {
        slug: "structural",
        title: "Structural Engineering",
        summary: "Analysis and design of buildings, bridges and industrial frames.",
        description: "Concept-to-construction structural design in steel, concrete and timber, \
                      with retrofit assessments for existing assets.",
        capabilities: &[
            "Finite element analysis",
            "Seismic retrofit",
            "Steel and concrete design",
            "Construction-stage support",
        ],
        icon: "/assets/icons/structural.svg",
    },
    Service {
        slug: "civil",
        title: "Civil & Infrastructure",
        summary: "Roads, drainage and site works for public and private clients.",
        description: "Site grading, stormwater management and transport infrastructure, \
                      delivered with permitting and stakeholder coordination.",
        capabilities: &[
            "Stormwater modelling",
            "Road and pavement design",
            "Earthworks",
            "Permitting",
        ],
        icon: "/assets/icons/civil.svg",
    },
    Service {
        slug: "mechanical",
        title: "Mechanical & Energy",
        summary: "HVAC, process plant and energy efficiency upgrades.",
        description: "Building services and process systems sized against measured loads, \
                      with energy audits and decarbonisation roadmaps.",
        capabilities: &[
            "HVAC design",
            "Energy audits",
            "Heat recovery",
            "Commissioning",
        ],
        icon: "/assets/icons/mechanical.svg",
    },
    Service {
        slug: "consulting",
        title: "Technical Consulting",
        summary: "Independent reviews, feasibility studies and expert witness work.",
        description: "Second opinions on designs, failure investigations and feasibility \
                      studies for owners and insurers.",
        capabilities: &[
            "Design review",
            "Failure investigation",
            "Feasibility studies",
            "Expert witness",
        ],
        icon: "/assets/icons/consulting.svg",
    },
];

pub fn services() -> &'static [Service] {
    SERVICES
}

pub fn service(slug: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.slug == slug)
}
