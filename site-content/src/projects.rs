use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Commercial,
    Infrastructure,
    Industrial,
    Residential,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Commercial,
        Category::Infrastructure,
        Category::Industrial,
        Category::Residential,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Commercial => "Commercial",
            Category::Infrastructure => "Infrastructure",
            Category::Industrial => "Industrial",
            Category::Residential => "Residential",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub client: &'static str,
    pub location: &'static str,
    pub year: u16,
    pub category: Category,
    pub summary: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub outcomes: &'static [&'static str],
    /// Slugs of services delivered on the project.
    pub services: &'static [&'static str],
    /// Slugs of other projects worth reading next.
    pub related: &'static [&'static str],
    pub image: &'static str,
    pub featured: bool,
}

static PROJECTS: &[Project] = &[
    Project {
        slug: "harbour-bridge-retrofit",
        title: "Harbour Bridge Seismic Retrofit",
        client: "Regional Transport Authority",
        location: "Port Ellis",
        year: 2023,
        category: Category::Infrastructure,
        summary: "Seismic upgrade of a 1960s steel truss bridge kept open to traffic.",
        challenge: "Bring a 420 m truss to current seismic code without closing the crossing.",
        solution: "Staged bearing replacement and bolted strengthening designed for night works.",
        outcomes: &["Zero full closures", "Design life extended 50 years", "12% under budget"],
        services: &["structural", "consulting"],
        related: &["riverside-stormwater", "northgate-offices"],
        image: "/assets/projects/harbour-bridge.svg",
        featured: true,
    },
    Project {
        slug: "northgate-offices",
        title: "Northgate Office Campus",
        client: "Northgate Developments",
        location: "Ashford",
        year: 2022,
        category: Category::Commercial,
        summary: "Three mass-timber office buildings over a shared podium.",
        challenge: "Long column-free spans in timber with a tight floor-to-floor height.",
        solution: "Hybrid CLT floors on glulam beams with steel transfer at the podium.",
        outcomes: &["40% embodied carbon reduction", "BREEAM Excellent"],
        services: &["structural", "mechanical"],
        related: &["harbour-bridge-retrofit", "mill-lane-housing"],
        image: "/assets/projects/northgate.svg",
        featured: true,
    },
    Project {
        slug: "riverside-stormwater",
        title: "Riverside Stormwater Upgrade",
        client: "City of Port Ellis",
        location: "Port Ellis",
        year: 2021,
        category: Category::Infrastructure,
        summary: "Catchment-wide drainage model and attenuation works.",
        challenge: "Recurring flooding across a dense, partly culverted catchment.",
        solution: "Integrated 1D/2D model driving attenuation tanks and swales.",
        outcomes: &["1-in-100 year protection", "Two streets de-culverted"],
        services: &["civil"],
        related: &["harbour-bridge-retrofit", "decommissioned-depot"],
        image: "/assets/projects/riverside.svg",
        featured: false,
    },
    Project {
        slug: "coldstream-plant",
        title: "Coldstream Process Plant",
        client: "Coldstream Foods",
        location: "Hallam",
        year: 2024,
        category: Category::Industrial,
        summary: "Heat recovery and refrigeration upgrade for a food processing plant.",
        challenge: "Cut energy use without interrupting 24/7 production.",
        solution: "Phased heat pump installation recovering refrigeration reject heat.",
        outcomes: &["31% energy reduction", "Payback under four years"],
        services: &["mechanical", "consulting"],
        related: &["northgate-offices"],
        image: "/assets/projects/coldstream.svg",
        featured: true,
    },
    Project {
        slug: "mill-lane-housing",
        title: "Mill Lane Housing",
        client: "Mill Lane Housing Cooperative",
        location: "Ashford",
        year: 2020,
        category: Category::Residential,
        summary: "Forty affordable homes on a constrained brownfield site.",
        challenge: "Poor ground and a tight budget for a community-led scheme.",
        solution: "Lightweight timber frame on a raft, avoiding piling.",
        outcomes: &["Piling avoided entirely", "Completed on programme"],
        services: &["structural", "civil"],
        related: &["northgate-offices", "community-hall"],
        image: "/assets/projects/mill-lane.svg",
        featured: false,
    },
];

pub fn projects() -> &'static [Project] {
    PROJECTS
}

pub fn project(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.slug == slug)
}

pub fn projects_in_category(category: Category) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| p.category == category).collect()
}

pub fn projects_for_service(slug: &str) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| p.services.iter().any(|s| *s == slug))
        .collect()
}

pub fn featured_projects() -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| p.featured).collect()
}

/// Related projects in listed order. Slugs with no matching record are skipped.
pub fn related_projects(project: &Project) -> Vec<&'static Project> {
    project
        .related
        .iter()
        .copied()
        .filter_map(self::project)
        .collect()
}
