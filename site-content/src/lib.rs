//! Static content and route table for the Northline Engineering site.
//!
//! Everything here is compiled in; lookups are linear scans over small
//! `'static` tables.

pub mod blog;
pub mod carousel;
pub mod forms;
pub mod projects;
pub mod routes;
pub mod services;

pub use blog::{BlogPost, blog_posts, recent_posts};
pub use carousel::{Carousel, Slide, hero_slides};
pub use projects::{
    Category, Project, featured_projects, project, projects, projects_for_service,
    projects_in_category, related_projects,
};
pub use routes::Route;
pub use services::{Service, service, services};

pub const SITE_NAME: &str = "Northline Engineering";

/// Images that must be decoded before the first paint is revealed.
pub fn critical_images() -> Vec<&'static str> {
    hero_slides().iter().take(1).map(|s| s.image).collect()
}
