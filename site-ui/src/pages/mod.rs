mod blog;
mod contact;
mod home;
mod not_found;
mod projects;
mod services;

pub use blog::BlogPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use projects::{ProjectCard, ProjectDetailPage, ProjectsPage};
pub use services::{ServiceCard, ServiceDetailPage, ServicesPage};
