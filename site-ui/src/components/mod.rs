pub mod contact_form;
pub mod footer;
pub mod header;
pub mod hero_carousel;
pub mod loading_screen;
pub mod newsletter;

pub use contact_form::ContactForm;
pub use footer::Footer;
pub use header::Header;
pub use hero_carousel::HeroCarousel;
pub use loading_screen::{LoadingScreen, RouteOverlay};
pub use newsletter::Newsletter;
