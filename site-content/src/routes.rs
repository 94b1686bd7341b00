/// Page-level views addressed by URL path.
///
/// Slugs are carried as-is; whether they name a real record is decided when
/// the view renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Services,
    Service(String),
    Projects,
    Project(String),
    Blog,
    Contact,
    NotFound,
}

impl Route {
    pub fn resolve(path: &str) -> Route {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["services"] => Route::Services,
            ["services", slug] => Route::Service((*slug).to_string()),
            ["projects"] => Route::Projects,
            ["projects", slug] => Route::Project((*slug).to_string()),
            ["blog"] => Route::Blog,
            ["contact"] => Route::Contact,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".into(),
            Route::Services => "/services".into(),
            Route::Service(slug) => format!("/services/{slug}"),
            Route::Projects => "/projects".into(),
            Route::Project(slug) => format!("/projects/{slug}"),
            Route::Blog => "/blog".into(),
            Route::Contact => "/contact".into(),
            Route::NotFound => "/404".into(),
        }
    }

    /// True when the path maps to a view backed by content.
    pub fn is_known(&self) -> bool {
        match self {
            Route::Service(slug) => crate::service(slug).is_some(),
            Route::Project(slug) => crate::project(slug).is_some(),
            Route::NotFound => false,
            _ => true,
        }
    }

    pub fn title(&self) -> String {
        let page = match self {
            Route::Home => return crate::SITE_NAME.to_string(),
            Route::Services => "Services",
            Route::Service(slug) => crate::service(slug).map_or("Not found", |s| s.title),
            Route::Projects => "Projects",
            Route::Project(slug) => crate::project(slug).map_or("Not found", |p| p.title),
            Route::Blog => "Insights",
            Route::Contact => "Contact",
            Route::NotFound => "Not found",
        };
        format!("{page} | {}", crate::SITE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolves_static_paths() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve(""), Route::Home);
        assert_eq!(Route::resolve("/services/"), Route::Services);
        assert_eq!(Route::resolve("/projects"), Route::Projects);
        assert_eq!(Route::resolve("/blog"), Route::Blog);
        assert_eq!(Route::resolve("/contact?ref=nav#form"), Route::Contact);
    }

    #[test]
    fn resolves_slugged_paths() {
        assert_eq!(Route::resolve("/services/civil"), Route::Service("civil".into()));
        assert_eq!(Route::resolve("/projects/x"), Route::Project("x".into()));
    }

    #[test]
    fn unknown_shapes_are_not_found() {
        assert_eq!(Route::resolve("/projects/a/b"), Route::NotFound);
        assert_eq!(Route::resolve("/careers"), Route::NotFound);
    }

    #[test]
    fn known_requires_existing_slug() {
        assert!(Route::resolve("/projects/coldstream-plant").is_known());
        assert!(!Route::resolve("/projects/x").is_known());
        assert!(Route::resolve("/services/structural").is_known());
        assert!(!Route::resolve("/nope").is_known());
    }

    #[test]
    fn path_resolves_back_to_route() {
        for route in [
            Route::Home,
            Route::Services,
            Route::Service("civil".into()),
            Route::Projects,
            Route::Project("northgate-offices".into()),
            Route::Blog,
            Route::Contact,
        ] {
            assert_eq!(Route::resolve(&route.path()), route);
        }
    }

    #[test]
    fn titles_use_record_names() {
        assert_eq!(
            Route::Project("northgate-offices".into()).title(),
            "Northgate Office Campus | Northline Engineering"
        );
        assert_eq!(Route::Home.title(), "Northline Engineering");
    }
}
