use crate::components::{Footer, Header, LoadingScreen, RouteOverlay};
use crate::config::SiteConfig;
use crate::gate::use_loading_gate;
use crate::pages::{
    BlogPage, ContactPage, HomePage, NotFoundPage, ProjectDetailPage, ProjectsPage,
    ServiceDetailPage, ServicesPage,
};
use leptos::*;
use leptos_router::{use_location, Router};
use site_content::Route;

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    view! {
      <Router>
        <Shell config=config/>
      </Router>
    }
}

/// Gate-driven chrome: splash until the first load, overlay on route changes.
#[component]
fn Shell(config: SiteConfig) -> impl IntoView {
    let loading = use_loading_gate(config.gate);
    let pathname = use_location().pathname;
    let route = create_memo(move |_| Route::resolve(&pathname.get()));

    create_effect(move |_| {
        let title = route.with(Route::title);
        document().set_title(&title);
    });

    let initial = move || loading.with(|s| s.initial_loading);
    let transitioning = move || loading.with(|s| s.route_loading);

    view! {
      <Show when=move || !initial() fallback=|| view! { <LoadingScreen/> }>
        <Header/>
        <main class="page-main" class:page-leaving=transitioning>
          {move || route_view(route.get())}
        </main>
        <Footer/>
        <Show when=transitioning>
          <RouteOverlay/>
        </Show>
      </Show>
    }
}

fn route_view(route: Route) -> View {
    match route {
        Route::Home => view! { <HomePage/> }.into_view(),
        Route::Services => view! { <ServicesPage/> }.into_view(),
        Route::Service(slug) => view! { <ServiceDetailPage slug=slug/> }.into_view(),
        Route::Projects => view! { <ProjectsPage/> }.into_view(),
        Route::Project(slug) => view! { <ProjectDetailPage slug=slug/> }.into_view(),
        Route::Blog => view! { <BlogPage/> }.into_view(),
        Route::Contact => view! { <ContactPage/> }.into_view(),
        Route::NotFound => view! { <NotFoundPage/> }.into_view(),
    }
}
