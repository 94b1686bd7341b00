use crate::pages::{NotFoundPage, ProjectCard};
use leptos::*;
use leptos_router::A;
use site_content::{projects_for_service, service, services, Service};

#[component]
pub fn ServiceCard(service: &'static Service) -> impl IntoView {
    view! {
      <article class="card service">
        <img class="icon" src=service.icon alt="" aria-hidden="true"/>
        <h3>{service.title}</h3>
        <p>{service.summary}</p>
        <A href=format!("/services/{}", service.slug)>"Learn more"</A>
      </article>
    }
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
      <section class="page services">
        <h1>"Services"</h1>
        <div class="grid two">
          {services().iter().map(|s| view! { <ServiceCard service=s/> }).collect_view()}
        </div>
      </section>
    }
}

#[component]
pub fn ServiceDetailPage(slug: String) -> impl IntoView {
    let Some(service) = service(&slug) else {
        tracing::debug!(%slug, "unknown service");
        return view! { <NotFoundPage/> }.into_view();
    };
    let work = projects_for_service(service.slug);
    let has_work = !work.is_empty();

    view! {
      <section class="page service-detail">
        <A href="/services">"All services"</A>
        <h1>{service.title}</h1>
        <p class="lead">{service.description}</p>
        <h2>"Capabilities"</h2>
        <ul>
          {service.capabilities.iter().map(|c| view! { <li>{*c}</li> }).collect_view()}
        </ul>
        <Show when=move || has_work>
          <h2>"Selected work"</h2>
        </Show>
        <div class="grid three">
          {work.into_iter().map(|p| view! { <ProjectCard project=p/> }).collect_view()}
        </div>
      </section>
    }
    .into_view()
}
