use crate::pages::NotFoundPage;
use leptos::*;
use leptos_router::A;
use site_content::{project, projects, projects_in_category, related_projects, Category, Project};

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
      <article class="card project">
        <img src=project.image alt="" loading="lazy"/>
        <span class="tag">{project.category.label()}</span>
        <h3>{project.title}</h3>
        <p class="meta">{format!("{} · {}", project.location, project.year)}</p>
        <p>{project.summary}</p>
        <A href=format!("/projects/{}", project.slug)>"View case study"</A>
      </article>
    }
}

fn visible_projects(filter: Option<Category>) -> Vec<&'static Project> {
    match filter {
        Some(category) => projects_in_category(category),
        None => projects().iter().collect(),
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let filter = create_rw_signal(None::<Category>);

    view! {
      <section class="page projects">
        <h1>"Projects"</h1>
        <div class="filters" role="group" aria-label="Filter by category">
          <button class:active=move || filter.get().is_none() on:click=move |_| filter.set(None)>
            "All"
          </button>
          {Category::ALL
            .into_iter()
            .map(|c| view! {
              <button
                class:active=move || filter.get() == Some(c)
                on:click=move |_| filter.set(Some(c))
              >
                {c.label()}
              </button>
            })
            .collect_view()}
        </div>
        <div class="grid three">
          {move || {
            let shown = visible_projects(filter.get());
            if shown.is_empty() {
              view! { <p class="meta">"No projects in this category yet."</p> }.into_view()
            } else {
              shown.into_iter().map(|p| view! { <ProjectCard project=p/> }).collect_view()
            }
          }}
        </div>
      </section>
    }
}

#[component]
pub fn ProjectDetailPage(slug: String) -> impl IntoView {
    let Some(project) = project(&slug) else {
        tracing::debug!(%slug, "unknown project");
        return view! { <NotFoundPage/> }.into_view();
    };
    let related = related_projects(project);
    let has_related = !related.is_empty();

    view! {
      <article class="page project-detail">
        <A href="/projects">"All projects"</A>
        <h1>{project.title}</h1>
        <p class="meta">
          {format!("{} · {} · {} · {}", project.client, project.location, project.year, project.category.label())}
        </p>
        <img class="wide" src=project.image alt=project.title/>
        <div class="grid two">
          <div>
            <h2>"The challenge"</h2>
            <p>{project.challenge}</p>
          </div>
          <div>
            <h2>"Our solution"</h2>
            <p>{project.solution}</p>
          </div>
        </div>
        <h2>"Outcomes"</h2>
        <ul>{project.outcomes.iter().map(|o| view! { <li>{*o}</li> }).collect_view()}</ul>
        <Show when=move || has_related>
          <h2>"Related projects"</h2>
        </Show>
        <div class="grid three">
          {related.into_iter().map(|p| view! { <ProjectCard project=p/> }).collect_view()}
        </div>
      </article>
    }
    .into_view()
}
