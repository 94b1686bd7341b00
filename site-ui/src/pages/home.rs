use crate::components::{ContactForm, HeroCarousel};
use crate::pages::{ProjectCard, ServiceCard};
use crate::reveal::RevealSection;
use leptos::*;
use leptos_router::A;
use site_content::{featured_projects, recent_posts, services, SITE_NAME};

const RECENT_POSTS: usize = 2;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
      <section id="hero" class="hero">
        <HeroCarousel/>
        <div class="hero-copy">
          <h1>"Engineering that stands the test of time"</h1>
          <p class="lead">"Structural, civil and mechanical design for clients who need it right first time."</p>
          <A href="/contact" class="button">"Start a project"</A>
        </div>
      </section>

      <RevealSection id="about">
        <h2>{format!("About {SITE_NAME}")}</h2>
        <p>
          "Chartered engineers working across commercial, infrastructure, industrial and "
          "residential schemes, from feasibility through to handover."
        </p>
      </RevealSection>

      <RevealSection id="services" class="band">
        <h2>"What we do"</h2>
        <div class="grid two">
          {services().iter().map(|s| view! { <ServiceCard service=s/> }).collect_view()}
        </div>
      </RevealSection>

      <RevealSection id="projects">
        <h2>"Featured projects"</h2>
        <div class="grid three">
          {featured_projects().into_iter().map(|p| view! { <ProjectCard project=p/> }).collect_view()}
        </div>
        <A href="/projects">"See all projects"</A>
      </RevealSection>

      <RevealSection id="insights" class="band">
        <h2>"Latest insights"</h2>
        <ul class="stack">
          {recent_posts(RECENT_POSTS)
            .iter()
            .map(|post| view! {
              <li>
                <b>{post.title}</b>
                <span class="meta">{format!(" · {}", post.published)}</span>
              </li>
            })
            .collect_view()}
        </ul>
        <A href="/blog">"Read more"</A>
      </RevealSection>

      <RevealSection id="contact">
        <h2>"Talk to an engineer"</h2>
        <ContactForm/>
      </RevealSection>
    }
}
