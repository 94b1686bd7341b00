use crate::components::Newsletter;
use leptos::*;
use leptos_router::A;
use site_content::{services, SITE_NAME};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
      <footer class="site-footer">
        <div class="footer-brand">
          <b>{SITE_NAME}</b>
          <p class="meta">"Structural, civil and mechanical engineering since 2004."</p>
        </div>
        <div>
          <h4>"Services"</h4>
          <ul>
            {services()
              .iter()
              .map(|s| view! { <li><A href=format!("/services/{}", s.slug)>{s.title}</A></li> })
              .collect_view()}
          </ul>
        </div>
        <div>
          <h4>"Newsletter"</h4>
          <Newsletter/>
        </div>
      </footer>
    }
}
