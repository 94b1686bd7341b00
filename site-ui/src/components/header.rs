use leptos::*;
use leptos_router::{use_location, A};
use site_content::SITE_NAME;

const NAV: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/services", "Services"),
    ("/projects", "Projects"),
    ("/blog", "Insights"),
    ("/contact", "Contact"),
];

/// Home matches only itself; other entries also match their sub-pages.
fn is_active(current: &str, href: &str) -> bool {
    let current = current.trim_end_matches('/');
    let href = href.trim_end_matches('/');
    if href.is_empty() {
        return current.is_empty();
    }
    current == href
        || current
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Header() -> impl IntoView {
    let pathname = use_location().pathname;
    let menu_open = create_rw_signal(false);

    view! {
      <header class="site-header">
        <A href="/" class="brand">{SITE_NAME}</A>
        <button
          class="menu-toggle"
          aria-label="Toggle navigation"
          on:click=move |_| menu_open.update(|open| *open = !*open)
        >
          "Menu"
        </button>
        <nav class:open=move || menu_open.get()>
          <ul>
            {NAV
              .into_iter()
              .map(|(href, label)| {
                view! {
                  <li
                    class:active=move || is_active(&pathname.get(), href)
                    on:click=move |_| menu_open.set(false)
                  >
                    <A href=href>{label}</A>
                  </li>
                }
              })
              .collect_view()}
          </ul>
        </nav>
      </header>
    }
}
