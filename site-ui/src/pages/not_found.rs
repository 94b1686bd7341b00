use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
      <section class="page not-found">
        <h1>"Page not found"</h1>
        <p class="meta">"The page you were looking for has moved or never existed."</p>
        <A href="/" class="button">"Back to home"</A>
      </section>
    }
}
