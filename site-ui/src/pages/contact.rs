use crate::components::ContactForm;
use leptos::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
      <section class="page contact">
        <h1>"Contact"</h1>
        <div class="grid two">
          <div class="stack">
            <p>"Tell us about your project and we'll put the right engineer in touch."</p>
            <p class="meta">"14 Harbour Row, Leith, Edinburgh"</p>
            <p class="meta">"hello@northline.example"</p>
          </div>
          <ContactForm/>
        </div>
      </section>
    }
}
