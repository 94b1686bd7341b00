use leptos::*;
use site_content::forms::{ContactForm as Form, Field, FieldError};

fn first_error(errors: &[FieldError], field: Field) -> Option<String> {
    errors
        .iter()
        .find(|e| e.field() == field)
        .map(ToString::to_string)
}

/// Validated locally; a valid submission only flips to the thank-you state.
#[component]
pub fn ContactForm() -> impl IntoView {
    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let company = create_rw_signal(String::new());
    let message = create_rw_signal(String::new());
    let errors = create_rw_signal(Vec::<FieldError>::new());
    let sent = create_rw_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let form = Form {
            name: name.get_untracked(),
            email: email.get_untracked(),
            company: company.get_untracked(),
            message: message.get_untracked(),
        };
        match form.validate() {
            Ok(()) => {
                tracing::info!("contact form accepted");
                errors.set(Vec::new());
                sent.set(true);
            }
            Err(found) => {
                tracing::debug!(count = found.len(), "contact form rejected");
                errors.set(found);
            }
        }
    };

    let error_for = move |field: Field| move || errors.with(|e| first_error(e, field));

    view! {
      <Show
        when=move || !sent.get()
        fallback=|| view! {
          <div class="contact-thanks">
            <h3>"Thank you"</h3>
            <p>"We'll be in touch within two working days."</p>
          </div>
        }
      >
        <form class="contact-form stack" on:submit=submit>
          <input
            placeholder="Name"
            prop:value=move || name.get()
            on:input=move |ev| name.set(event_target_value(&ev))
          />
          <span class="warn">{error_for(Field::Name)}</span>
          <input
            type="email"
            placeholder="Email"
            prop:value=move || email.get()
            on:input=move |ev| email.set(event_target_value(&ev))
          />
          <span class="warn">{error_for(Field::Email)}</span>
          <input
            placeholder="Company (optional)"
            prop:value=move || company.get()
            on:input=move |ev| company.set(event_target_value(&ev))
          />
          <span class="warn">{error_for(Field::Company)}</span>
          <textarea
            placeholder="How can we help?"
            prop:value=move || message.get()
            on:input=move |ev| message.set(event_target_value(&ev))
          ></textarea>
          <span class="warn">{error_for(Field::Message)}</span>
          <button type="submit">"Send message"</button>
        </form>
      </Show>
    }
}
