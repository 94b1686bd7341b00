use leptos::*;
use site_content::forms::{validate_email, FieldError};

/// Signup acknowledged locally; nothing is sent anywhere.
#[component]
pub fn Newsletter() -> impl IntoView {
    let email = create_rw_signal(String::new());
    let outcome = create_rw_signal(None::<Result<(), FieldError>>);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let result = validate_email(&email.get_untracked());
        if result.is_ok() {
            tracing::info!("newsletter signup acknowledged");
            email.set(String::new());
        }
        outcome.set(Some(result));
    };

    view! {
      <form class="newsletter" on:submit=submit>
        <input
          type="email"
          placeholder="you@company.com"
          prop:value=move || email.get()
          on:input=move |ev| email.set(event_target_value(&ev))
        />
        <button type="submit">"Subscribe"</button>
        {move || match outcome.get() {
          Some(Ok(())) => view! { <p class="ok">"Thanks, you're on the list."</p> }.into_view(),
          Some(Err(err)) => view! { <p class="warn">{err.to_string()}</p> }.into_view(),
          None => ().into_view(),
        }}
      </form>
    }
}
