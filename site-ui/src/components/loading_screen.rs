use leptos::*;
use site_content::SITE_NAME;

/// Full-screen splash shown until the first load completes.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
      <div class="loading-screen" role="status" aria-live="polite">
        <div class="loading-mark">{SITE_NAME}</div>
        <div class="loading-bar"><span></span></div>
      </div>
    }
}

/// Thin overlay laid over the current page during a route transition.
#[component]
pub fn RouteOverlay() -> impl IntoView {
    view! {
      <div class="route-overlay" aria-hidden="true">
        <div class="loading-bar"><span></span></div>
      </div>
    }
}
