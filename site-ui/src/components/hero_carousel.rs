use leptos::*;
use leptos::leptos_dom::helpers::IntervalHandle;
use site_content::carousel::DEFAULT_INTERVAL;
use site_content::{hero_slides, Carousel};

#[component]
pub fn HeroCarousel() -> impl IntoView {
    let slides = hero_slides();
    let carousel = create_rw_signal(Carousel::new(slides.len()));
    let interval = store_value(None::<IntervalHandle>);

    // Restarting after manual navigation keeps a fresh slide from flipping early.
    let restart = move || {
        if let Some(handle) = interval.get_value() {
            handle.clear();
        }
        let ticking = set_interval_with_handle(
            move || carousel.update(|c| {
                c.forward();
            }),
            DEFAULT_INTERVAL,
        );
        match ticking {
            Ok(handle) => interval.set_value(Some(handle)),
            Err(err) => tracing::warn!(?err, "carousel interval unavailable"),
        }
    };
    restart();
    on_cleanup(move || {
        if let Some(handle) = interval.get_value() {
            handle.clear();
        }
    });

    let step = move |forward: bool| {
        carousel.update(|c| {
            if forward {
                c.forward();
            } else {
                c.back();
            }
        });
        restart();
    };

    view! {
      <div class="carousel">
        {slides
          .iter()
          .enumerate()
          .map(|(i, slide)| view! {
            <figure class="slide" class:current=move || carousel.with(|c| c.index() == i)>
              <img src=slide.image alt=slide.caption/>
              <figcaption>{slide.caption}</figcaption>
            </figure>
          })
          .collect_view()}
        <button class="prev" aria-label="Previous slide" on:click=move |_| step(false)>"‹"</button>
        <button class="next" aria-label="Next slide" on:click=move |_| step(true)>"›"</button>
        <div class="dots">
          {(0..slides.len())
            .map(|i| view! {
              <button
                class:current=move || carousel.with(|c| c.index() == i)
                aria-label=format!("Go to slide {}", i + 1)
                on:click=move |_| {
                  carousel.update(|c| {
                    c.go_to(i);
                  });
                  restart();
                }
              ></button>
            })
            .collect_view()}
        </div>
      </div>
    }
}
