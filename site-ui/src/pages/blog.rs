use leptos::*;
use site_content::{blog_posts, BlogPost};

#[component]
pub fn PostCard(post: &'static BlogPost) -> impl IntoView {
    view! {
      <article class="card post">
        <img src=post.image alt="" loading="lazy"/>
        <h3>{post.title}</h3>
        <p class="meta">{format!("{} · {}", post.published, post.author)}</p>
        <p>{post.excerpt}</p>
      </article>
    }
}

#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
      <section class="page blog">
        <h1>"Insights"</h1>
        <div class="grid three">
          {blog_posts().iter().map(|post| view! { <PostCard post=post/> }).collect_view()}
        </div>
      </section>
    }
}
