use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    /// ISO-8601 date.
    pub published: &'static str,
    pub author: &'static str,
    pub excerpt: &'static str,
    pub image: &'static str,
}

// Newest first.
static POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "heat-pumps-in-process-plants",
        title: "Heat pumps in process plants: what we learned at Coldstream",
        published: "2024-09-12",
        author: "Priya Nair",
        excerpt: "Recovering refrigeration reject heat is rarely as simple as the brochure suggests.",
        image: "/assets/blog/heat-pumps.svg",
    },
    BlogPost {
        slug: "retrofitting-under-traffic",
        title: "Retrofitting a bridge without closing it",
        published: "2024-03-04",
        author: "Tom Okafor",
        excerpt: "Night possessions, temporary bearings and the art of staging.",
        image: "/assets/blog/retrofit.svg",
    },
    BlogPost {
        slug: "mass-timber-spans",
        title: "How far can mass timber span?",
        published: "2023-11-20",
        author: "Elena Brandt",
        excerpt: "Hybrid floors, vibration criteria and where steel still earns its place.",
        image: "/assets/blog/mass-timber.svg",
    },
];

pub fn blog_posts() -> &'static [BlogPost] {
    POSTS
}

pub fn recent_posts(n: usize) -> &'static [BlogPost] {
    &POSTS[..n.min(POSTS.len())]
}
