//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{blog::BlogPage, blog_post::BlogPostPage, home::HomePage, testimonials::TestimonialsPage};
use crate::state::content::ContentState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="tr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared content state and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(ContentState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/praxis.css"/>
        <Title text="Praxis Psikoloji"/>

        <Router>
            <header class="site-header">
                <a class="site-header__brand" href="/">"Praxis Psikoloji"</a>
                <nav class="site-header__nav">
                    <a href="/blog">"Blog"</a>
                    <a href="/yorumlar">"Yorumlar"</a>
                    <a href="/#iletisim">"İletişim"</a>
                </nav>
            </header>
            <main>
                <Routes fallback=|| "Sayfa bulunamadı.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("blog") view=BlogPage/>
                    <Route path=(StaticSegment("blog"), ParamSegment("slug")) view=BlogPostPage/>
                    <Route path=StaticSegment("yorumlar") view=TestimonialsPage/>
                </Routes>
            </main>
        </Router>
    }
}
