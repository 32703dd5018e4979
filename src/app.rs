use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::core::api::DEFAULT_API_BASE;
use crate::ui::api::{API_META_NAME, provide_api};
use crate::ui::layout::SiteLayout;
use crate::ui::motion::MotionStyles;
use crate::ui::pages::{AdminDashboardPage, AdminLoginPage, NotFoundPage};
use crate::ui::session::provide_session_context;

/// API base URL for the client, taken from the server config when rendering
fn api_base() -> String {
    #[cfg(feature = "ssr")]
    {
        use_context::<crate::core::config::Config>()
            .map(|config| config.api_url)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
    }
    #[cfg(not(feature = "ssr"))]
    {
        DEFAULT_API_BASE.to_string()
    }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_META_NAME content=api_base()/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_api();
    provide_session_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/edutalks.css"/>
        <Title text="Edutalks - Where Education Meets Conversation"/>
        <MotionStyles/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/admin/login") view=AdminLoginPage/>
                <Route path=path!("/admin/dashboard") view=AdminDashboardPage/>
                // The layout picks the page itself so it can run the exit
                // transition; the child routes only mark known paths.
                <ParentRoute path=path!("") view=SiteLayout>
                    <Route path=path!("") view=|| ()/>
                    <Route path=path!("/about") view=|| ()/>
                    <Route path=path!("/services") view=|| ()/>
                    <Route path=path!("/internships") view=|| ()/>
                    <Route path=path!("/careers") view=|| ()/>
                    <Route path=path!("/contact") view=|| ()/>
                    <Route path=path!("/products") view=|| ()/>
                    <Route path=path!("/privacy-policy") view=|| ()/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
