use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::PreloadOverlay;
use crate::config;
use crate::content::ContentDocument;
use crate::hooks::{use_breakpoint, use_reduced_motion, SiteEnvironment};
use crate::pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <main class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="cta-primary">
                        {"Back to the start"}
                    </Link<Route>>
                </main>
            }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let content = use_memo(|_| ContentDocument::embedded(), ());
    let motion = use_reduced_motion();
    let breakpoint = use_breakpoint();
    let preloading = use_state(config::play_preload);

    let environment = SiteEnvironment { motion, breakpoint };
    let on_preload_complete = {
        let preloading = preloading.clone();
        Callback::from(move |_| {
            info!("Preload finished");
            preloading.set(false);
        })
    };

    html! {
        <ContextProvider<SiteEnvironment> context={environment}>
            <ContextProvider<Rc<ContentDocument>> context={content.clone()}>
                if *preloading {
                    <PreloadOverlay
                        lines={content.preload_lines.clone()}
                        on_complete={on_preload_complete}
                    />
                }
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<Rc<ContentDocument>>>
        </ContextProvider<SiteEnvironment>>
    }
}
