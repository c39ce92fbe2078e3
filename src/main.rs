use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent, Node};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod dom;
mod form;

mod components {
    pub mod alert;
    pub mod contact;
    pub mod reveal;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

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
        Route::Home | Route::NotFound => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state_eq(|| false);
    let nav_ref = use_node_ref();

    // Escape and clicks outside the header close the mobile menu.
    {
        let menu_open = menu_open.clone();
        let nav_ref = nav_ref.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();

                let key_close = {
                    let menu_open = menu_open.clone();
                    Closure::wrap(Box::new(move |event: KeyboardEvent| {
                        if event.key() == "Escape" {
                            menu_open.set(false);
                        }
                    }) as Box<dyn FnMut(KeyboardEvent)>)
                };
                document
                    .add_event_listener_with_callback("keydown", key_close.as_ref().unchecked_ref())
                    .unwrap();

                let click_close = {
                    let menu_open = menu_open.clone();
                    Closure::wrap(Box::new(move |event: MouseEvent| {
                        let inside = event
                            .target()
                            .and_then(|target| target.dyn_into::<Node>().ok())
                            .map_or(false, |node| {
                                nav_ref
                                    .cast::<Node>()
                                    .map_or(false, |nav| nav.contains(Some(&node)))
                            });
                        if !inside {
                            menu_open.set(false);
                        }
                    }) as Box<dyn FnMut(MouseEvent)>)
                };
                document
                    .add_event_listener_with_callback("click", click_close.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    document
                        .remove_event_listener_with_callback(
                            "keydown",
                            key_close.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    document
                        .remove_event_listener_with_callback(
                            "click",
                            click_close.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let scroll_link = |target: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            dom::scroll_to_section(target);
            menu_open.set(false);
        })
    };

    html! {
        <header class="site-header" ref={nav_ref}>
            <div class="nav-content">
                <a class="nav-logo" href="#top" data-scroll="true" onclick={scroll_link("top")}>
                    {"Shumba Creations"}
                </a>
                <button
                    class="nav-toggle"
                    aria-label="Toggle navigation"
                    aria-controls="site-nav"
                    aria-expanded={if *menu_open { "true" } else { "false" }}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav
                    id="site-nav"
                    class={classes!("site-nav", (*menu_open).then_some("nav-open"))}
                >
                    <a class="nav-link" href="#services" data-scroll="true" onclick={scroll_link("services")}>
                        {"Services"}
                    </a>
                    <a class="nav-link" href="#pricing" data-scroll="true" onclick={scroll_link("pricing")}>
                        {"Pricing"}
                    </a>
                    <a class="nav-link" href="#contact" data-scroll="true" onclick={scroll_link("contact")}>
                        {"Contact"}
                    </a>
                </nav>
            </div>
            <style>
                {r#"
                .site-header {
                    position: sticky;
                    top: 0;
                    z-index: 20;
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(6px);
                    border-bottom: 1px solid #e5e7eb;
                }
                .nav-content {
                    max-width: 960px;
                    margin: 0 auto;
                    padding: 0.75rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .nav-logo {
                    font-weight: 700;
                    text-decoration: none;
                    color: #111827;
                }
                .site-nav {
                    display: flex;
                    gap: 1.25rem;
                }
                .nav-link {
                    text-decoration: none;
                    color: #374151;
                }
                .nav-link:hover {
                    color: #2563eb;
                }
                .nav-toggle {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    padding: 0.5rem;
                    cursor: pointer;
                }
                .nav-toggle span {
                    width: 22px;
                    height: 2px;
                    background: #111827;
                }
                @media (max-width: 640px) {
                    .nav-toggle {
                        display: flex;
                    }
                    .site-nav {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        gap: 0;
                        background: #fff;
                        border-bottom: 1px solid #e5e7eb;
                    }
                    .site-nav.nav-open {
                        display: flex;
                    }
                    .site-nav .nav-link {
                        padding: 0.9rem 1.5rem;
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Better panic messages in the browser console.
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
