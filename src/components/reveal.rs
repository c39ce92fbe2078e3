//! Scroll-triggered reveal wrapper. Sections render hidden and get an
//! `in-view` class the first time they intersect the viewport; browsers
//! without IntersectionObserver just show everything immediately.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const REVEAL_THRESHOLD: f64 = 0.12;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut observer_slot: Option<IntersectionObserver> = None;
                let mut callback_slot: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>> =
                    None;

                if let Some(element) = node.cast::<Element>() {
                    let on_intersect = {
                        let visible = visible.clone();
                        Closure::wrap(Box::new(
                            move |entries: js_sys::Array, observer: IntersectionObserver| {
                                let hit = entries.iter().any(|entry| {
                                    entry
                                        .unchecked_into::<IntersectionObserverEntry>()
                                        .is_intersecting()
                                });
                                if hit {
                                    visible.set(true);
                                    observer.disconnect();
                                }
                            },
                        )
                            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
                    };

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
                    match IntersectionObserver::new_with_options(
                        on_intersect.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(observer) => {
                            observer.observe(&element);
                            observer_slot = Some(observer);
                            callback_slot = Some(on_intersect);
                        }
                        // No observer support: skip the animation entirely.
                        Err(_) => visible.set(true),
                    }
                }

                move || {
                    if let Some(observer) = observer_slot {
                        observer.disconnect();
                    }
                    drop(callback_slot);
                }
            },
            node.clone(),
        );
    }

    html! {
        <section
            id={props.id.clone()}
            ref={node}
            class={classes!(props.class.clone(), (*visible).then_some("in-view"))}
        >
            { props.children.clone() }
        </section>
    }
}
