//! One service tile. Reveal plays once when the tile first enters the
//! viewport; hover colors come from CSS pseudo-state only, so the component
//! keeps no interaction state.

use yew::prelude::*;

use crate::components::icons::{self, ServiceIcon};
use crate::reveal::use_reveal_once;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub icon: ServiceIcon,
    pub title: AttrValue,
    pub description: AttrValue,
    /// Reveal delay from the stagger table, in milliseconds.
    pub delay_ms: u64,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal_once(node.clone());

    html! {
        <div
            ref={node}
            class={classes!("service-card", revealed.then(|| "revealed"))}
            style={format!("animation-delay: {}ms;", props.delay_ms)}
        >
            <div class="service-card-watermark" aria-hidden="true">
                { props.icon.watermark(80) }
            </div>

            <div class="service-card-body">
                <div class="service-card-icon">{ props.icon.svg(32) }</div>
                <h3 class="service-card-title">{ props.title.clone() }</h3>
                <p class="service-card-desc">{ props.description.clone() }</p>

                <div class="service-card-more">
                    <span>{ "Dettagli" }</span>
                    { icons::arrow_right(12) }
                </div>
            </div>
        </div>
    }
}
