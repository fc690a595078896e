use yew::prelude::*;

use crate::components::create_location_form::CreateLocationForm;
use crate::hooks::use_fetch;
use crate::models::{City, GeoLocation, Street};

#[derive(Clone, Copy, PartialEq)]
enum CreateOrderStep {
    Locations,
    Confirm,
}

/// Create-order flow: step one collects the route endpoints, step two shows
/// the confirmation summary. The page owns the location state; the form only
/// hands values up through its callbacks.
#[function_component(CreateOrderPage)]
pub fn create_order_page() -> Html {
    let step = use_state(|| CreateOrderStep::Locations);
    let from_location = use_state(|| None::<GeoLocation>);
    let to_location = use_state(|| None::<GeoLocation>);

    let streets = use_fetch::<Vec<Street>>("/street", Vec::new());
    let cities = use_fetch::<Vec<City>>("/city", Vec::new());

    let set_from_location = {
        let from_location = from_location.clone();
        Callback::from(move |location: GeoLocation| {
            from_location.set(Some(location));
        })
    };

    let set_to_location = {
        let to_location = to_location.clone();
        Callback::from(move |location: GeoLocation| {
            to_location.set(Some(location));
        })
    };

    let next = {
        let step = step.clone();
        Callback::from(move |_| {
            log::info!("📦 Ubicaciones confirmadas, avanzando al resumen");
            step.set(CreateOrderStep::Confirm);
        })
    };

    let describe = |location: &Option<GeoLocation>| -> String {
        match location {
            Some(loc) => format!("{}, {} {}", loc.city.name, loc.street.name, loc.home),
            None => "—".to_string(),
        }
    };

    html! {
        <div class="page create-order-page">
            <h2>{"Create Order"}</h2>

            {
                match *step {
                    CreateOrderStep::Locations => html! {
                        <CreateLocationForm
                            next={next}
                            set_from_location={set_from_location}
                            set_to_location={set_to_location}
                            from_location={(*from_location).clone()}
                            to_location={(*to_location).clone()}
                            streets={streets.data().clone()}
                            cities={cities.data().clone()}
                        />
                    },
                    CreateOrderStep::Confirm => html! {
                        <div class="order-summary">
                            <h3>{"Route"}</h3>
                            <p>
                                <span class="route-endpoint">{describe(&from_location)}</span>
                                {" → "}
                                <span class="route-endpoint">{describe(&to_location)}</span>
                            </p>
                            <p class="order-summary-hint">
                                {"Locations saved. The order can now be submitted for review."}
                            </p>
                        </div>
                    },
                }
            }
        </div>
    }
}
