use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::dropdown_with_input::{DropdownWithInput, Selection};
use crate::models::{City, GeoLocation, Street};

/// Form fields, used as keys for inline validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CityFrom,
    StreetFrom,
    HomeFrom,
    CityTo,
    StreetTo,
    HomeTo,
}

/// Raw form state. Everything starts unset unless seeded from the incoming
/// location props.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationFormValues {
    pub city_from: Option<String>,
    pub street_from: Option<String>,
    pub home_from: Option<u32>,
    pub city_to: Option<String>,
    pub street_to: Option<String>,
    pub home_to: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// Per-field messages, rendered inline.
    MissingFields(Vec<(Field, &'static str)>),
    /// The duplicate-location invariant; reported as a toast, independent of
    /// field validation.
    SameLocation,
}

impl LocationFormValues {
    pub fn seeded(from: &Option<GeoLocation>, to: &Option<GeoLocation>) -> Self {
        Self {
            city_from: from.as_ref().map(|loc| loc.city.name.clone()),
            street_from: from.as_ref().map(|loc| loc.street.name.clone()),
            home_from: from.as_ref().map(|loc| loc.home),
            city_to: to.as_ref().map(|loc| loc.city.name.clone()),
            street_to: to.as_ref().map(|loc| loc.street.name.clone()),
            home_to: to.as_ref().map(|loc| loc.home),
        }
    }

    /// Validate and build the `(destination, source)` pair.
    ///
    /// Locations that serialize identically abort the submission: the two
    /// endpoints of a route must differ.
    pub fn finish(&self) -> Result<(GeoLocation, GeoLocation), SubmitError> {
        let mut missing = Vec::new();
        if blank(&self.city_from) {
            missing.push((Field::CityFrom, "Missing source city"));
        }
        if blank(&self.city_to) {
            missing.push((Field::CityTo, "Missing destination city"));
        }
        if blank(&self.street_from) {
            missing.push((Field::StreetFrom, "Missing source street"));
        }
        if blank(&self.street_to) {
            missing.push((Field::StreetTo, "Missing destination street!"));
        }
        if self.home_from.is_none() {
            missing.push((Field::HomeFrom, "Missing home"));
        }
        if self.home_to.is_none() {
            missing.push((Field::HomeTo, "Missing home"));
        }
        if !missing.is_empty() {
            return Err(SubmitError::MissingFields(missing));
        }

        let to_location = GeoLocation::new(
            self.home_to.unwrap(),
            self.street_to.as_deref().unwrap(),
            self.city_to.as_deref().unwrap(),
        );
        let from_location = GeoLocation::new(
            self.home_from.unwrap(),
            self.street_from.as_deref().unwrap(),
            self.city_from.as_deref().unwrap(),
        );

        if to_location.structurally_equal(&from_location) {
            return Err(SubmitError::SameLocation);
        }

        Ok((to_location, from_location))
    }
}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

/// Drive a submission to completion. On success the callbacks fire in the
/// fixed order destination setter → source setter → advance; on any error
/// none of them fire.
pub fn finish_submission(
    values: &LocationFormValues,
    set_to_location: &Callback<GeoLocation>,
    set_from_location: &Callback<GeoLocation>,
    next: &Callback<()>,
) -> Result<(), SubmitError> {
    let (to_location, from_location) = values.finish()?;
    set_to_location.emit(to_location);
    set_from_location.emit(from_location);
    next.emit(());
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct CreateLocationFormProps {
    pub next: Callback<()>,
    pub set_from_location: Callback<GeoLocation>,
    pub set_to_location: Callback<GeoLocation>,
    #[prop_or_default]
    pub from_location: Option<GeoLocation>,
    #[prop_or_default]
    pub to_location: Option<GeoLocation>,
    pub streets: Vec<Street>,
    pub cities: Vec<City>,
}

/// Single-shot source/destination form. Stays in `editing` until a submit
/// passes validation; there is no transition back.
#[function_component(CreateLocationForm)]
pub fn create_location_form(props: &CreateLocationFormProps) -> Html {
    // Seeded once at first render; later prop changes do not reseed the
    // fields (same capture-once behavior the flow has always had).
    let values = use_state({
        let from = props.from_location.clone();
        let to = props.to_location.clone();
        move || LocationFormValues::seeded(&from, &to)
    });
    let errors = use_state(HashMap::<Field, &'static str>::new);
    let toast = use_state(|| None::<&'static str>);

    // The dropdowns don't bind to form state; each change handler propagates
    // the selection explicitly.
    let set_field = |apply: fn(&mut LocationFormValues, String)| {
        let values = values.clone();
        Callback::from(move |selection: Selection| {
            let mut next = (*values).clone();
            apply(&mut next, selection.into_value());
            values.set(next);
        })
    };

    let on_city_from = set_field(|v, name| v.city_from = Some(name));
    let on_city_to = set_field(|v, name| v.city_to = Some(name));
    let on_street_from = set_field(|v, name| v.street_from = Some(name));
    let on_street_to = set_field(|v, name| v.street_to = Some(name));

    let set_home = |apply: fn(&mut LocationFormValues, Option<u32>)| {
        let values = values.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                let mut next = (*values).clone();
                apply(&mut next, input.value().parse::<u32>().ok());
                values.set(next);
            }
        })
    };

    let on_home_from = set_home(|v, home| v.home_from = home);
    let on_home_to = set_home(|v, home| v.home_to = home);

    let on_submit = {
        let values = values.clone();
        let errors = errors.clone();
        let toast = toast.clone();
        let set_to_location = props.set_to_location.clone();
        let set_from_location = props.set_from_location.clone();
        let next = props.next.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            match finish_submission(&values, &set_to_location, &set_from_location, &next) {
                Ok(()) => {
                    errors.set(HashMap::new());
                }
                Err(SubmitError::MissingFields(missing)) => {
                    log::warn!("⚠️ Formulario incompleto: {} campo(s)", missing.len());
                    errors.set(missing.into_iter().collect());
                }
                Err(SubmitError::SameLocation) => {
                    errors.set(HashMap::new());
                    toast.set(Some("Locations must not be the same."));

                    let toast = toast.clone();
                    Timeout::new(3_000, move || {
                        toast.set(None);
                    })
                    .forget();
                }
            }
        })
    };

    let field_error = |field: Field| -> Html {
        match errors.get(&field) {
            Some(message) => html! { <div class="field-error">{*message}</div> },
            None => html! {},
        }
    };

    let city_options: Vec<String> = props.cities.iter().map(|c| c.name.clone()).collect();
    let street_options: Vec<String> = props.streets.iter().map(|s| s.name.clone()).collect();

    let home_value = |home: Option<u32>| home.map(|h| h.to_string()).unwrap_or_default();

    html! {
        <form class="location-form" onsubmit={on_submit}>
            <h3>{"Please add source and destination locations:"}</h3>

            <div class="form-row">
                <div class="form-group">
                    <label>{"Source"}</label>
                    <DropdownWithInput
                        placeholder="City Name"
                        options={city_options.clone()}
                        on_change={on_city_from}
                        default_value={values.city_from.clone()}
                    />
                    { field_error(Field::CityFrom) }
                </div>

                <div class="form-group">
                    <label>{"Destination"}</label>
                    <DropdownWithInput
                        placeholder="City Name"
                        options={city_options}
                        on_change={on_city_to}
                        default_value={values.city_to.clone()}
                    />
                    { field_error(Field::CityTo) }
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <DropdownWithInput
                        placeholder="Street Name"
                        options={street_options.clone()}
                        on_change={on_street_from}
                        default_value={values.street_from.clone()}
                    />
                    { field_error(Field::StreetFrom) }
                </div>

                <div class="form-group">
                    <DropdownWithInput
                        placeholder="Street Name"
                        options={street_options}
                        on_change={on_street_to}
                        default_value={values.street_to.clone()}
                    />
                    { field_error(Field::StreetTo) }
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <input
                        type="number"
                        min="0"
                        placeholder="Home"
                        value={home_value(values.home_from)}
                        oninput={on_home_from}
                    />
                    { field_error(Field::HomeFrom) }
                </div>

                <div class="form-group">
                    <input
                        type="number"
                        min="0"
                        placeholder="Home"
                        value={home_value(values.home_to)}
                        oninput={on_home_to}
                    />
                    { field_error(Field::HomeTo) }
                </div>
            </div>

            <button type="submit" class="btn-primary">{"Submit"}</button>

            {
                if let Some(message) = *toast {
                    html! { <div class="form-toast error">{message}</div> }
                } else {
                    html! {}
                }
            }
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn filled(home_from: u32, home_to: u32) -> LocationFormValues {
        LocationFormValues {
            city_from: Some("Riga".to_string()),
            street_from: Some("Brivibas".to_string()),
            home_from: Some(home_from),
            city_to: Some("Riga".to_string()),
            street_to: Some("Brivibas".to_string()),
            home_to: Some(home_to),
        }
    }

    fn recording_callbacks(
        calls: &Rc<RefCell<Vec<&'static str>>>,
    ) -> (Callback<GeoLocation>, Callback<GeoLocation>, Callback<()>) {
        let to_calls = calls.clone();
        let from_calls = calls.clone();
        let next_calls = calls.clone();
        (
            Callback::from(move |_| to_calls.borrow_mut().push("to")),
            Callback::from(move |_| from_calls.borrow_mut().push("from")),
            Callback::from(move |_| next_calls.borrow_mut().push("next")),
        )
    }

    #[test]
    fn identical_locations_abort_without_firing_callbacks() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let (set_to, set_from, next) = recording_callbacks(&calls);

        let result = finish_submission(&filled(4, 4), &set_to, &set_from, &next);

        assert_eq!(result, Err(SubmitError::SameLocation));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn differing_locations_fire_destination_source_then_advance() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let (set_to, set_from, next) = recording_callbacks(&calls);

        let result = finish_submission(&filled(4, 5), &set_to, &set_from, &next);

        assert!(result.is_ok());
        assert_eq!(*calls.borrow(), vec!["to", "from", "next"]);
    }

    #[test]
    fn missing_fields_report_their_messages() {
        let values = LocationFormValues {
            city_from: Some("  ".to_string()),
            ..Default::default()
        };

        let Err(SubmitError::MissingFields(missing)) = values.finish() else {
            panic!("expected missing-field errors");
        };

        let by_field: HashMap<Field, &str> = missing.into_iter().collect();
        assert_eq!(by_field[&Field::CityFrom], "Missing source city");
        assert_eq!(by_field[&Field::CityTo], "Missing destination city");
        assert_eq!(by_field[&Field::StreetFrom], "Missing source street");
        assert_eq!(by_field[&Field::StreetTo], "Missing destination street!");
        assert_eq!(by_field[&Field::HomeFrom], "Missing home");
        assert_eq!(by_field[&Field::HomeTo], "Missing home");
    }

    #[test]
    fn missing_fields_fire_no_callbacks() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let (set_to, set_from, next) = recording_callbacks(&calls);

        let result =
            finish_submission(&LocationFormValues::default(), &set_to, &set_from, &next);

        assert!(matches!(result, Err(SubmitError::MissingFields(_))));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn seeding_copies_all_six_fields() {
        let from = Some(GeoLocation::new(1, "Elm Street", "Riga"));
        let to = Some(GeoLocation::new(2, "Main Street", "Daugavpils"));

        let values = LocationFormValues::seeded(&from, &to);

        assert_eq!(values.city_from.as_deref(), Some("Riga"));
        assert_eq!(values.street_from.as_deref(), Some("Elm Street"));
        assert_eq!(values.home_from, Some(1));
        assert_eq!(values.city_to.as_deref(), Some("Daugavpils"));
        assert_eq!(values.street_to.as_deref(), Some("Main Street"));
        assert_eq!(values.home_to, Some(2));
    }

    #[test]
    fn submission_passes_built_locations_to_the_setters() {
        let received = Rc::new(RefCell::new(Vec::<GeoLocation>::new()));
        let to_received = received.clone();
        let from_received = received.clone();

        let set_to = Callback::from(move |loc| to_received.borrow_mut().push(loc));
        let set_from = Callback::from(move |loc| from_received.borrow_mut().push(loc));
        let next = Callback::from(|_| {});

        let mut values = filled(4, 9);
        values.city_to = Some("Daugavpils".to_string());
        finish_submission(&values, &set_to, &set_from, &next).unwrap();

        let received = received.borrow();
        assert_eq!(received[0], GeoLocation::new(9, "Brivibas", "Daugavpils"));
        assert_eq!(received[1], GeoLocation::new(4, "Brivibas", "Riga"));
    }
}
