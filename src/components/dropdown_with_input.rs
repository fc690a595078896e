use web_sys::HtmlInputElement;
use yew::prelude::*;

/// What the widget hands back: either a pick from the option list or text
/// the user typed freely. Both resolve to the same string downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Known(String),
    FreeText(String),
}

impl Selection {
    pub fn value(&self) -> &str {
        match self {
            Selection::Known(name) | Selection::FreeText(name) => name,
        }
    }

    pub fn into_value(self) -> String {
        match self {
            Selection::Known(name) | Selection::FreeText(name) => name,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DropdownWithInputProps {
    pub placeholder: AttrValue,
    pub options: Vec<String>,
    pub on_change: Callback<Selection>,
    #[prop_or_default]
    pub default_value: Option<String>,
}

/// Searchable dropdown that also accepts free-text entry; the input is not
/// restricted to the provided option list.
#[function_component(DropdownWithInput)]
pub fn dropdown_with_input(props: &DropdownWithInputProps) -> Html {
    let value = use_state(|| props.default_value.clone().unwrap_or_default());
    let open = use_state(|| false);

    let on_input = {
        let value = value.clone();
        let open = open.clone();
        let on_change = props.on_change.clone();

        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let text = input.value();
                value.set(text.clone());
                open.set(true);
                on_change.emit(Selection::FreeText(text));
            }
        })
    };

    let on_focus = {
        let open = open.clone();
        Callback::from(move |_: FocusEvent| {
            open.set(true);
        })
    };

    let needle = value.to_lowercase();
    let suggestions: Vec<String> = props
        .options
        .iter()
        .filter(|option| needle.is_empty() || option.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    html! {
        <div class="dropdown-with-input">
            <input
                type="text"
                placeholder={props.placeholder.clone()}
                value={(*value).clone()}
                oninput={on_input}
                onfocus={on_focus}
            />
            {
                if *open && !suggestions.is_empty() {
                    html! {
                        <ul class="dropdown-options">
                            { for suggestions.into_iter().map(|option| {
                                let value = value.clone();
                                let open = open.clone();
                                let on_change = props.on_change.clone();
                                let picked = option.clone();
                                let label = option.clone();

                                let on_pick = Callback::from(move |_: MouseEvent| {
                                    value.set(picked.clone());
                                    open.set(false);
                                    on_change.emit(Selection::Known(picked.clone()));
                                });

                                html! {
                                    // mousedown beats the input's blur
                                    <li key={option} onmousedown={on_pick}>{label}</li>
                                }
                            }) }
                        </ul>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_free_text_resolve_to_the_same_value() {
        assert_eq!(Selection::Known("Riga".to_string()).value(), "Riga");
        assert_eq!(Selection::FreeText("Riga".to_string()).value(), "Riga");
    }

    #[test]
    fn into_value_unwraps_either_variant() {
        assert_eq!(
            Selection::FreeText("Elm Street".to_string()).into_value(),
            "Elm Street"
        );
        assert_eq!(
            Selection::Known("Elm Street".to_string()).into_value(),
            "Elm Street"
        );
    }
}
