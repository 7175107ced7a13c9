use yew::prelude::*;
use web_sys::{window, HtmlInputElement};
use gloo_net::http::Request;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use gloo_console::log;

use crate::config;

/// The four quote signals. Empty string means unset. Owned here; the
/// engagement tracker only observes snapshots of this struct.
#[derive(Clone, PartialEq, Default)]
pub struct QuoteFields {
    pub from_zip: String,
    pub to_zip: String,
    pub from_city: String,
    pub to_city: String,
}

#[derive(Deserialize)]
struct ZipLookupResponse {
    city: String,
    state: String,
}

#[derive(Properties, PartialEq)]
pub struct QuoteStartProps {
    /// Fired on every keystroke in either zip input.
    pub on_input_changed: Callback<()>,
    /// Fired with a fresh snapshot whenever any field changes.
    pub on_fields_changed: Callback<QuoteFields>,
    pub validated: bool,
}

fn looks_like_zip(value: &str) -> bool {
    value.len() == 5 && value.chars().all(|c| c.is_ascii_digit())
}

/// Origin/destination zip inputs with city resolution through the lookup
/// service. Resolution failures just leave the city empty.
#[function_component(QuoteStart)]
pub fn quote_start(props: &QuoteStartProps) -> Html {
    let from_zip = use_state(String::new);
    let to_zip = use_state(String::new);
    let from_city = use_state(String::new);
    let to_city = use_state(String::new);

    {
        let on_fields_changed = props.on_fields_changed.clone();
        use_effect_with_deps(
            move |(from_zip, to_zip, from_city, to_city): &(String, String, String, String)| {
                on_fields_changed.emit(QuoteFields {
                    from_zip: from_zip.clone(),
                    to_zip: to_zip.clone(),
                    from_city: from_city.clone(),
                    to_city: to_city.clone(),
                });
                || ()
            },
            (
                (*from_zip).clone(),
                (*to_zip).clone(),
                (*from_city).clone(),
                (*to_city).clone(),
            ),
        );
    }

    let resolve_city = |city_handle: UseStateHandle<String>| {
        move |zip: String| {
            let city_handle = city_handle.clone();
            spawn_local(async move {
                match Request::get(&format!("{}/api/zip/{}", config::get_resolver_url(), zip))
                    .send()
                    .await
                {
                    Ok(response) if response.ok() => {
                        match response.json::<ZipLookupResponse>().await {
                            Ok(lookup) => {
                                city_handle.set(format!("{}, {}", lookup.city, lookup.state));
                            }
                            Err(_) => {
                                log!("Zip lookup returned an unreadable payload");
                            }
                        }
                    }
                    _ => {
                        log!("Zip lookup failed for", zip);
                    }
                }
            });
        }
    };

    let make_oninput = |zip_handle: UseStateHandle<String>, city_handle: UseStateHandle<String>| {
        let on_input_changed = props.on_input_changed.clone();
        let resolve = resolve_city(city_handle.clone());
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            on_input_changed.emit(());
            if looks_like_zip(&value) {
                resolve(value.clone());
            } else {
                city_handle.set(String::new());
            }
            zip_handle.set(value);
        })
    };

    let on_from_input = make_oninput(from_zip.clone(), from_city.clone());
    let on_to_input = make_oninput(to_zip.clone(), to_city.clone());

    let start_quote = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(window) = window() {
            let _ = window.location().set_href(config::get_quote_funnel_path());
        }
    });

    html! {
        <div class="quote-start">
            <div class="quote-field">
                <label for="from-zip">{"Moving from"}</label>
                <input
                    id="from-zip"
                    type="text"
                    inputmode="numeric"
                    maxlength="5"
                    placeholder="ZIP code"
                    value={(*from_zip).clone()}
                    oninput={on_from_input}
                />
                {
                    if !from_city.is_empty() {
                        html! { <span class="resolved-city">{(*from_city).clone()}</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="quote-field">
                <label for="to-zip">{"Moving to"}</label>
                <input
                    id="to-zip"
                    type="text"
                    inputmode="numeric"
                    maxlength="5"
                    placeholder="ZIP code"
                    value={(*to_zip).clone()}
                    oninput={on_to_input}
                />
                {
                    if !to_city.is_empty() {
                        html! { <span class="resolved-city">{(*to_city).clone()}</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <button
                class={classes!("quote-button", props.validated.then(|| "ready"))}
                onclick={start_quote}
            >
                {"Get My Free Quote"}
            </button>
            <style>
                {r#"
                .quote-start {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: flex-end;
                    justify-content: center;
                    gap: 1rem;
                    padding: 1.5rem;
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 16px;
                }
                .quote-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                }
                .quote-field label {
                    color: #999;
                    font-size: 0.85rem;
                }
                .quote-field input {
                    width: 9rem;
                    padding: 0.7rem 0.9rem;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: #111;
                    color: #fff;
                    font-size: 1rem;
                }
                .quote-field input:focus {
                    outline: none;
                    border-color: #1E90FF;
                }
                .resolved-city {
                    color: #7EB2FF;
                    font-size: 0.8rem;
                }
                .quote-button {
                    padding: 0.8rem 1.6rem;
                    border: none;
                    border-radius: 8px;
                    background: #333;
                    color: #fff;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }
                .quote-button.ready {
                    background: #1E90FF;
                }
                @media (max-width: 768px) {
                    .quote-start {
                        flex-direction: column;
                        align-items: stretch;
                    }
                    .quote-field input {
                        width: 100%;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_digits_look_like_a_zip() {
        assert!(looks_like_zip("07030"));
        assert!(looks_like_zip("94110"));
    }

    #[test]
    fn partial_or_junk_input_does_not() {
        assert!(!looks_like_zip(""));
        assert!(!looks_like_zip("0703"));
        assert!(!looks_like_zip("070301"));
        assert!(!looks_like_zip("0703o"));
    }
}
