use yew::prelude::*;

use mergington::id::{ActivityName, ParticipantEmail};

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    pub activities: Vec<ActivityName>,
    pub on_signup: Callback<(ActivityName, ParticipantEmail)>,
}

#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let email = use_state(String::new);
    let selected = use_state(String::new);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                selected.set(select.value());
            }
        })
    };

    let on_submit = {
        let email = email.clone();
        let selected = selected.clone();
        let on_signup = props.on_signup.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let address = email.trim().to_string();
            if address.is_empty() || selected.is_empty() {
                return;
            }

            on_signup.emit((
                ActivityName::from((*selected).clone()),
                ParticipantEmail::from(address),
            ));
            email.set(String::new());
        })
    };

    html! {
        <form class="p-4 border border-gray-200 rounded space-y-3" onsubmit={on_submit}>
            <h3 class="text-xl font-semibold">{ "Sign Up for an Activity" }</h3>
            <div>
                <label for="email" class="block font-medium">{ "Student Email:" }</label>
                <input
                    id="email"
                    type="email"
                    required=true
                    class="w-full px-3 py-2 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                    placeholder="your-email@mergington.edu"
                    value={(*email).clone()}
                    oninput={on_email}
                />
            </div>
            <div>
                <label for="activity" class="block font-medium">{ "Select Activity:" }</label>
                <select
                    id="activity"
                    required=true
                    class="w-full px-3 py-2 border border-gray-300 rounded"
                    onchange={on_select}
                >
                    <option value="" selected={selected.is_empty()}>{ "-- Select an activity --" }</option>
                    {
                        props.activities.iter().map(|name| {
                            html! {
                                <option
                                    key={name.to_string()}
                                    value={name.to_string()}
                                    selected={*selected == name.as_str()}
                                >
                                    { name.as_str() }
                                </option>
                            }
                        }).collect::<Html>()
                    }
                </select>
            </div>
            <button
                type="submit"
                class="bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700 cursor-pointer"
            >
                { "Sign Up" }
            </button>
        </form>
    }
}
