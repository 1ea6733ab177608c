use yew::prelude::*;

use mergington::data::Activity;
use mergington::id::{ActivityName, ParticipantEmail};

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub name: ActivityName,
    pub activity: Activity,
    /// Fired with the activity and the participant whose delete button was pressed.
    pub on_unregister: Callback<(ActivityName, ParticipantEmail)>,
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let activity = &props.activity;
    let spots_left = activity.spots_left();

    let participants = if activity.participants.is_empty() {
        html! {
            <p class="text-sm italic text-gray-500">{ "No participants yet" }</p>
        }
    } else {
        activity
            .participants
            .iter()
            .map(|email| {
                let onclick = {
                    let name = props.name.clone();
                    let email = email.clone();
                    let on_unregister = props.on_unregister.clone();
                    Callback::from(move |_| on_unregister.emit((name.clone(), email.clone())))
                };

                html! {
                    <li key={email.to_string()} class="flex items-center justify-between py-1">
                        <span class="text-sm">{ email.as_str() }</span>
                        <button
                            class="text-red-600 hover:text-red-800 text-sm cursor-pointer"
                            title="Unregister"
                            onclick={onclick}
                        >
                            { "✕" }
                        </button>
                    </li>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class="p-4 border border-gray-200 rounded">
            <h4 class="text-lg font-semibold">{ props.name.as_str() }</h4>
            <p class="mt-1">{ &activity.description }</p>
            <p class="mt-1 text-sm">
                <span class="font-medium">{ "Schedule: " }</span>
                { &activity.schedule }
            </p>
            <p class="mt-1 text-sm">
                <span class="font-medium">{ "Availability: " }</span>
                { format!("{spots_left} spots left") }
            </p>
            <div class="mt-3">
                <h5 class="font-medium">{ "Participants" }</h5>
                <ul class="divide-y divide-gray-100">
                    { participants }
                </ul>
            </div>
        </div>
    }
}
