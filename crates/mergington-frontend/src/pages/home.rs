use gloo_timers::callback::Timeout;
use yew::prelude::*;

use mergington::async_callback;
use mergington::data::Activities;
use mergington::id::{ActivityName, ParticipantEmail};
use mergington::log;

use crate::components::{ActivityCard, Notice, NoticeBanner, SignupForm};
use crate::providers::api;

/// How long a signup or unregister message stays visible.
const NOTICE_TIMEOUT_MS: u32 = 5_000;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let api = use_memo((), |_| api::create());
    let activities = use_state(|| None::<Activities>);
    let load_error = use_state(|| None::<String>);
    let notice = use_state(|| None::<Notice>);

    let reload = async_callback!([api, activities, load_error] {
        match api.list_activities().await {
            Ok(data) => {
                activities.set(Some(data));
                load_error.set(None);
            }
            Err(err) => {
                log::error!("Failed to load activities: {}", err);
                load_error.set(Some("Failed to load activities. Please try again later.".to_string()));
            }
        }
    });

    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    // Hide the latest message after a while; a newer message restarts the timer
    {
        let notice = notice.clone();
        use_effect_with((*notice).clone(), move |current| {
            let timeout = current
                .is_some()
                .then(|| Timeout::new(NOTICE_TIMEOUT_MS, move || notice.set(None)));
            move || drop(timeout)
        });
    }

    let on_signup = async_callback!([api, notice, reload] |request| {
        let (activity, email): (ActivityName, ParticipantEmail) = request;
        match api.signup(&activity, &email).await {
            Ok(response) => {
                notice.set(Some(Notice::success(response.message)));
                reload.emit(());
            }
            Err(err) => notice.set(Some(Notice::error(err.detail()))),
        }
    });

    let on_unregister = async_callback!([api, notice, reload] |request| {
        let (activity, email): (ActivityName, ParticipantEmail) = request;
        match api.unregister(&activity, &email).await {
            Ok(response) => {
                notice.set(Some(Notice::success(response.message)));
                reload.emit(());
            }
            Err(err) => notice.set(Some(Notice::error(err.detail()))),
        }
    });

    let names: Vec<ActivityName> = activities
        .as_ref()
        .map(|list| list.names().cloned().collect())
        .unwrap_or_default();

    html! {
        <div class="p-8 max-w-5xl mx-auto">
            <header class="mb-8">
                <h1 class="text-3xl font-bold">{ "Mergington High School" }</h1>
                <h2 class="text-xl text-gray-600">{ "Extracurricular Activities" }</h2>
            </header>

            <div class="grid gap-8 md:grid-cols-2">
                <section>
                    <h3 class="text-xl font-semibold mb-4">{ "Available Activities" }</h3>
                    {
                        if let Some(error) = load_error.as_ref() {
                            html! {
                                <div class="p-4 bg-red-100 text-red-700 rounded">
                                    <p>{ error }</p>
                                </div>
                            }
                        } else if let Some(list) = activities.as_ref() {
                            html! {
                                <div class="space-y-4">
                                    {
                                        list.iter().map(|(name, activity)| {
                                            html! {
                                                <ActivityCard
                                                    key={name.to_string()}
                                                    name={name.clone()}
                                                    activity={activity.clone()}
                                                    on_unregister={on_unregister.clone()}
                                                />
                                            }
                                        }).collect::<Html>()
                                    }
                                </div>
                            }
                        } else {
                            html! { <p>{ "Loading activities..." }</p> }
                        }
                    }
                </section>

                <section>
                    <SignupForm activities={names} on_signup={on_signup} />
                    <NoticeBanner notice={(*notice).clone()} />
                </section>
            </div>
        </div>
    }
}
