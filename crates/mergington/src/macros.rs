#[macro_export]
/// Allow defining an async callback that can be used in Yew components.
/// This macro simplifies the creation of async callbacks by automatically
/// handling the cloning of variables and the spawning of async tasks.
///
/// ## With the macro
/// The macro can be used in two forms:
///
/// 1. Without an event parameter:
/// ```compile_fail
/// let reload = async_callback!([api, activities, error_msg] {
///     match api.list_activities().await {
///         Ok(data) => activities.set(Some(data)),
///         Err(err) => error_msg.set(Some(err.detail())),
///     }
/// });
/// ```
///
/// 2. With an event parameter:
/// ```compile_fail
/// let on_submit = async_callback!([api, email, activity, notice] |event| {
///     event.prevent_default();
///     match api.signup(&activity, &email).await {
///         Ok(response) => notice.set(Some(Notice::success(response.message))),
///         Err(err) => notice.set(Some(Notice::error(err.detail()))),
///     }
/// });
/// ```
///
/// ## Without the macro
/// Every captured handle has to be cloned twice by hand: once into the
/// callback and once more into each spawned future.
macro_rules! async_callback {
    // Version with event parameter
    ([$($var:ident),* $(,)?] |$event:ident| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |$event| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };

    // Version without event parameter
    ([$($var:ident),* $(,)?] $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |_| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };
}
