use yew::platform::spawn_local;
use yew::prelude::*;

use crate::app::api::ApiCtx;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Probe {
    Checking,
    Connected,
    Unavailable,
}

/// Footer badge with a one-shot probe of the backend's registry connection.
#[function_component(ApiStatusBadge)]
pub(crate) fn api_status_badge() -> Html {
    let api = use_context::<ApiCtx>();
    let probe = use_state(|| Probe::Checking);

    {
        let probe = probe.clone();
        use_effect_with_deps(
            move |api| {
                if let Some(api) = api {
                    let client = api.client.clone();
                    spawn_local(async move {
                        let next = match client.test_connection().await {
                            Ok(report) if report.connected => Probe::Connected,
                            Ok(_) | Err(_) => Probe::Unavailable,
                        };
                        probe.set(next);
                    });
                } else {
                    probe.set(Probe::Unavailable);
                }
                || ()
            },
            api,
        );
    }

    let (class, label) = match *probe {
        Probe::Checking => ("pill subtle", "Checking API"),
        Probe::Connected => ("pill live", "API Connected"),
        Probe::Unavailable => ("pill warn", "API Unavailable"),
    };

    html! {
        <span class={class} role="status">{label}</span>
    }
}
