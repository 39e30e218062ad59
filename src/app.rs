use leptos::*;

use crate::{
    application::{with_global_coordinator, with_global_coordinator_mut},
    domain::{
        errors::PricingResult,
        history::HistoryList,
        logging::{LogComponent, get_logger},
        pricing::PricedResult,
    },
    global_state,
    time_utils::{format_generated_at, format_money},
};

/// Submit `raw` through the global coordinator.
///
/// `None` when no coordinator is installed. Rejections are logged here and
/// reported to the user by the view.
pub fn submit_input(raw: &str) -> Option<PricingResult<PricedResult>> {
    let outcome = with_global_coordinator_mut(|coordinator| coordinator.submit(raw));
    match &outcome {
        Some(Ok(_)) => {}
        Some(Err(e)) => get_logger().debug(
            LogComponent::Presentation("App"),
            &format!("submission rejected: {}", e),
        ),
        None => get_logger().error(
            LogComponent::Presentation("App"),
            "submission ignored: coordinator not initialized",
        ),
    }
    outcome
}

/// Identity of a history row. Stable while newer results are prepended.
pub fn history_row_key(entry: &PricedResult) -> (i64, u64) {
    (
        entry.timestamp().timestamp_millis(),
        entry.original_price().to_bits(),
    )
}

fn submit_current_input() {
    let raw = global_state::price_input().get_untracked();
    submit_input(&raw);
}

/// 🦀 Price generator page
#[component]
pub fn App() -> impl IntoView {
    match with_global_coordinator(|coordinator| coordinator.history().len()) {
        Some(stored) => get_logger().debug(
            LogComponent::Presentation("App"),
            &format!("rendering with {} stored results", stored),
        ),
        None => get_logger().warn(
            LogComponent::Presentation("App"),
            "rendering before the coordinator was installed",
        ),
    }

    view! {
        <style>
            {r#"
            .price-generator-app {
                font-family: -apple-system, BlinkMacSystemFont, sans-serif;
                max-width: 640px;
                margin: 0 auto;
                padding: 20px;
            }

            .input-row {
                display: flex;
                gap: 10px;
                margin-bottom: 20px;
            }

            .result {
                padding: 15px;
                margin-bottom: 20px;
                border: 1px solid #4a5d73;
                border-radius: 10px;
            }

            .input-error {
                color: #c0392b;
                margin: -10px 0 20px;
            }

            .history-item {
                padding: 10px;
                border-bottom: 1px solid #ddd;
            }
            "#}
        </style>
        <div class="price-generator-app">
            <h1>"Price Generator"</h1>
            <PriceInput />
            <ResultPanel />
            <HistoryPanel />
        </div>
    }
}

/// Numeric field plus trigger button; Enter in the field submits too.
#[component]
fn PriceInput() -> impl IntoView {
    let input = global_state::price_input();
    let input_error = global_state::input_error();

    view! {
        <div class="input-row">
            <input
                id="originalPrice"
                type="number"
                step="0.01"
                placeholder="Enter original price"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keypress=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        submit_current_input();
                    }
                }
            />
            <button on:click=move |_| submit_current_input()>"Generate Price"</button>
        </div>
        {move || input_error.get().map(|message| view! { <p class="input-error">{message}</p> })}
    }
}

/// Latest result; hidden until the first generation.
#[component]
fn ResultPanel() -> impl IntoView {
    let last_result = global_state::last_result();

    view! {
        <Show when=move || last_result.with(Option::is_some) fallback=|| ()>
            <div id="result" class="result">
                <h3>"Generated Price Result:"</h3>
                {move || last_result.get().map(|result| view! { <ResultDetails result=result /> })}
            </div>
        </Show>
    }
}

#[component]
fn ResultDetails(result: PricedResult) -> impl IntoView {
    view! {
        <p><strong>"Original Price: "</strong>{format_money(result.original_price())}</p>
        <p><strong>"Final Price: "</strong>{format_money(result.final_price())}</p>
        <p><strong>"Applied Rule: "</strong>{result.applied_rule().label().to_string()}</p>
        <p><small>"Generated at: "{format_generated_at(&result.timestamp())}</small></p>
    }
}

/// Stored results, most recent first.
#[component]
fn HistoryPanel() -> impl IntoView {
    let history = global_state::history();

    view! {
        <div id="priceHistory">
            <h3>"Price History"</h3>
            <Show
                when=move || history.with(|h| !h.is_empty())
                fallback=|| view! { <p>"No price history available"</p> }
            >
                <For
                    each=move || history.with(HistoryList::to_vec)
                    key=history_row_key
                    children=move |entry| {
                        view! {
                            <div class="history-item">
                                <p><strong>"Date: "</strong>{format_generated_at(&entry.timestamp())}</p>
                                <p><strong>"Original Price: "</strong>{format_money(entry.original_price())}</p>
                                <p><strong>"Final Price: "</strong>{format_money(entry.final_price())}</p>
                                <p><strong>"Rule Applied: "</strong>{entry.applied_rule().label().to_string()}</p>
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}
