//! Expenso, a browser-rendered expense tracker.
//!
//! All state lives in memory for the lifetime of a page view. The `App`
//! component owns the ledger and the display mode, passing read-only
//! derived data down to the components and callback handles back up.

mod components;
mod hooks;
mod services;

use components::charts::{CategoryChart, TrendChart};
use components::header::Header;
use components::summary_cards::SummaryCards;
use components::transaction_form::TransactionForm;
use components::transaction_table::TransactionTable;
use hooks::use_ledger::use_ledger;
use shared::FinanceReport;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let dark_mode = use_state(|| false);
    let ledger = use_ledger();

    let on_toggle_dark_mode = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |_| dark_mode.set(!*dark_mode))
    };

    let on_download_pdf = {
        let transactions = ledger.state.transactions.clone();
        Callback::from(move |_| {
            let report = FinanceReport::compile(&transactions);
            match services::pdf::render_report(&report) {
                Ok(bytes) => {
                    if let Err(error) =
                        services::download::save_file("finance_report.pdf", "application/pdf", &bytes)
                    {
                        gloo::console::error!(format!("PDF download failed: {}", error));
                    }
                }
                Err(error) => {
                    gloo::console::error!(format!("PDF export failed: {}", error));
                }
            }
        })
    };

    html! {
        <div class={if *dark_mode { "app dark" } else { "app" }}>
            <Header
                dark_mode={*dark_mode}
                on_toggle_dark_mode={on_toggle_dark_mode}
                on_download_pdf={on_download_pdf}
            />

            <main class="main">
                <TransactionForm
                    description={ledger.state.description.clone()}
                    amount={ledger.state.amount.clone()}
                    kind={ledger.state.kind}
                    form_error={ledger.state.form_error.clone()}
                    form_success={ledger.state.form_success}
                    on_description_change={ledger.actions.on_description_change.clone()}
                    on_amount_change={ledger.actions.on_amount_change.clone()}
                    on_kind_change={ledger.actions.set_kind.clone()}
                    on_submit={ledger.actions.submit.clone()}
                />

                <SummaryCards totals={ledger.state.totals} />

                <TransactionTable
                    transactions={ledger.state.transactions.clone()}
                    on_delete={ledger.actions.delete.clone()}
                />

                <CategoryChart breakdown={ledger.state.breakdown.clone()} />
                <TrendChart points={ledger.state.trend.clone()} />
            </main>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
