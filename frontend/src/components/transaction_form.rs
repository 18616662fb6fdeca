use shared::TransactionKind;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    // Form state
    pub description: String,
    pub amount: String,
    pub kind: TransactionKind,
    pub form_error: Option<String>,
    pub form_success: bool,

    // Event handlers
    pub on_description_change: Callback<Event>,
    pub on_amount_change: Callback<Event>,
    pub on_kind_change: Callback<TransactionKind>,
    pub on_submit: Callback<()>,
}

#[function_component(TransactionForm)]
pub fn transaction_form(props: &TransactionFormProps) -> Html {
    let kind_tab = |kind: TransactionKind, label: &str| -> Html {
        let is_active = props.kind == kind;
        let on_kind_change = props.on_kind_change.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            on_kind_change.emit(kind);
        });
        html! {
            <button
                type="button"
                class={if is_active { "kind-tab active" } else { "kind-tab" }}
                {onclick}
            >
                {label}
            </button>
        }
    };

    html! {
        <section class="add-transaction-section card">
            {if let Some(error) = props.form_error.as_ref() {
                html! {
                    <div class="form-message error">
                        {error}
                    </div>
                }
            } else { html! {} }}

            {if props.form_success {
                html! {
                    <div class="form-message success">
                        {"🎉 Transaction added!"}
                    </div>
                }
            } else { html! {} }}

            <form class="add-transaction-form" onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <div class="form-grid">
                    <div class="form-group">
                        <label for="description">{"Description"}</label>
                        <input
                            type="text"
                            id="description"
                            placeholder="e.g., Grocery"
                            value={props.description.clone()}
                            onchange={props.on_description_change.clone()}
                        />
                    </div>

                    <div class="form-group">
                        <label for="amount">{"Amount"}</label>
                        <input
                            type="number"
                            id="amount"
                            placeholder="e.g., 500"
                            step="0.01"
                            min="0.01"
                            value={props.amount.clone()}
                            onchange={props.on_amount_change.clone()}
                        />
                    </div>

                    <div class="form-group">
                        <label>{"Type"}</label>
                        <div class="kind-tabs">
                            {kind_tab(TransactionKind::Income, "Income")}
                            {kind_tab(TransactionKind::Expense, "Expense")}
                        </div>
                    </div>
                </div>

                <button type="submit" class="btn btn-primary add-transaction-btn">
                    {"Add Transaction"}
                </button>
            </form>
        </section>
    }
}
