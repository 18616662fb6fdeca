use shared::{format_amount, Totals};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryCardsProps {
    pub totals: Totals,
}

#[function_component(SummaryCards)]
pub fn summary_cards(props: &SummaryCardsProps) -> Html {
    html! {
        <section class="summary-cards">
            <div class="card summary-card">
                <h2>{"Total Income"}</h2>
                <p class="summary-value income">{format_amount(props.totals.total_income)}</p>
            </div>
            <div class="card summary-card">
                <h2>{"Total Expense"}</h2>
                <p class="summary-value expense">{format_amount(props.totals.total_expense)}</p>
            </div>
            <div class="card summary-card">
                <h2>{"Balance"}</h2>
                <p class="summary-value balance">{format_amount(props.totals.balance)}</p>
            </div>
        </section>
    }
}
