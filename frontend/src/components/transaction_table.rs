use shared::{format_amount, Transaction, TransactionKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub transactions: Vec<Transaction>,
    pub on_delete: Callback<String>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    html! {
        <section class="transactions-section card">
            <h2>{"Transactions"}</h2>

            {if props.transactions.is_empty() {
                html! { <div class="table-empty">{"No transactions yet"}</div> }
            } else {
                html! {
                    <div class="table-container">
                        <table class="transactions-table">
                            <thead>
                                <tr>
                                    <th>{"Description"}</th>
                                    <th>{"Amount"}</th>
                                    <th>{"Type"}</th>
                                    <th>{"Date"}</th>
                                    <th>{"Action"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for props.transactions.iter().map(|transaction| {
                                    let amount_class = match transaction.kind {
                                        TransactionKind::Income => "amount income",
                                        TransactionKind::Expense => "amount expense",
                                    };
                                    let on_delete = {
                                        let on_delete = props.on_delete.clone();
                                        let id = transaction.id.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            on_delete.emit(id.clone());
                                        })
                                    };

                                    html! {
                                        <tr key={transaction.id.clone()}>
                                            <td class="description">{&transaction.description}</td>
                                            <td class={amount_class}>{format_amount(transaction.amount)}</td>
                                            <td class="kind">{transaction.kind.label()}</td>
                                            <td class="date">{transaction.display_date()}</td>
                                            <td>
                                                <button class="btn btn-delete" onclick={on_delete}>
                                                    {"Delete"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            }}
        </section>
    }
}
