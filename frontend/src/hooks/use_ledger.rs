use shared::{
    trend_points, CategoryBreakdown, Categorizer, Ledger, NewTransaction, Totals, Transaction,
    TransactionKind, TrendPoint,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Everything the view layer reads: the live list, the derived views, and
/// the add-transaction form state.
#[derive(Clone, PartialEq)]
pub struct LedgerState {
    pub transactions: Vec<Transaction>,
    pub totals: Totals,
    pub breakdown: CategoryBreakdown,
    pub trend: Vec<TrendPoint>,

    // Add transaction form state
    pub description: String,
    pub amount: String,
    pub kind: TransactionKind,
    pub form_error: Option<String>,
    pub form_success: bool,
}

#[derive(Clone)]
pub struct LedgerActions {
    pub submit: Callback<()>,
    pub delete: Callback<String>,
    pub set_kind: Callback<TransactionKind>,
    pub on_description_change: Callback<Event>,
    pub on_amount_change: Callback<Event>,
}

pub struct UseLedgerResult {
    pub state: LedgerState,
    pub actions: LedgerActions,
}

/// Owns the ledger and the add-transaction form, recomputing every derived
/// view on each change. Components below receive read-only data plus the
/// callbacks returned here.
#[hook]
pub fn use_ledger() -> UseLedgerResult {
    let ledger = use_state(Ledger::new);
    let description = use_state(String::new);
    let amount = use_state(String::new);
    let kind = use_state(|| TransactionKind::Expense);
    let form_error = use_state(|| Option::<String>::None);
    let form_success = use_state(|| false);

    let submit = {
        let ledger = ledger.clone();
        let description = description.clone();
        let amount = amount.clone();
        let kind = kind.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();

        Callback::from(move |_| {
            let input = NewTransaction {
                description: (*description).clone(),
                amount_input: (*amount).clone(),
                kind: *kind,
                date: None,
            };

            let mut next = (*ledger).clone();
            match next.add(input) {
                Ok(_) => {
                    ledger.set(next);
                    description.set(String::new());
                    amount.set(String::new());
                    form_error.set(None);
                    form_success.set(true);

                    // Clear success message after 3 seconds
                    let form_success = form_success.clone();
                    spawn_local(async move {
                        gloo::timers::future::TimeoutFuture::new(3000).await;
                        form_success.set(false);
                    });
                }
                Err(errors) => {
                    form_success.set(false);
                    form_error.set(errors.first().map(|error| error.to_string()));
                }
            }
        })
    };

    let delete = {
        let ledger = ledger.clone();
        Callback::from(move |id: String| {
            let mut next = (*ledger).clone();
            next.remove(&id);
            ledger.set(next);
        })
    };

    let set_kind = {
        let kind = kind.clone();
        Callback::from(move |next_kind: TransactionKind| {
            kind.set(next_kind);
        })
    };

    let on_description_change = {
        let description = description.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    let on_amount_change = {
        let amount = amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let transactions = ledger.transactions().to_vec();
    let totals = Totals::compute(&transactions);
    let breakdown = CategoryBreakdown::compute(&transactions, &Categorizer::new());
    let trend = trend_points(&transactions);

    UseLedgerResult {
        state: LedgerState {
            transactions,
            totals,
            breakdown,
            trend,
            description: (*description).clone(),
            amount: (*amount).clone(),
            kind: *kind,
            form_error: (*form_error).clone(),
            form_success: *form_success,
        },
        actions: LedgerActions {
            submit,
            delete,
            set_kind,
            on_description_change,
            on_amount_change,
        },
    }
}
