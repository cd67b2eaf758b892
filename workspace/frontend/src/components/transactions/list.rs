use common::Transaction;
use yew::prelude::*;

use crate::common::loading::{SkeletonLine, SKELETON_CLASS};
use crate::mock_data::get_mock_transactions;

const DEFAULT_LIMIT: usize = 10;
const MAX_SKELETON_ROWS: usize = 5;

#[derive(Properties, PartialEq)]
pub struct TransactionListProps {
    #[prop_or(DEFAULT_LIMIT)]
    pub limit: usize,
    #[prop_or_default]
    pub loading: bool,
}

/// First `limit` fixture transactions, plus whether "view all" is offered.
///
/// The affordance compares the sliced length against `limit`, so it shows
/// whenever the slice is full even if nothing lies beyond it.
pub fn recent_transactions(limit: usize) -> (Vec<Transaction>, bool) {
    let shown: Vec<Transaction> = get_mock_transactions().into_iter().take(limit).collect();
    let view_all = limit > 0 && shown.len() >= limit;
    (shown, view_all)
}

#[function_component(TransactionList)]
pub fn transaction_list(props: &TransactionListProps) -> Html {
    if props.loading {
        return html! {
            <div class="space-y-3">
                { for (0..props.limit.min(MAX_SKELETON_ROWS)).map(|i| html! {
                    <div key={i} class={classes!("flex", "items-center", "justify-between", "p-3", SKELETON_CLASS)}>
                        <div class="flex-1 space-y-2">
                            <SkeletonLine class={classes!("h-4", "w-1/2")} />
                            <SkeletonLine class={classes!("h-3", "w-1/4")} />
                        </div>
                        <SkeletonLine class={classes!("h-4", "w-16")} />
                    </div>
                })}
            </div>
        };
    }

    let (transactions, view_all) = recent_transactions(props.limit);

    html! {
        <div class="space-y-3" data-testid="transaction-list">
            { for transactions.iter().map(|txn| {
                let amount_class = if txn.is_inflow() { "text-success" } else { "text-error" };
                html! {
                    <div key={txn.id.clone()} class="flex items-center justify-between p-3 hover:bg-base-200 rounded-lg" data-testid="transaction-row">
                        <div class="flex-1">
                            <p class="font-medium text-gray-900">{&txn.description}</p>
                            <p class="text-sm text-gray-500">{txn.date.format("%Y-%m-%d").to_string()}</p>
                        </div>
                        <div class={classes!("font-semibold", amount_class)}>
                            {txn.display_amount()}
                        </div>
                    </div>
                }
            })}

            if view_all {
                <div class="text-center pt-3">
                    <button class="btn btn-link btn-sm text-primary">{"View All Transactions"}</button>
                </div>
            }
        </div>
    }
}
