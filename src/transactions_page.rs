//! The page for listing, filtering and adding transactions.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::{Form, FormRejection};
use maud::{Markup, html};

use crate::{
    WebState,
    bad_request::InvalidForm,
    category::Category,
    client::{
        ClientError, TransactionFilters, create_transaction, get_categories, get_transactions,
    },
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, CATEGORY_BADGE_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_currency,
    },
    navigation::NavBar,
    transaction::{NewTransaction, TransactionType, TransactionWithCategory},
};

/// Route handler for the transactions page.
///
/// The page's query string is forwarded to the API as transaction filters.
/// Parameters with empty values, e.g. from blank fields in the filter form,
/// are dropped.
pub async fn get_transactions_page(
    State(state): State<WebState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ClientError> {
    let filters: TransactionFilters = params
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect();

    let transactions = get_transactions(&state.api_client, &filters).await?;
    let categories = get_categories(&state.api_client).await?;

    Ok(transactions_view(&transactions, &categories, &filters).into_response())
}

/// Route handler for the new transaction form, redirects back to the transactions page.
pub async fn create_transaction_from_form(
    State(state): State<WebState>,
    form: Result<Form<NewTransaction>, FormRejection>,
) -> Result<Redirect, Response> {
    let Form(new_transaction) = match form {
        Ok(form) => form,
        Err(rejection) => return Err(InvalidForm::from(rejection).into_response()),
    };

    let created = create_transaction(&state.api_client, &new_transaction)
        .await
        .map_err(IntoResponse::into_response)?;
    tracing::info!("Created {} transaction(s)", created.len());

    Ok(Redirect::to(endpoints::TRANSACTIONS_VIEW))
}

fn transactions_view(
    transactions: &[TransactionWithCategory],
    categories: &[Category],
    filters: &TransactionFilters,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold" { "Transactions" }

            (filter_form(categories, filters))

            (transactions_table(transactions))

            h2 class="text-lg font-bold" { "Add Transaction" }

            (new_transaction_form(categories))
        }
    );

    base("Transactions", &content)
}

fn filter_form(categories: &[Category], filters: &TransactionFilters) -> Markup {
    let selected_category = filters.get("category");
    let selected_type = filters.get("transaction_type");

    html!(
        form
            id="filter-form"
            method="get"
            action=(endpoints::TRANSACTIONS_VIEW)
            class="flex flex-wrap items-end gap-4"
        {
            div
            {
                label for="filter-category" class=(FORM_LABEL_STYLE) { "Category" }

                select name="category" id="filter-category" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" { "All categories" }

                    @for category in categories {
                        @let name: &str = category.name.as_ref();
                        option value=(name) selected[selected_category == Some(name)]
                        {
                            (category.name)
                        }
                    }
                }
            }

            div
            {
                label for="filter-type" class=(FORM_LABEL_STYLE) { "Type" }

                select name="transaction_type" id="filter-type" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" { "All types" }

                    @for transaction_type in [TransactionType::Income, TransactionType::Expense] {
                        option
                            value=(transaction_type)
                            selected[selected_type == Some(transaction_type.as_str())]
                        {
                            (type_label(transaction_type))
                        }
                    }
                }
            }

            div
            {
                label for="filter-start-date" class=(FORM_LABEL_STYLE) { "From" }

                input
                    name="start_date"
                    id="filter-start-date"
                    type="date"
                    value=[filters.get("start_date")]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="filter-end-date" class=(FORM_LABEL_STYLE) { "To" }

                input
                    name="end_date"
                    id="filter-end-date"
                    type="date"
                    value=[filters.get("end_date")]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div class="flex gap-4 items-center"
            {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Filter" }

                @if !filters.is_empty() {
                    a href=(endpoints::TRANSACTIONS_VIEW) class=(LINK_STYLE) { "Clear" }
                }
            }
        }
    )
}

fn transactions_table(transactions: &[TransactionWithCategory]) -> Markup {
    let table_row = |transaction: &TransactionWithCategory| {
        html!(
            tr class=(TABLE_ROW_STYLE)
            {
                td class=(TABLE_CELL_STYLE) { (transaction.date) }
                td class=(TABLE_CELL_STYLE) { (transaction.description) }
                td class=(TABLE_CELL_STYLE)
                {
                    @if let Some(category) = &transaction.category {
                        span class=(CATEGORY_BADGE_STYLE) { (category) }
                    }
                }
                td class=(TABLE_CELL_STYLE) { (type_label(transaction.transaction_type)) }
                td class="px-6 py-4 text-right" { (format_currency(signed_amount(transaction))) }
            }
        )
    };

    html!(
        div class="dark:bg-gray-800 overflow-x-auto"
        {
            table
                id="transactions"
                class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                        th scope="col" class="px-6 py-4 text-right" { "Amount" }
                    }
                }

                tbody
                {
                    @for transaction in transactions {
                        (table_row(transaction))
                    }

                    @if transactions.is_empty() {
                        tr
                        {
                            td
                                colspan="5"
                                class="px-6 py-4 text-center text-gray-500 dark:text-gray-400"
                            {
                                "No transactions found."
                            }
                        }
                    }
                }
            }
        }
    )
}

fn new_transaction_form(categories: &[Category]) -> Markup {
    if categories.is_empty() {
        return html!(
            p
            {
                "Transactions need a category. "
                a href=(endpoints::CATEGORIES_VIEW) class=(LINK_STYLE)
                {
                    "Create your first category"
                }
            }
        );
    }

    html!(
        form
            id="new-transaction-form"
            method="post"
            action=(endpoints::TRANSACTIONS_VIEW)
            class=(FORM_CONTAINER_STYLE)
        {
            div
            {
                label for="transaction_date" class=(FORM_LABEL_STYLE) { "Date" }

                input
                    name="transaction_date"
                    id="transaction_date"
                    type="date"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                input
                    name="description"
                    id="description"
                    type="text"
                    placeholder="Description"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="0.01"
                    min="0.01"
                    placeholder="0.00"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="category_id" class=(FORM_LABEL_STYLE) { "Category" }

                select name="category_id" id="category_id" required class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for category in categories {
                        option value=(category.id) { (category.name) }
                    }
                }
            }

            fieldset
            {
                legend class=(FORM_LABEL_STYLE) { "Transaction type" }

                @for transaction_type in [TransactionType::Expense, TransactionType::Income] {
                    label class="inline-flex items-center gap-2 me-4"
                    {
                        input
                            name="transaction_type"
                            type="radio"
                            value=(transaction_type)
                            checked[transaction_type == TransactionType::Expense]
                            required;

                        (type_label(transaction_type))
                    }
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Transaction" }
        }
    )
}

fn type_label(transaction_type: TransactionType) -> &'static str {
    match transaction_type {
        TransactionType::Income => "Income",
        TransactionType::Expense => "Expense",
    }
}

/// Expenses are shown as negative amounts.
fn signed_amount(transaction: &TransactionWithCategory) -> f64 {
    match transaction.transaction_type {
        TransactionType::Income => transaction.amount,
        TransactionType::Expense => -transaction.amount,
    }
}
