//! HTML rendering for the transaction pages.

use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_STYLE,
        FORM_TEXT_INPUT_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, TABLE_STYLE, base, format_currency,
    },
    navigation::NavBar,
};

use super::{core::Transaction, query::SortKey, summary_page::CategoryTotal};

/// The max number of graphemes to display in the transaction table rows before
/// truncating and displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 32;

fn truncate_description(description: &str) -> String {
    let graphemes: Vec<&str> = description.graphemes(true).collect();

    if graphemes.len() <= MAX_DESCRIPTION_GRAPHEMES {
        description.to_owned()
    } else {
        format!("{}…", graphemes[..MAX_DESCRIPTION_GRAPHEMES].concat())
    }
}

fn sort_header_link(title: &str, sort_key: SortKey, current: SortKey) -> Markup {
    let url = format!(
        "{}?sortBy={}",
        endpoints::TRANSACTIONS_VIEW,
        sort_key.as_query_value()
    );

    html! {
        th class=(TABLE_HEADER_STYLE)
        {
            @if sort_key == current {
                span class="sort-active" { (title) }
            } @else {
                a href=(url) class=(LINK_STYLE) { (title) }
            }
        }
    }
}

fn new_transaction_form() -> Markup {
    html! {
        form method="post" action=(endpoints::CREATE_TRANSACTION) class=(FORM_STYLE)
        {
            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }
                input type="number" step="0.01" name="amount" id="amount"
                    class=(FORM_TEXT_INPUT_STYLE) required;
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }
                input type="text" name="category" id="category"
                    class=(FORM_TEXT_INPUT_STYLE) required;
            }

            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }
                input type="date" name="date" id="date"
                    class=(FORM_TEXT_INPUT_STYLE) required;
            }

            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }
                input type="text" name="description" id="description"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add transaction" }
        }
    }
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let edit_url = format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction.id);
    let remove_url = format_endpoint(endpoints::REMOVE_TRANSACTION, transaction.id);

    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (transaction.date) }
            td class=(TABLE_CELL_STYLE) { (transaction.category) }
            td class=(TABLE_CELL_STYLE) { (truncate_description(&transaction.description)) }
            td class=(TABLE_CELL_STYLE) { (format_currency(transaction.amount)) }
            td class=(TABLE_CELL_STYLE)
            {
                a href=(edit_url) class=(LINK_STYLE) { "Edit" }
                " "
                a href=(remove_url) class=(BUTTON_DELETE_STYLE) { "Remove" }
            }
        }
    }
}

/// Render the transactions page: the add-transaction form followed by the
/// sorted transaction table.
pub(super) fn transactions_view(transactions: &[Transaction], sort_key: SortKey) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 { "Transactions" }

            (new_transaction_form())

            @if transactions.is_empty() {
                p class="empty-state" { "No transactions yet. Add your first one above." }
            } @else {
                table class=(TABLE_STYLE)
                {
                    thead
                    {
                        tr
                        {
                            (sort_header_link("Date", SortKey::Date, sort_key))
                            (sort_header_link("Category", SortKey::Category, sort_key))
                            (sort_header_link("Description", SortKey::Description, sort_key))
                            (sort_header_link("Amount", SortKey::Amount, sort_key))
                            th class=(TABLE_HEADER_STYLE) { "Actions" }
                        }
                    }

                    tbody
                    {
                        @for transaction in transactions
                        {
                            (transaction_row(transaction))
                        }
                    }
                }
            }
        }
    };

    base("Transactions", &content)
}

/// Render the form for editing an existing transaction.
pub(super) fn edit_transaction_view(transaction: &Transaction) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 { "Edit transaction" }

            form method="post" action=(endpoints::UPDATE_TRANSACTION) class=(FORM_STYLE)
            {
                input type="hidden" name="itemId" value=(transaction.id);

                div
                {
                    label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }
                    input type="number" step="0.01" name="amount" id="amount"
                        class=(FORM_TEXT_INPUT_STYLE) required value=(transaction.amount);
                }

                div
                {
                    label for="category" class=(FORM_LABEL_STYLE) { "Category" }
                    input type="text" name="category" id="category"
                        class=(FORM_TEXT_INPUT_STYLE) required value=(transaction.category);
                }

                div
                {
                    label for="date" class=(FORM_LABEL_STYLE) { "Date" }
                    input type="date" name="date" id="date"
                        class=(FORM_TEXT_INPUT_STYLE) required value=(transaction.date);
                }

                div
                {
                    label for="description" class=(FORM_LABEL_STYLE) { "Description" }
                    input type="text" name="description" id="description"
                        class=(FORM_TEXT_INPUT_STYLE) value=(transaction.description);
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save changes" }
            }

            p
            {
                a href=(endpoints::TRANSACTIONS_VIEW) class=(LINK_STYLE) { "Back to transactions" }
            }
        }
    };

    base("Edit Transaction", &content)
}

/// Render the per-category totals page.
pub(super) fn summary_view(totals: &[CategoryTotal]) -> Markup {
    let nav_bar = NavBar::new(endpoints::SUMMARY_VIEW).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 { "Transaction Summary" }

            @if totals.is_empty() {
                p class="empty-state" { "No transactions to summarize." }
            } @else {
                table class=(TABLE_STYLE)
                {
                    thead
                    {
                        tr
                        {
                            th class=(TABLE_HEADER_STYLE) { "Category" }
                            th class=(TABLE_HEADER_STYLE) { "Total" }
                        }
                    }

                    tbody
                    {
                        @for total in totals
                        {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td class=(TABLE_CELL_STYLE) { (total.category) }
                                td class=(TABLE_CELL_STYLE) { (format_currency(total.total)) }
                            }
                        }
                    }
                }
            }
        }
    };

    base("Summary", &content)
}
