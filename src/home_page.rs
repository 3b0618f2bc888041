//! The landing page of the web app.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{LINK_STYLE, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
};

/// Route handler for the home page.
pub async fn get_home_page() -> Markup {
    let nav_bar = NavBar::new(endpoints::HOME_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-3xl font-bold" { "Welcome to Finance Tracker" }

            p { "Keep track of where your money comes from and where it goes." }

            ul class="list-disc"
            {
                li
                {
                    a href=(endpoints::TRANSACTIONS_VIEW) class=(LINK_STYLE) { "Transactions" }
                    ": record income and expenses, and filter them by category or date."
                }
                li
                {
                    a href=(endpoints::CATEGORIES_VIEW) class=(LINK_STYLE) { "Categories" }
                    ": manage the categories your transactions belong to."
                }
            }
        }
    );

    base("Home", &content)
}
