//! The page for listing and adding categories.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{Form, FormRejection};
use maud::{Markup, html};

use crate::{
    WebState,
    bad_request::InvalidForm,
    category::{Category, NewCategory},
    client::{ClientError, create_category, get_categories},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, CATEGORY_BADGE_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, base,
    },
    navigation::NavBar,
};

/// Route handler for the categories page.
pub async fn get_categories_page(State(state): State<WebState>) -> Result<Response, ClientError> {
    let categories = get_categories(&state.api_client).await?;

    Ok(categories_view(&categories).into_response())
}

/// Route handler for the new category form, redirects back to the categories page.
pub async fn create_category_from_form(
    State(state): State<WebState>,
    form: Result<Form<NewCategory>, FormRejection>,
) -> Result<Redirect, Response> {
    let Form(new_category) = match form {
        Ok(form) => form,
        Err(rejection) => return Err(InvalidForm::from(rejection).into_response()),
    };

    let category = create_category(&state.api_client, &new_category)
        .await
        .map_err(IntoResponse::into_response)?;
    tracing::info!("Created category {} ({})", category.name, category.id);

    Ok(Redirect::to(endpoints::CATEGORIES_VIEW))
}

fn categories_view(categories: &[Category]) -> Markup {
    let nav_bar = NavBar::new(endpoints::CATEGORIES_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold" { "Categories" }

            div class="dark:bg-gray-800"
            {
                table
                    id="categories"
                    class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                        }
                    }

                    tbody
                    {
                        @for category in categories {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td class=(TABLE_CELL_STYLE)
                                {
                                    span class=(CATEGORY_BADGE_STYLE) { (category.name) }
                                }
                            }
                        }

                        @if categories.is_empty() {
                            tr
                            {
                                td class="px-6 py-4 text-center text-gray-500 dark:text-gray-400"
                                {
                                    "No categories created yet."
                                }
                            }
                        }
                    }
                }
            }

            form
                id="new-category-form"
                method="post"
                action=(endpoints::CATEGORIES_VIEW)
                class=(FORM_CONTAINER_STYLE)
            {
                div
                {
                    label for="name" class=(FORM_LABEL_STYLE) { "Name" }

                    input
                        name="name"
                        id="name"
                        type="text"
                        placeholder="Category"
                        required
                        autofocus
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Category" }
            }
        }
    );

    base("Categories", &content)
}
