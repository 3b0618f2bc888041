//! Calls to the categories resource of the REST API.

use crate::{
    category::{Category, NewCategory},
    client::{ApiClient, ClientError},
    endpoints,
};

/// Fetch every category with `GET /categories`.
pub async fn get_categories<C: ApiClient>(api: &C) -> Result<Vec<Category>, ClientError> {
    api.get(endpoints::CATEGORIES, &[]).await
}

/// Create a category with `POST /categories`, sending `data` as the body.
pub async fn create_category<C: ApiClient>(
    api: &C,
    data: &NewCategory,
) -> Result<Category, ClientError> {
    api.post(endpoints::CATEGORIES, data).await
}

#[cfg(test)]
mod categories_service_tests {
    use serde_json::json;

    use crate::{
        category::{CategoryName, NewCategory},
        client::{
            categories_service::{create_category, get_categories},
            test_client::{RecordedRequest, RecordingClient},
        },
    };

    #[tokio::test]
    async fn get_categories_sends_plain_get() {
        let client = RecordingClient::responding_with(json!([
            { "category_id": 1, "name": "Food" },
        ]));

        let categories = get_categories(&client)
            .await
            .expect("Could not get categories");

        assert_eq!(categories[0].name, CategoryName::new_unchecked("Food"));
        assert_eq!(
            client.requests(),
            [RecordedRequest::Get {
                path: "/categories".to_owned(),
                query: vec![],
            }]
        );
    }

    #[tokio::test]
    async fn create_category_posts_name() {
        let client = RecordingClient::responding_with(json!({ "category_id": 5, "name": "Rent" }));

        let category = create_category(
            &client,
            &NewCategory {
                name: "Rent".to_owned(),
            },
        )
        .await
        .expect("Could not create category");

        assert_eq!(category.id, 5);
        assert_eq!(
            client.requests(),
            [RecordedRequest::Post {
                path: "/categories".to_owned(),
                body: json!({ "name": "Rent" }),
            }]
        );
    }
}
