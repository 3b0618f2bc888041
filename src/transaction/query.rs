//! Parsing of the query parameters used to filter the transaction list.

use std::collections::HashMap;

use time::{Date, macros::format_description};

use crate::{Error, category::CategoryId, transaction::TransactionType};

/// The filters the REST API understands for listing transactions.
///
/// All filters are optional and combined with AND. Unknown query
/// parameters are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionQuery {
    /// Only include transactions in the category with this name, ignoring case.
    pub category: Option<String>,
    /// Only include transactions in the category with this ID.
    pub category_id: Option<CategoryId>,
    /// Only include income or only include expenses.
    pub transaction_type: Option<TransactionType>,
    /// Only include transactions on or after this date.
    pub start_date: Option<Date>,
    /// Only include transactions on or before this date.
    pub end_date: Option<Date>,
}

impl TransactionQuery {
    /// Build a query from raw query parameters.
    ///
    /// # Errors
    /// Returns [Error::InvalidFilter] if a known parameter has a value that
    /// cannot be parsed.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, Error> {
        let mut query = Self::default();

        for (key, value) in params {
            match key.as_str() {
                "category" => query.category = Some(value.to_owned()),
                "category_id" => {
                    query.category_id = Some(
                        value
                            .parse()
                            .map_err(|_| Error::InvalidFilter(key.to_owned(), value.to_owned()))?,
                    )
                }
                "transaction_type" => {
                    query.transaction_type = Some(
                        value
                            .parse()
                            .map_err(|_| Error::InvalidFilter(key.to_owned(), value.to_owned()))?,
                    )
                }
                "start_date" => query.start_date = Some(parse_date(key, value)?),
                "end_date" => query.end_date = Some(parse_date(key, value)?),
                _ => tracing::debug!("Ignoring unknown transaction filter \"{key}\""),
            }
        }

        Ok(query)
    }
}

fn parse_date(key: &str, value: &str) -> Result<Date, Error> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|_| Error::InvalidFilter(key.to_owned(), value.to_owned()))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use time::macros::date;

    use crate::{
        Error,
        transaction::{TransactionQuery, TransactionType},
    };

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn empty_params_give_empty_query() {
        let query = TransactionQuery::from_params(&HashMap::new());

        assert_eq!(query, Ok(TransactionQuery::default()));
    }

    #[test]
    fn parses_known_filters() {
        let query = TransactionQuery::from_params(&params(&[
            ("category", "food"),
            ("category_id", "3"),
            ("transaction_type", "expense"),
            ("start_date", "2025-01-01"),
            ("end_date", "2025-01-31"),
        ]));

        assert_eq!(
            query,
            Ok(TransactionQuery {
                category: Some("food".to_owned()),
                category_id: Some(3),
                transaction_type: Some(TransactionType::Expense),
                start_date: Some(date!(2025 - 01 - 01)),
                end_date: Some(date!(2025 - 01 - 31)),
            })
        );
    }

    #[test]
    fn ignores_unknown_filters() {
        let query = TransactionQuery::from_params(&params(&[("page", "2")]));

        assert_eq!(query, Ok(TransactionQuery::default()));
    }

    #[test]
    fn rejects_malformed_date() {
        let query = TransactionQuery::from_params(&params(&[("start_date", "01/02/2025")]));

        assert_eq!(
            query,
            Err(Error::InvalidFilter(
                "start_date".to_owned(),
                "01/02/2025".to_owned()
            ))
        );
    }

    #[test]
    fn rejects_unknown_transaction_type() {
        let query = TransactionQuery::from_params(&params(&[("transaction_type", "refund")]));

        assert!(matches!(query, Err(Error::InvalidFilter(_, _))));
    }
}
