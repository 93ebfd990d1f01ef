//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/transaction/edit/{transaction_id}',
//! use [format_endpoint].

/// The root route which redirects to the transactions page.
pub const ROOT: &str = "/";
/// The page for displaying a user's transactions.
pub const TRANSACTIONS_VIEW: &str = "/transaction";
/// The trailing-slash form of the transactions page, kept as a redirect so
/// old links keep working.
pub const TRANSACTIONS_VIEW_SLASH: &str = "/transaction/";
/// The route for creating a transaction (form POST from the transactions page).
pub const CREATE_TRANSACTION: &str = "/transaction";
/// The route for deleting a transaction.
pub const REMOVE_TRANSACTION: &str = "/transaction/remove/{transaction_id}";
/// The page for editing an existing transaction.
pub const EDIT_TRANSACTION_VIEW: &str = "/transaction/edit/{transaction_id}";
/// The route for saving an edited transaction.
pub const UPDATE_TRANSACTION: &str = "/transaction/update";
/// The page showing per-category totals.
pub const SUMMARY_VIEW: &str = "/transaction/summary";
/// The route for getting the log in page and logging in a user.
pub const LOG_IN_VIEW: &str = "/login";
/// The route for the client to log out the current user.
pub const LOG_OUT: &str = "/logout";
/// The route for static files.
pub const STATIC: &str = "/static";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/transaction/edit/{transaction_id}',
/// '{transaction_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS_VIEW_SLASH);
        assert_endpoint_is_valid_uri(endpoints::CREATE_TRANSACTION);
        assert_endpoint_is_valid_uri(endpoints::REMOVE_TRANSACTION);
        assert_endpoint_is_valid_uri(endpoints::EDIT_TRANSACTION_VIEW);
        assert_endpoint_is_valid_uri(endpoints::UPDATE_TRANSACTION);
        assert_endpoint_is_valid_uri(endpoints::SUMMARY_VIEW);
        assert_endpoint_is_valid_uri(endpoints::LOG_IN_VIEW);
        assert_endpoint_is_valid_uri(endpoints::LOG_OUT);
        assert_endpoint_is_valid_uri(endpoints::STATIC);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint("/transaction/edit/{transaction_id}", 1);

        assert_eq!(formatted_path, "/transaction/edit/1");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/transaction/summary", 1);

        assert_eq!(formatted_path, "/transaction/summary");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }
}
