#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use form::{assert_form_input, must_get_form};
pub(crate) use html::assert_valid_html;
pub(crate) use http::{spawn_api_server, web_test_server};
