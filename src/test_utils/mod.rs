#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use form::{assert_form_input, assert_hx_endpoint, must_get_form};
pub(crate) use html::{
    assert_valid_html, parse_html_document, parse_html_fragment, parse_html_table_rows,
};
pub(crate) use http::{assert_content_type, assert_status_ok};
