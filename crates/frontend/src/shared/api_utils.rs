//! API utilities for state-changing calls to the dashboard server.
//!
//! Provides the anti-forgery token lookup and the header set every action
//! request carries.

use crate::shared::dom::web::WebDocument;

/// Marks the request as an in-page call so the server answers with JSON.
pub const REQUESTED_WITH: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

/// Source of the raw `document.cookie` string.
pub trait CookieSource {
    fn cookie_string(&self) -> String;
}

/// Reads cookies from the live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentCookies;

impl CookieSource for DocumentCookies {
    fn cookie_string(&self) -> String {
        WebDocument::current()
            .map(|doc| doc.cookie())
            .unwrap_or_default()
    }
}

impl CookieSource for String {
    fn cookie_string(&self) -> String {
        self.clone()
    }
}

/// Find a cookie by name and URL-decode its value.
///
/// # Arguments
/// * `cookies` - Raw cookie string, e.g. `"theme=dark; csrftoken=abc%3D"`
/// * `name` - Cookie name to look for
///
/// # Returns
/// - Decoded value of the last cookie with that name
/// - `None` when no such cookie exists
///
/// # Example
/// ```ignore
/// let token = cookie_value("a=1; csrftoken=x%20y", "csrftoken");
/// assert_eq!(token.as_deref(), Some("x y"));
/// ```
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    let prefix = format!("{}=", name);
    cookies
        .split(';')
        .map(str::trim)
        .filter_map(|cookie| cookie.strip_prefix(prefix.as_str()))
        .last()
        .map(|raw| {
            urlencoding::decode(raw)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| raw.to_string())
        })
}

/// Build the header list for an action request.
///
/// The anti-forgery header is omitted when the cookie is missing.
pub fn action_headers(
    cookies: &dyn CookieSource,
    cookie_name: &str,
    header_name: &str,
) -> Vec<(String, String)> {
    let mut headers = vec![(REQUESTED_WITH.0.to_string(), REQUESTED_WITH.1.to_string())];
    match cookie_value(&cookies.cookie_string(), cookie_name) {
        Some(token) => headers.push((header_name.to_string(), token)),
        None => log::warn!("cookie {} not found, sending action without token", cookie_name),
    }
    headers
}
