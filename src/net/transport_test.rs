use super::*;

#[test]
fn request_builder_collects_parts() {
    let req = ApiRequest::get("/posts/search").query("q", "abc").bearer("tok");
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.path, "/posts/search");
    assert_eq!(req.query, vec![("q".to_owned(), "abc".to_owned())]);
    assert_eq!(req.bearer.as_deref(), Some("tok"));
    assert_eq!(req.body, Body::Empty);
}

#[test]
fn later_body_replaces_earlier_body() {
    let req = ApiRequest::post("/x")
        .json(serde_json::json!({ "a": 1 }))
        .form(vec![("username".to_owned(), "a@b.com".to_owned())]);
    assert_eq!(req.body, Body::Form(vec![("username".to_owned(), "a@b.com".to_owned())]));
}

#[test]
fn raw_response_ok_covers_2xx_only() {
    let resp = |status| RawResponse { status, body: String::new() };
    assert!(resp(200).ok());
    assert!(resp(204).ok());
    assert!(!resp(199).ok());
    assert!(!resp(301).ok());
    assert!(!resp(404).ok());
}

#[test]
fn method_names_are_uppercase_http_verbs() {
    assert_eq!(Method::Delete.as_str(), "DELETE");
    assert_eq!(Method::Put.as_str(), "PUT");
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_transport_is_unavailable_natively() {
    let result = futures::executor::block_on(BrowserTransport.send("http://x", ApiRequest::get("/auth/me")));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn encode_segment_matches_encode_uri_component() {
    assert_eq!(encode_segment("spam"), "spam");
    assert_eq!(encode_segment("bad word"), "bad%20word");
    assert_eq!(encode_segment("a/b?c"), "a%2Fb%3Fc");
    assert_eq!(encode_segment("it's-ok_(1)!"), "it's-ok_(1)!");
    assert_eq!(encode_segment("é"), "%C3%A9");
}
