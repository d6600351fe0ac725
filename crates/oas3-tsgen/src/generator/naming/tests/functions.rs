use crate::generator::{
  ast::HttpMethod,
  naming::functions::{function_name, path_placeholders, url_expression},
};

#[test]
fn test_function_names_from_method_and_path() {
  let cases = [
    (HttpMethod::Get, "/api/users/{id}", "getUsersById"),
    (HttpMethod::Post, "/api/orders", "postOrders"),
    (HttpMethod::Put, "/items/{itemId}/status", "putItemsByItemIdStatus"),
    (HttpMethod::Delete, "/users//{id}/", "deleteUsersById"),
    (HttpMethod::Get, "/", "get"),
  ];
  for (method, path, expected) in cases {
    assert_eq!(function_name(method, path), expected, "{method} {path}");
  }
}

#[test]
fn test_only_leading_api_segment_is_dropped() {
  assert_eq!(function_name(HttpMethod::Get, "/v1/api/keys"), "getV1ApiKeys");
  assert_eq!(function_name(HttpMethod::Get, "/api/api"), "getApi");
}

#[test]
fn test_invalid_characters_split_segments_into_words() {
  assert_eq!(
    function_name(HttpMethod::Get, "/user-profiles/{user_id}"),
    "getUserProfilesByUserId"
  );
  assert_eq!(function_name(HttpMethod::Post, "/files:batch"), "postFilesBatch");
}

#[test]
fn test_mixed_segments_are_tokenized() {
  assert_eq!(function_name(HttpMethod::Get, "/reports/{id}.json"), "getReportsByIdJson");
  assert_eq!(
    function_name(HttpMethod::Get, "/range/{from}-{to}"),
    "getRangeByFromByTo"
  );
}

#[test]
fn test_placeholders_in_order_without_duplicates() {
  let names: Vec<_> = path_placeholders("/a/{x}/b/{y}/{x}").into_iter().collect();
  assert_eq!(names, ["x", "y"]);
  assert!(path_placeholders("/plain").is_empty());
}

#[test]
fn test_url_expressions() {
  assert_eq!(url_expression("/api/orders"), "'/api/orders'");
  assert_eq!(url_expression("/api/users/{id}"), "`/api/users/${id}`");
  assert_eq!(url_expression("/items/{item-id}/status"), "`/items/${itemId}/status`");
  assert_eq!(url_expression("/by/{class}"), "`/by/${_class}`");
}
