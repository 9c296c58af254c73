use fusion_image_proxy::http::parser::{parse_http_request, ParseError};
use fusion_image_proxy::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.version, "HTTP/1.1");
    assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_request_target_keeps_query_string() {
    let req = b"GET /?url=https%3A%2F%2Ffusioncalc.com%2Fx.png HTTP/1.1\r\nHost: localhost\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.path, "/?url=https%3A%2F%2Ffusioncalc.com%2Fx.png");
    assert_eq!(
        parsed.query_param("url").as_deref(),
        Some("https://fusioncalc.com/x.png")
    );
}

#[test]
fn test_parse_post_request_with_body() {
    let req = b"POST /api HTTP/1.1\r\nHost: localhost\r\nContent-Length: 5\r\n\r\nhello";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::POST);
    assert_eq!(parsed.body, b"hello".to_vec());
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_multiple_headers() {
    let req =
        b"GET /path HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test-client\r\nAccept: */*\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
    assert_eq!(parsed.headers.get("User-Agent").unwrap(), "test-client");
    assert_eq!(parsed.headers.get("Accept").unwrap(), "*/*");
}

#[test]
fn test_parse_incomplete_headers() {
    let req = b"GET / HTTP/1.1\r\nHost: exam";
    let err = parse_http_request(req).unwrap_err();
    assert!(matches!(err, ParseError::Incomplete));
}

#[test]
fn test_parse_incomplete_body() {
    let req = b"POST /api HTTP/1.1\r\nContent-Length: 10\r\n\r\nhel";
    let err = parse_http_request(req).unwrap_err();
    assert!(matches!(err, ParseError::Incomplete));
}

#[test]
fn test_parse_unknown_method() {
    let req = b"BREW / HTTP/1.1\r\nHost: x\r\n\r\n";
    let err = parse_http_request(req).unwrap_err();
    assert!(matches!(err, ParseError::InvalidMethod));
}

#[test]
fn test_parse_invalid_content_length() {
    let req = b"POST / HTTP/1.1\r\nContent-Length: abc\r\n\r\n";
    let err = parse_http_request(req).unwrap_err();
    assert!(matches!(err, ParseError::InvalidContentLength));
}

#[test]
fn test_parse_pipelined_requests_consume_only_first() {
    let req = b"GET /a HTTP/1.1\r\n\r\nGET /b HTTP/1.1\r\n\r\n";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.path, "/a");
    assert_eq!(consumed, req.len() / 2);
}
