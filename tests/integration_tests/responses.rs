use httperr::error::{error_json, error_text, NOT_FOUND};
use httperr::output::ResponseWriter;
use httperr::test::ResponseExt;
use httperr::Error;

use http::header::{self, HeaderValue};
use http::{Request, StatusCode};
use serde::Serialize;
use std::collections::HashMap;

#[test]
fn success_is_sent_verbatim() -> httperr::test::Result<()> {
    let wrapped = httperr::wrap(|w: &mut dyn ResponseWriter, _: &Request<()>| {
        w.headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        w.write(b"hello")?;
        Ok(())
    });

    let response = wrapped.call(&Request::new(()));

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.header(header::CONTENT_TYPE)?, "text/plain");
    assert_eq!(response.headers().len(), 1);
    assert_eq!(response.body_str()?, "hello");

    Ok(())
}

#[test]
fn explicit_status_and_multiple_writes() -> httperr::test::Result<()> {
    let wrapped = httperr::wrap(|w: &mut dyn ResponseWriter, _: &Request<()>| {
        w.headers_mut()
            .insert(header::LOCATION, HeaderValue::from_static("/items/1"));
        w.write_header(StatusCode::CREATED);
        w.write(b"{\"id\":")?;
        w.write(b"1}")?;
        Ok(())
    });

    let response = wrapped.call(&Request::new(()));

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.header(header::LOCATION)?, "/items/1");
    assert_eq!(response.body_str()?, "{\"id\":1}");

    Ok(())
}

#[test]
fn partial_output_is_discarded_on_error() -> httperr::test::Result<()> {
    let wrapped = httperr::wrap(|w: &mut dyn ResponseWriter, _: &Request<()>| {
        w.headers_mut()
            .insert(header::CACHE_CONTROL, HeaderValue::from_static("max-age=3600"));
        w.write(b"partial")?;
        Err(Error::from(&NOT_FOUND))
    });

    let response = wrapped.call(&Request::new(()));

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.body_str()?, "Not Found");
    assert!(response.headers().is_empty());

    Ok(())
}

#[test]
fn double_write_header_is_a_generic_500() -> httperr::test::Result<()> {
    let wrapped = httperr::wrap(|w: &mut dyn ResponseWriter, _: &Request<()>| {
        w.write_header(StatusCode::OK);
        w.write_header(StatusCode::NOT_FOUND);
        Ok(())
    });

    let response = wrapped.call(&Request::new(()));

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body_str()?, "Internal Server Error");
    assert!(response.headers().is_empty());

    Ok(())
}

#[test]
fn headers_after_body_is_a_generic_500() -> httperr::test::Result<()> {
    let wrapped = httperr::wrap(|w: &mut dyn ResponseWriter, _: &Request<()>| {
        w.write(b"body first")?;
        w.headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        Ok(())
    });

    let response = wrapped.call(&Request::new(()));

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body_str()?, "Internal Server Error");

    Ok(())
}

#[test]
fn write_error_does_not_hide_a_rendered_handler_error() -> httperr::test::Result<()> {
    let wrapped = httperr::wrap(|w: &mut dyn ResponseWriter, _: &Request<()>| {
        w.write_header(StatusCode::OK);
        w.write_header(StatusCode::OK);
        Err(error_text(StatusCode::CONFLICT, "version mismatch"))
    });

    let response = wrapped.call(&Request::new(()));

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(response.body_str()?, "version mismatch");

    Ok(())
}

#[test]
fn opaque_errors_do_not_leak() -> httperr::test::Result<()> {
    let wrapped = httperr::wrap(|_: &mut dyn ResponseWriter, _: &Request<()>| {
        Err(Error::opaque("password for db-primary rejected"))
    });

    let response = wrapped.call(&Request::new(()));

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body_str()?, "Internal Server Error");
    assert!(response.headers().is_empty());

    Ok(())
}

#[derive(Debug, Serialize)]
struct Validation {
    field: &'static str,
    reason: &'static str,
}

#[test]
fn json_error_payload() -> httperr::test::Result<()> {
    let wrapped = httperr::wrap(|_: &mut dyn ResponseWriter, _: &Request<()>| {
        Err(error_json(
            StatusCode::BAD_REQUEST,
            Validation {
                field: "email",
                reason: "missing",
            },
        ))
    });

    let response = wrapped.call(&Request::new(()));

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.header(header::CONTENT_TYPE)?, "application/json");
    assert_eq!(
        response.body_str()?,
        r#"{"field":"email","reason":"missing"}"#
    );

    Ok(())
}

#[test]
fn unencodable_json_payload_is_a_generic_500() -> httperr::test::Result<()> {
    let wrapped = httperr::wrap(|w: &mut dyn ResponseWriter, _: &Request<()>| {
        w.write(b"{\"partial\":")?;
        let mut value = HashMap::new();
        value.insert(vec![1u8, 2, 3], "byte keys");
        Err(error_json(StatusCode::BAD_REQUEST, value))
    });

    let response = wrapped.call(&Request::new(()));

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body_str()?, "Internal Server Error");
    assert!(response.headers().get(header::CONTENT_TYPE).is_none());

    Ok(())
}
