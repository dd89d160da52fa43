//! End-to-end tests driving the router against a temporary SQLite file.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use contact_book::{app, connect_options, ensure_schema, AppState, ContactService, Pages};
use tempfile::TempDir;
use tower::ServiceExt;

struct Harness {
    _dir: TempDir,
    router: Router,
    contacts: ContactService,
}

async fn harness() -> Harness {
    let dir = tempfile::tempdir().unwrap();
    let options = connect_options(dir.path().join("contacts.db"));
    ensure_schema(&options).await.unwrap();
    let contacts = ContactService::new(options);
    let state = AppState::new(contacts.clone(), Pages::new().unwrap());
    Harness {
        _dir: dir,
        router: app(state, 64 * 1024),
        contacts,
    }
}

fn encode(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", k, percent(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn percent(v: &str) -> String {
    v.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' => (b as char).to_string(),
            _ => format!("%{:02X}", b),
        })
        .collect()
}

fn post(uri: &str, fields: &[(&str, &str)], cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::post(uri).header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(c) = cookie {
        builder = builder.header(header::COOKIE, c);
    }
    builder.body(Body::from(encode(fields))).unwrap()
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::get(uri);
    if let Some(c) = cookie {
        builder = builder.header(header::COOKIE, c);
    }
    builder.body(Body::empty()).unwrap()
}

async fn send(router: &Router, req: Request<Body>) -> Response {
    router.clone().oneshot(req).await.unwrap()
}

async fn body_text(res: Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// `name=value` part of the Set-Cookie header.
fn session_cookie(res: &Response) -> String {
    let raw = res.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    raw.split(';').next().unwrap().to_string()
}

const ANA: &[(&str, &str)] = &[
    ("name", "Ana María"),
    ("email", "ana@example.com"),
    ("phone", "+34 600 123 456"),
    ("tag", "family"),
    ("notes", ""),
];

#[tokio::test]
async fn create_persists_and_redirects_with_single_use_notice() {
    let h = harness().await;
    let res = send(&h.router, post("/create", ANA, None)).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/");
    let cookie = session_cookie(&res);

    let stored = h.contacts.list().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Ana María");
    assert_eq!(stored[0].phone, "+34 600 123 456");
    assert_eq!(stored[0].tag, "family");

    let first = body_text(send(&h.router, get("/", Some(&cookie))).await).await;
    assert!(first.contains("Contact created."));
    assert!(first.contains("Ana María"));
    let second = body_text(send(&h.router, get("/", Some(&cookie))).await).await;
    assert!(!second.contains("Contact created."));
}

#[tokio::test]
async fn create_with_html_notes_is_rejected_inline() {
    let h = harness().await;
    let mut fields = ANA.to_vec();
    fields.retain(|(k, _)| *k != "notes");
    fields.push(("notes", "<script>"));
    let res = send(&h.router, post("/create", &fields, None)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_text(res).await;
    assert!(body.contains("Notes must not contain HTML characters"));
    // submitted values are kept, escaped
    assert!(body.contains("Ana María"));
    assert!(body.contains("&lt;script&gt;"));
    assert!(h.contacts.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_without_tag_is_accepted() {
    let h = harness().await;
    let fields: Vec<_> = ANA.iter().copied().filter(|(k, _)| *k != "tag").collect();
    let res = send(&h.router, post("/create", &fields, None)).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(h.contacts.list().await.unwrap()[0].tag, "");
}

#[tokio::test]
async fn create_missing_required_field_is_bad_request() {
    let h = harness().await;
    let fields: Vec<_> = ANA.iter().copied().filter(|(k, _)| *k != "phone").collect();
    let res = send(&h.router, post("/create", &fields, None)).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(h.contacts.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn blank_create_form_renders() {
    let h = harness().await;
    let res = send(&h.router, get("/create", None)).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains(r#"action="/create""#));
}

#[tokio::test]
async fn edit_prefills_and_updates() {
    let h = harness().await;
    send(&h.router, post("/create", ANA, None)).await;
    let id = h.contacts.list().await.unwrap()[0].id;

    let res = send(&h.router, get(&format!("/edit/{}", id), None)).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains("ana@example.com"));

    let edited = [
        ("name", "Ana Belén"),
        ("email", "ana.belen@example.com"),
        ("phone", "12 345 6789"),
        ("tag", "work"),
        ("notes", "  moved  "),
    ];
    let res = send(&h.router, post(&format!("/edit/{}", id), &edited, None)).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    let c = h.contacts.find(id).await.unwrap().unwrap();
    assert_eq!(c.id, id);
    assert_eq!(c.name, "Ana Belén");
    assert_eq!(c.tag, "work");
    assert_eq!(c.notes, "moved");
}

#[tokio::test]
async fn rejected_edit_shows_submitted_values_not_stored() {
    let h = harness().await;
    send(&h.router, post("/create", ANA, None)).await;
    let id = h.contacts.list().await.unwrap()[0].id;

    let edited = [
        ("name", "Beatriz"),
        ("email", "ana@example.com"),
        ("phone", "123456"),
        ("tag", "work"),
        ("notes", ""),
    ];
    let res = send(&h.router, post(&format!("/edit/{}", id), &edited, None)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_text(res).await;
    assert!(body.contains("(has 6)"));
    assert!(body.contains("Beatriz"));
    assert_eq!(h.contacts.find(id).await.unwrap().unwrap().name, "Ana María");
}

#[tokio::test]
async fn edit_unknown_id_is_not_found_without_mutation() {
    let h = harness().await;
    let res = send(&h.router, get("/edit/9999", None)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let res = send(&h.router, post("/edit/9999", ANA, None)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(h.contacts.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn non_integer_id_is_not_found() {
    let h = harness().await;
    send(&h.router, post("/create", ANA, None)).await;
    for req in [
        get("/edit/abc", None),
        get("/edit/1.5", None),
        post("/edit/abc", ANA, None),
        post("/delete/abc", &[], None),
    ] {
        let res = send(&h.router, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
    assert_eq!(h.contacts.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_removes_and_missing_id_is_idempotent() {
    let h = harness().await;
    send(&h.router, post("/create", ANA, None)).await;
    let id = h.contacts.list().await.unwrap()[0].id;

    let res = send(&h.router, post(&format!("/delete/{}", id), &[], None)).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert!(h.contacts.list().await.unwrap().is_empty());

    for _ in 0..2 {
        let res = send(&h.router, post("/delete/9999", &[], None)).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/");
    }
}

#[tokio::test]
async fn delete_rejects_get() {
    let h = harness().await;
    let res = send(&h.router, get("/delete/1", None)).await;
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn storage_failure_is_generic_500() {
    let dir = tempfile::tempdir().unwrap();
    let options = connect_options(dir.path().join("no_such_dir").join("contacts.db"));
    let state = AppState::new(ContactService::new(options), Pages::new().unwrap());
    let router = app(state, 64 * 1024);
    let res = send(&router, get("/", None)).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_text(res).await;
    assert!(body.contains("An internal error occurred"));
    assert!(!body.contains("unable to open"));

    for req in [
        post("/create", ANA, None),
        get("/edit/1", None),
        post("/edit/1", ANA, None),
        post("/delete/1", &[], None),
    ] {
        let res = send(&router, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_text(res).await;
        assert!(body.contains("An internal error occurred"));
        assert!(!body.contains("unable to open"));
    }

    let res = send(&router, get("/ready", None)).await;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn greeting_and_openapi_document() {
    let h = harness().await;
    let res = send(&h.router, get("/api/greeting", None)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_text(res).await).unwrap();
    assert_eq!(json["message"], "Hello from the contact book API");

    let res = send(&h.router, get("/api/openapi.json", None)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let doc: serde_json::Value = serde_json::from_str(&body_text(res).await).unwrap();
    assert!(doc["paths"]["/api/greeting"]["get"].is_object());
}

#[tokio::test]
async fn health_and_ready() {
    let h = harness().await;
    assert_eq!(send(&h.router, get("/health", None)).await.status(), StatusCode::OK);
    assert_eq!(send(&h.router, get("/ready", None)).await.status(), StatusCode::OK);
}
