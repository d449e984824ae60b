mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::{Router, routing::get};
use tower_http::catch_panic::CatchPanicLayer;

use common::{api_request, send, test_state};
use jwtgate::middleware::Authenticate;
use jwtgate::pipeline::{ApiHandler, ApiRequest, Chain, Middleware, adapt};
use jwtgate::router::panic_response;
use jwtgate_auth::Identity;
use jwtgate_core::{ApiResult, AppError, ErrorKind, Role, Success};
use jwtgate_models::UserRequest;

/// Gate that records its name and passes the request on.
#[derive(Clone)]
struct Record {
    name: &'static str,
    log: Arc<Mutex<Vec<&'static str>>>,
}

impl<In: Send + 'static> Middleware<In> for Record {
    type Out = In;

    async fn process(&self, req: ApiRequest<In>) -> Result<ApiRequest<In>, AppError> {
        self.log.lock().unwrap().push(self.name);
        Ok(req)
    }
}

/// Gate that always stops the chain.
#[derive(Clone)]
struct Reject;

impl<In: Send + 'static> Middleware<In> for Reject {
    type Out = In;

    async fn process(&self, _req: ApiRequest<In>) -> Result<ApiRequest<In>, AppError> {
        Err(AppError::unauthorized("rejected"))
    }
}

fn counting_handler(calls: Arc<AtomicUsize>) -> impl ApiHandler<()> {
    move |_req: ApiRequest| {
        let calls = calls.clone();
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Success::empty(StatusCode::ACCEPTED)
        }
    }
}

#[tokio::test]
async fn test_gates_run_in_declaration_order() {
    let (state, _) = test_state();
    let log = Arc::new(Mutex::new(Vec::new()));
    let gate = |name| Record {
        name,
        log: log.clone(),
    };

    let route = Chain::new()
        .then(gate("first"))
        .then(gate("second"))
        .then(gate("third"))
        .handle(counting_handler(Arc::new(AtomicUsize::new(0))));

    ApiHandler::call(&route, api_request(&state, None, "", &[]))
        .await
        .unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_short_circuit_skips_later_gates_and_handler() {
    let (state, _) = test_state();
    let log = Arc::new(Mutex::new(Vec::new()));
    let calls = Arc::new(AtomicUsize::new(0));

    let route = Chain::new()
        .then(Record {
            name: "before",
            log: log.clone(),
        })
        .then(Reject)
        .then(Record {
            name: "after",
            log: log.clone(),
        })
        .handle(counting_handler(calls.clone()));

    let err = ApiHandler::call(&route, api_request(&state, None, "", &[]))
        .await
        .unwrap_err();

    assert_eq!(err.detail(), "rejected");
    assert_eq!(*log.lock().unwrap(), vec!["before"]);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_handler_envelope_passes_through_unchanged() {
    let (state, _) = test_state();
    let log = Arc::new(Mutex::new(Vec::new()));

    let failing = Chain::new()
        .then(Record {
            name: "gate",
            log: log.clone(),
        })
        .handle(|_req: ApiRequest| async { Err::<Success, _>(AppError::conflict("taken")) });
    let err = ApiHandler::call(&failing, api_request(&state, None, "", &[]))
        .await
        .unwrap_err();
    assert_eq!(err, AppError::conflict("taken"));

    let succeeding = Chain::new()
        .then(Record { name: "gate", log })
        .handle(|_req: ApiRequest| async { Success::created(&serde_json::json!({"id": 7})) });
    let success = ApiHandler::call(&succeeding, api_request(&state, None, "", &[]))
        .await
        .unwrap();
    assert_eq!(success, Success::created(&serde_json::json!({"id": 7})).unwrap());
}

#[tokio::test]
async fn test_wrap_is_equivalent_to_single_gate_chain() {
    let (state, _) = test_state();
    let calls = Arc::new(AtomicUsize::new(0));

    let route = Middleware::<()>::wrap(Reject, counting_handler(calls.clone()));
    assert!(
        ApiHandler::call(&route, api_request(&state, None, "", &[]))
            .await
            .is_err()
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_authenticate_attaches_identity() {
    let (state, _) = test_state();
    let token = state.jwt.issue(3, "Ada", Role::User).unwrap();
    let seen = Arc::new(Mutex::new(None));

    let sink = seen.clone();
    let route = Chain::new()
        .then(Authenticate)
        .handle(move |req: ApiRequest<Identity>| {
            let sink = sink.clone();
            async move {
                *sink.lock().unwrap() = Some(req.context().clone());
                Success::no_content()
            }
        });

    let req = api_request(&state, Some(&format!("Bearer {}", token)), "", &[]);
    ApiHandler::call(&route, req).await.unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        Some(Identity {
            user_id: 3,
            username: "Ada".to_string(),
            role: Role::User,
        })
    );
}

#[tokio::test]
async fn test_authenticate_failure_details() {
    let (state, _) = test_state();
    let cases = [
        (None, "Missing token"),
        (Some("Token abc"), "Invalid token format"),
        (Some("Bearer"), "Invalid token format"),
        (Some("Bearer not-a-jwt"), "Invalid token"),
    ];

    for (header, detail) in cases {
        let err = Authenticate
            .process(api_request(&state, header, "", &[]))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert_eq!(err.detail(), detail, "header {:?}", header);
    }
}

#[test]
fn test_path_id_parsing() {
    let (state, _) = test_state();

    let req = api_request(&state, None, "", &[("id", "12")]);
    assert_eq!(req.path_id().unwrap(), 12);

    for raw in ["abc", "1.5", ""] {
        let err = api_request(&state, None, "", &[("id", raw)])
            .path_id()
            .unwrap_err();
        assert_eq!(err.code(), "E400");
        assert_eq!(err.message(), "Not a valid id");
        assert_eq!(err.detail(), "Path parameter 'id' must be an integer");
    }
}

#[test]
fn test_json_body_errors() {
    let (state, _) = test_state();

    let err = api_request(&state, None, "{not json", &[])
        .json::<serde_json::Value>()
        .unwrap_err();
    assert_eq!(err.detail(), "Not a valid JSON");
    assert_eq!(err.message(), "Invalid request body");

    let err = api_request(&state, None, r#"{"name":""}"#, &[])
        .valid_json::<UserRequest>()
        .unwrap_err();
    assert_eq!(err.detail(), "name and email are required");

    let ok: UserRequest = api_request(&state, None, r#"{"name":"A","email":"a@x.com"}"#, &[])
        .valid_json()
        .unwrap();
    assert_eq!(ok.name, "A");
}

async fn boom(_req: ApiRequest) -> ApiResult {
    panic!("handler exploded")
}

async fn empty(_req: ApiRequest) -> ApiResult {
    Success::no_content()
}

#[tokio::test]
async fn test_adapter_sets_json_content_type_on_empty_body() {
    let (state, _) = test_state();
    let router = Router::new()
        .route("/empty", get(adapt(empty)))
        .with_state(state);

    let response = send(&router, "GET", "/empty", None, None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(response.content_type.as_deref(), Some("application/json"));
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_panic_becomes_internal_error() {
    let (state, _) = test_state();
    let router = Router::new()
        .route("/boom", get(adapt(boom)))
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response));

    let response = send(&router, "GET", "/boom", None, None).await;
    let detail = response.assert_error(StatusCode::INTERNAL_SERVER_ERROR, "E500");
    assert!(!detail.contains("exploded"));
    assert_eq!(response.content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn test_adapter_passes_path_params() {
    let (state, _) = test_state();
    let router = Router::new()
        .route(
            "/items/{id}",
            get(adapt(|req: ApiRequest| async move {
                let id = req.path_id()?;
                Success::ok(&serde_json::json!({ "id": id }))
            })),
        )
        .with_state(state);

    let response = send(&router, "GET", "/items/41", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["id"], 41);

    let response = send(&router, "GET", "/items/x", None, None).await;
    response.assert_error(StatusCode::BAD_REQUEST, "E400");
}
