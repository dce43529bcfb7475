// src/routes.rs

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{delete, get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{auth, notes, question_sets, quiz, sources, study_tests},
    state::AppState,
    utils::jwt::auth_middleware,
};

/// Development front-end origins allowed by CORS.
const ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:5173",
    "http://127.0.0.1:5173",
];

/// Largest accepted PDF upload.
const PDF_UPLOAD_LIMIT: usize = 20 * 1024 * 1024;

/// Assembles the main application router.
///
/// * Merges all sub-routers (auth, notes and sources, questions, tests, quiz).
/// * Protects user data routes with the JWT middleware.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = ALLOWED_ORIGINS
        .into_iter()
        .map(HeaderValue::from_static)
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/verify-token", post(auth::verify_token));

    let note_routes = Router::new()
        .route("/", get(notes::list_notes).post(notes::create_note))
        .route("/summarize", post(notes::summarize))
        .route("/transcribe", post(sources::transcribe))
        .route(
            "/process-pdf",
            post(sources::process_pdf).layer(DefaultBodyLimit::max(PDF_UPLOAD_LIMIT)),
        )
        .route("/{id}", put(notes::update_note).delete(notes::delete_note));

    let question_routes = Router::new()
        .route(
            "/",
            get(question_sets::list_question_sets).post(question_sets::create_question_set),
        )
        .route("/{id}", delete(question_sets::delete_question_set));

    let test_routes = Router::new()
        .route("/", get(study_tests::list_tests).post(study_tests::create_test))
        .route(
            "/{id}",
            get(study_tests::get_test).delete(study_tests::delete_test),
        )
        .route("/{id}/parsed", get(study_tests::get_parsed_test))
        .route("/{id}/grade", post(study_tests::grade_test));

    // Everything that touches a user's own data. `route_layer` keeps unmatched
    // paths out of the auth check so they still answer 404.
    let protected_routes = Router::new()
        .nest("/api/notes", note_routes)
        .nest("/api/questions", question_routes)
        .nest("/api/tests", test_routes)
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    let quiz_routes = Router::new()
        .route("/parse", post(quiz::parse))
        .route("/grade", post(quiz::grade));

    Router::new()
        .nest("/api/auth", auth_routes)
        .nest("/api/quiz", quiz_routes)
        .merge(protected_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
