use axum::{
    extract::State,
    middleware,
    routing::{get, post},
    Json, Router,
};
use contracts::shared::document::{PrintRequest, PrintTarget};

use crate::handlers::print::{print_document, PrintState};
use crate::system::auth::BearerToken;
use crate::system::middleware::request_logger;

/// All routes of the print proxy
pub fn configure_routes(state: PrintState) -> Router {
    let mut router = Router::new().route("/health", get(|| async { "ok" }));

    for target in PrintTarget::all() {
        router = router.route(
            target.route(),
            post(
                move |state: State<PrintState>, token: BearerToken, body: Json<PrintRequest>| {
                    print_document(target, state, token, body)
                },
            ),
        );
    }

    router
        .layer(middleware::from_fn(request_logger))
        .with_state(state)
}
