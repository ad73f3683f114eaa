//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Authenticates requests using Bearer tokens from the Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// Runs before any body parsing, validation or storage access of the
/// wrapped handler.
///
/// # Errors
///
/// Returns `401 {"message": "Unauthenticated."}` with `WWW-Authenticate: Bearer`
/// when the header is missing or malformed, or the token is unknown or revoked.
/// The response never says which of these happened.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/countries", get(list_countries_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::Unauthorized)?;

    let req = Request::from_parts(parts, body);

    st.auth_service.authenticate(&token).await?;

    Ok(next.run(req).await)
}
