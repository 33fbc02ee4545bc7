/*
 * Responsibility
 * - request body を JSON / urlencoded form のどちらでも DTO として受け取る
 * - parse 失敗 (content-type 不一致, 必須 field 欠落など) を AppError::InvalidInput へ変換
 *   → 失敗時も他のエラーと同じ envelope で 400 を返す
 */
use axum::{
    Form, Json,
    extract::{
        FromRequest, Request,
        rejection::{FormRejection, JsonRejection},
    },
    http::header::CONTENT_TYPE,
};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default)]
pub struct ApiBody<T>(pub T);

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

impl<S, T> FromRequest<S> for ApiBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    Form<T>: FromRequest<S, Rejection = FormRejection>,
    S: Send + Sync,
    T: Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::invalid_input(e.body_text()))?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::invalid_input(e.body_text()))?;
            Ok(Self(value))
        }
    }
}
