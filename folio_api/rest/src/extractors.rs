use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    Form, Json,
};
use folio_models::Environment;
use serde::de::DeserializeOwned;

use crate::errors::internal_server_error;

/// A request body sent either as JSON or as a url encoded HTML form.
///
/// Anything not declared as `application/x-www-form-urlencoded` is read as
/// JSON.
#[derive(Debug)]
pub struct JsonOrForm<T>(pub T);

#[derive(Debug)]
pub struct BodyRejection(pub anyhow::Error);

/// Never shows details. Handlers that know the environment extract
/// `Result<JsonOrForm<T>, BodyRejection>` instead.
impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        internal_server_error(self.0, Environment::Production)
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = BodyRejection;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&request) {
            let Form(value) = Form::<T>::from_request(request, state)
                .await
                .map_err(|err| BodyRejection(err.into()))?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(request, state)
                .await
                .map_err(|err| BodyRejection(err.into()))?;
            Ok(Self(value))
        }
    }
}

fn is_form(request: &Request) -> bool {
    request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| {
            mime.trim()
                .eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, PartialEq, Eq, Deserialize)]
    struct Greeting {
        name: Option<String>,
        text: Option<String>,
    }

    async fn extract(content_type: &str, body: &'static str) -> Result<Greeting, BodyRejection> {
        let request = Request::post("/")
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap();
        JsonOrForm::<Greeting>::from_request(request, &())
            .await
            .map(|JsonOrForm(greeting)| greeting)
    }

    #[tokio::test]
    async fn json() {
        let result = extract("application/json", r#"{"name": "Jo"}"#).await.unwrap();
        assert_eq!(
            result,
            Greeting {
                name: Some("Jo".into()),
                text: None,
            }
        );
    }

    #[tokio::test]
    async fn form() {
        let result = extract(
            "application/x-www-form-urlencoded; charset=UTF-8",
            "name=Jo+Doe&text=Hello%20there%21",
        )
        .await
        .unwrap();
        assert_eq!(
            result,
            Greeting {
                name: Some("Jo Doe".into()),
                text: Some("Hello there!".into()),
            }
        );
    }

    #[tokio::test]
    async fn rejected() {
        for (content_type, body) in [
            ("application/json", r#"{"name": 42}"#),
            ("text/plain", "name=Jo"),
            ("application/x-www-form-urlencoded", "name=Jo&name=Doe"),
        ] {
            let result = extract(content_type, body).await;
            assert!(result.is_err(), "{content_type}: {body}");
        }
    }
}
