//! Request building.
//!
//! [`FireflyClient::prepare`] turns a route and its [`CallParams`] into a
//! [`PreparedRequest`] without touching the network, so every usage fault
//! surfaces before anything is sent.

use bytes::Bytes;
use firefly_define::response::JSON;
use firefly_define::{ApiRequest, RestMethod, Route};
use firefly_definitions::RouteId;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use url::{Url, form_urlencoded};
use uuid::Uuid;

use super::FireflyClient;
use crate::call::{CallParams, QueryValue, RequestBody};
use crate::error::{ApiError, UsageError};
use crate::path::PathTemplate;
use crate::query;

/// Correlation header attached when trace ids are enabled.
pub const TRACE_ID: &str = "x-trace-id";

/// A fully built request, ready for [`FireflyClient::dispatch`].
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub route: RouteId,
    pub method: RestMethod,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
    /// Whether structured responses are checked against their declared shape.
    pub validate: bool,
}

impl FireflyClient {
    /// Builds the request for `route` without sending it.
    ///
    /// ## Errors
    ///
    /// Returns [`UsageError`] when a path placeholder or required query
    /// parameter has no value, a header is invalid, or the body does not
    /// fit the route's declared request.
    ///
    /// ## Examples
    ///
    /// ```
    /// use firefly_client::{CallParams, FireflyClient};
    /// use firefly_definitions::RouteId;
    ///
    /// let client = FireflyClient::new("https://firefly.example.com/api", "token").unwrap();
    /// let request = client
    ///     .prepare(RouteId::ListAccount, CallParams::new().query("type", "asset"))
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     request.url.as_str(),
    ///     "https://firefly.example.com/api/v1/accounts?type=asset"
    /// );
    /// assert_eq!(request.headers["accept"], "application/vnd.api+json");
    /// ```
    pub fn prepare(&self, route: RouteId, params: CallParams) -> Result<PreparedRequest, ApiError> {
        let definition = route.route();

        let path = PathTemplate::new(&definition.path)
            .render(&params.path)
            .map_err(|missing| UsageError::missing_path(route, missing.name))?;

        if let Some(name) = definition
            .required_query()
            .find(|name| params.query_value(name).is_none_or(QueryValue::is_empty))
        {
            return Err(UsageError::missing_query(route, name).into());
        }

        let mut url = self.base_url.clone();
        url.set_path(&format!(
            "{}{}",
            self.base_url.path().trim_end_matches('/'),
            path
        ));
        url.set_query(query::encode(&params.query, self.array_encoding).as_deref());

        let mut headers = self.merge_headers(definition, &params.headers)?;

        let body = match (&definition.request, params.body) {
            (_, None) => None,
            (None, Some(_)) => {
                return Err(UsageError::UnexpectedBody {
                    route: route.to_string(),
                }
                .into());
            }
            (Some(declared), Some(body)) => {
                let bytes = encode_body(route, declared, body)?;
                headers.insert(CONTENT_TYPE, header_value(CONTENT_TYPE, declared.content_type())?);
                Some(bytes)
            }
        };

        if self.trace_ids && definition.trace_header && !headers.contains_key(TRACE_ID) {
            let trace_id = Uuid::new_v4().to_string();
            headers.insert(TRACE_ID, header_value(TRACE_ID, &trace_id)?);
        }

        Ok(PreparedRequest {
            route,
            method: definition.method,
            url,
            headers,
            body,
            validate: params.validate.unwrap_or(definition.validate_response),
        })
    }

    /// `Accept` from the route, then client defaults and the credential, then
    /// per-call headers, which win on any collision.
    fn merge_headers(
        &self,
        route: &Route,
        extra: &[(String, String)],
    ) -> Result<HeaderMap, UsageError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            header_value(ACCEPT, route.success_media_type().unwrap_or(JSON))?,
        );
        headers.extend(self.default_headers.clone());
        headers.insert(AUTHORIZATION, self.authorization.clone());

        for (name, value) in extra {
            let header = HeaderName::try_from(name.as_str()).map_err(|e| {
                UsageError::InvalidHeader {
                    name: name.clone(),
                    message: e.to_string(),
                }
            })?;
            let mut value = HeaderValue::try_from(value.as_str()).map_err(|e| {
                UsageError::InvalidHeader {
                    name: name.clone(),
                    message: e.to_string(),
                }
            })?;
            if header == AUTHORIZATION {
                value.set_sensitive(true);
            }
            headers.insert(header, value);
        }

        Ok(headers)
    }
}

fn header_value(name: impl AsRef<str>, value: &str) -> Result<HeaderValue, UsageError> {
    HeaderValue::try_from(value).map_err(|e| UsageError::InvalidHeader {
        name: name.as_ref().to_string(),
        message: e.to_string(),
    })
}

fn encode_body(
    route: RouteId,
    declared: &ApiRequest,
    body: RequestBody,
) -> Result<Bytes, UsageError> {
    match (declared, body) {
        (ApiRequest::Json(_), RequestBody::Json(value)) => Ok(serde_json::to_vec(&value)?.into()),
        (ApiRequest::UrlEncoded { fields }, RequestBody::Form(pairs)) => {
            if let Some(field) = fields
                .iter()
                .filter(|field| field.required)
                .find(|field| !pairs.iter().any(|(name, _)| *name == field.name))
            {
                return Err(UsageError::MissingFormField {
                    route: route.to_string(),
                    name: field.name.clone(),
                });
            }
            Ok(form_urlencoded::Serializer::new(String::new())
                .extend_pairs(&pairs)
                .finish()
                .into())
        }
        (ApiRequest::Text { .. }, RequestBody::Text(text)) => Ok(text.into()),
        (ApiRequest::Binary { .. }, RequestBody::Bytes(bytes)) => Ok(bytes),
        (declared, body) => Err(UsageError::BodyMismatch {
            route: route.to_string(),
            expected: declared.content_type().to_string(),
            found: body.kind(),
        }),
    }
}
