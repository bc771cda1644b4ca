//! Browser Transport
//!
//! [`Transport`] over `window.fetch`.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use super::{ApiRequest, ApiResponse, Transport};

#[derive(Debug, Clone)]
pub struct FetchTransport {
    config: ApiConfig,
}

impl FetchTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

fn js_err(e: JsValue) -> ApiError {
    ApiError::Transport(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let url = self.config.url(&request.path);

        let opts = RequestInit::new();
        opts.set_method(request.method.as_str());
        opts.set_mode(RequestMode::Cors);
        if let Some(body) = &request.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let req = Request::new_with_str_and_init(&url, &opts).map_err(js_err)?;
        if request.body.is_some() {
            req.headers().set("Content-Type", "application/json").map_err(js_err)?;
        }

        let window = web_sys::window().ok_or_else(|| ApiError::Transport("window not available".into()))?;
        let value = JsFuture::from(window.fetch_with_request(&req)).await.map_err(js_err)?;
        let response: Response = value.dyn_into().map_err(js_err)?;

        let text = JsFuture::from(response.text().map_err(js_err)?).await.map_err(js_err)?;
        Ok(ApiResponse::new(response.status(), text.as_string().unwrap_or_default()))
    }
}
