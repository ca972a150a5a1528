use skyfall_core::{decode_catalog, AssetError, StarRecord};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn fetch_error(url: &str, e: wasm_bindgen::JsValue) -> AssetError {
    AssetError::Fetch {
        url: url.to_string(),
        reason: format!("{:?}", e),
    }
}

/// GET `url` and return the body bytes.
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>, AssetError> {
    let window = web::window().ok_or_else(|| AssetError::Fetch {
        url: url.to_string(),
        reason: "no window".to_string(),
    })?;
    let opts = web::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web::RequestMode::SameOrigin);
    let request =
        web::Request::new_with_str_and_init(url, &opts).map_err(|e| fetch_error(url, e))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| fetch_error(url, e))?;
    let resp: web::Response = resp_value.dyn_into().map_err(|e| fetch_error(url, e))?;
    if !resp.ok() {
        return Err(AssetError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(|e| fetch_error(url, e))?)
        .await
        .map_err(|e| fetch_error(url, e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Fetch and decode the optional star catalogue.
pub async fn load_star_catalog(url: &str) -> Result<Vec<StarRecord>, AssetError> {
    let bytes = fetch_bytes(url).await?;
    decode_catalog(&bytes)
}
