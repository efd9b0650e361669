//! Response status handling shared by every request.

use reqwest::StatusCode;
use reqwest::header::RETRY_AFTER;

use crate::error::FetchError;

/// Longest error body kept in [`FetchError::Api`].
const MAX_ERROR_BODY: usize = 300;

/// Consume a response and return its body, or map a failing status to an
/// error.
///
/// A 429 becomes [`FetchError::RateLimited`]; it is reported, never retried.
/// Any other non-success status becomes [`FetchError::Api`] carrying the
/// start of the response body on a single line.
pub async fn read_body(resp: reqwest::Response) -> Result<Vec<u8>, FetchError> {
    let url = resp.url().to_string();
    let status = resp.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(FetchError::RateLimited {
            url,
            retry_after_secs: retry_after(&resp),
        });
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(FetchError::Api {
            status: status.as_u16(),
            url,
            message: one_line(&body),
        });
    }

    Ok(resp.bytes().await?.to_vec())
}

/// `Retry-After` in seconds; HTTP-date values are not interpreted.
fn retry_after(resp: &reqwest::Response) -> Option<u64> {
    resp.headers()
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

fn one_line(body: &str) -> String {
    let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= MAX_ERROR_BODY {
        return flat;
    }
    let mut cut: String = flat.chars().take(MAX_ERROR_BODY).collect();
    cut.push('…');
    cut
}
