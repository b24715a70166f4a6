use futures::future::{AbortRegistration, Abortable};
use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::{
    error::UltraError,
    types::{
        AggregatorSource, BalanceResponse, ExecuteRequest, ExecutionOutcome, Quote, Router,
        RouterResponse, ShieldResponse, SwapQuoteParams,
    },
};

const DEFAULT_ULTRA_API_URL: &str = "https://ultra-api.jup.ag";

/// Static client configuration, immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct UltraConfig {
    pub base_url: String,
}

impl Default for UltraConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ULTRA_API_URL.to_string(),
        }
    }
}

/// Client for the Ultra aggregation API. Holds no session state besides the
/// configuration and the once-fetched router directory; concurrent calls to
/// different operations share nothing mutable.
///
/// Every operation is a single attempt: no retries, no internal timeout, no
/// deduplication of overlapping requests. Callers that need bounded latency
/// or stale-result discarding drive those through the abort registration.
pub struct UltraClient {
    client: reqwest::Client,
    config: UltraConfig,
    routers: OnceCell<RouterResponse>,
}

impl Default for UltraClient {
    fn default() -> Self {
        Self::new(UltraConfig::default())
    }
}

impl UltraClient {
    pub fn new(config: UltraConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            routers: OnceCell::new(),
        }
    }

    /// Requests a swap quote. Only defined optional params appear in the
    /// query string. Aborting via `abort` fails with `Cancelled` before any
    /// outcome is delivered.
    pub async fn get_quote(
        &self,
        params: &SwapQuoteParams,
        abort: Option<AbortRegistration>,
    ) -> Result<Quote, UltraError> {
        let url = format!("{}/order", self.config.base_url);
        debug!("ultra order: {url}");
        let request = self.client.get(&url).query(params);
        Self::execute_request(request, abort).await
    }

    /// Submits a signed transaction for execution. `request_id` must be the
    /// identifier from the quote that produced the transaction; it is echoed
    /// verbatim, not validated here.
    ///
    /// A 2xx response always yields an [`ExecutionOutcome`], including the
    /// `Failed` variant for business-level failures. Transport failures
    /// surface as `Upstream` and never produce an outcome.
    pub async fn submit(
        &self,
        signed_transaction: &str,
        request_id: &str,
    ) -> Result<ExecutionOutcome, UltraError> {
        let url = format!("{}/execute", self.config.base_url);
        debug!("ultra execute: {url}");
        let body = ExecuteRequest {
            signed_transaction: signed_transaction.to_string(),
            request_id: request_id.to_string(),
        };
        let request = self.client.post(&url).json(&body);
        Self::execute_request(request, None).await
    }

    /// Fetches the router directory. The directory changes only when new
    /// aggregation sources are deployed; prefer [`Self::routers`] which
    /// caches it for the client's lifetime.
    pub async fn get_routers(&self) -> Result<RouterResponse, UltraError> {
        let url = format!("{}/order/routers", self.config.base_url);
        debug!("ultra routers: {url}");
        Self::execute_request(self.client.get(&url), None).await
    }

    /// Router directory, fetched once and cached.
    pub async fn routers(&self) -> Result<&[Router], UltraError> {
        let routers = self
            .routers
            .get_or_try_init(|| self.get_routers())
            .await?;
        Ok(routers)
    }

    /// Resolves an aggregation source to its display metadata.
    pub async fn router(&self, id: AggregatorSource) -> Result<Option<Router>, UltraError> {
        Ok(self.routers().await?.iter().find(|r| r.id == id).cloned())
    }

    /// Fetches per-token balances for an account. A failed fetch is an
    /// error, never an empty balance set.
    pub async fn get_balances(
        &self,
        address: &str,
        abort: Option<AbortRegistration>,
    ) -> Result<BalanceResponse, UltraError> {
        let url = format!("{}/balances/{address}", self.config.base_url);
        debug!("ultra balances: {url}");
        Self::execute_request(self.client.get(&url), abort).await
    }

    /// Fetches risk warnings for a set of mints.
    pub async fn get_shield(
        &self,
        mints: &[&str],
        abort: Option<AbortRegistration>,
    ) -> Result<ShieldResponse, UltraError> {
        let url = format!("{}/shield", self.config.base_url);
        debug!("ultra shield: {url}");
        let request = self.client.get(&url).query(&[("mints", mints.join(","))]);
        Self::execute_request(request, abort).await
    }

    /// Shared send/parse path. Non-2xx is `Upstream` with the raw body kept
    /// for diagnostics; a 2xx body that fails to parse is `MalformedResponse`.
    /// The whole send+read+parse future sits inside the abort boundary so a
    /// cancelled call leaves no partial state behind.
    async fn execute_request<T: DeserializeOwned>(
        request: reqwest::RequestBuilder,
        abort: Option<AbortRegistration>,
    ) -> Result<T, UltraError> {
        let fut = async move {
            let response = request.send().await?;
            let status = response.status();
            let body = response.text().await?;
            if !status.is_success() {
                return Err(UltraError::Upstream {
                    status: status.as_u16(),
                    body,
                });
            }
            serde_json::from_str(&body).map_err(|e| UltraError::MalformedResponse(e.to_string()))
        };
        match abort {
            Some(registration) => match Abortable::new(fut, registration).await {
                Ok(result) => result,
                Err(_aborted) => Err(UltraError::Cancelled),
            },
            None => fut.await,
        }
    }
}
