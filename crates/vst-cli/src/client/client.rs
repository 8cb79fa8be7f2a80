use crate::{CliClientResult, ClientError};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use error_location::ErrorLocation;
use futures::future::join_all;
use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use vst_auth::TokenStore;
use vst_core::{
    Competition, CompetitionParticipant, CoreError, NewCompetition, NewTutorial, NewsItem,
    Portfolio, Quote, TradeRequest, TradeSide, Tutorial, Watchlist,
};

/// HTTP client for the trading backend's REST API.
///
/// The bearer token is read from the token store on every request, so a
/// login or logout takes effect on the next call without rebuilding the
/// client.
pub struct Client {
    pub base_url: String,
    token_store: Arc<dyn TokenStore>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://localhost:8081")
    /// * `token_store` - Where the session token lives
    /// * `timeout` - Per-request timeout
    pub fn new(
        base_url: &str,
        token_store: Arc<dyn TokenStore>,
        timeout: Duration,
    ) -> CliClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token_store,
            client,
        })
    }

    /// Build a request, attaching the stored token as a bearer credential
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let req = self.client.request(method, &url);

        match self.token_store.load() {
            Ok(Some(token)) => req.bearer_auth(token),
            Ok(None) => req,
            Err(e) => {
                warn!("Could not read stored token, sending request unauthenticated: {e}");
                req
            }
        }
    }

    /// Execute request and handle errors
    ///
    /// Non-2xx answers become [`ClientError::Api`]. A 2xx body that is empty
    /// maps to `null`, and one that is not JSON is returned as a string.
    #[track_caller]
    fn execute(
        &self,
        req: reqwest::RequestBuilder,
    ) -> impl Future<Output = CliClientResult<Value>> + '_ {
        let location = ErrorLocation::from(Location::caller());
        self.execute_at(req, location)
    }

    async fn execute_at(
        &self,
        req: reqwest::RequestBuilder,
        location: ErrorLocation,
    ) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = error_message(&text, status);
            debug!("Request failed with {status}: {message}");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
                location,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text).unwrap_or_else(|_| Value::String(text)))
    }

    fn decode<T: DeserializeOwned>(value: Value) -> CliClientResult<T> {
        serde_json::from_value(value).map_err(ClientError::from_json)
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Exchange credentials for a token. The token is returned, not stored.
    pub async fn login(&self, email: &str, password: &str) -> CliClientResult<String> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let req = self
            .request(Method::POST, "/api/auth/login")
            .json(&LoginRequest { email, password });
        let body = self.execute(req).await?;

        body.get("token")
            .and_then(Value::as_str)
            .filter(|t| !t.trim().is_empty())
            .map(String::from)
            .ok_or_else(|| ClientError::unexpected("login response did not include a token"))
    }

    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct SignupRequest<'a> {
            username: &'a str,
            email: &'a str,
            password: &'a str,
        }

        let body = SignupRequest {
            username,
            email,
            password,
        };
        let req = self.request(Method::POST, "/api/auth/signup").json(&body);
        self.execute(req).await
    }

    /// Tell the backend the session is over. The backend keeps no session
    /// state, so this is informational only.
    pub async fn logout(&self) -> CliClientResult<Value> {
        let req = self.request(Method::POST, "/api/auth/logout");
        self.execute(req).await
    }

    /// Ask the backend whether the current bearer token is still accepted
    pub async fn validate_token(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/auth/validate");
        self.execute(req).await
    }

    /// Backend health check
    pub async fn status(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/auth/status");
        self.execute(req).await
    }

    // =========================================================================
    // Portfolio Operations
    // =========================================================================

    pub async fn portfolio(&self) -> CliClientResult<Portfolio> {
        let req = self.request(Method::GET, "/api/portfolio");
        Self::decode(self.execute(req).await?)
    }

    /// Place an order. Validation happens when the [`TradeRequest`] is built,
    /// so nothing invalid reaches the wire.
    pub async fn trade(&self, side: TradeSide, order: &TradeRequest) -> CliClientResult<Value> {
        debug!("Placing {} order: {} x{}", side.as_str(), order.symbol, order.quantity);
        let req = self.request(Method::POST, side.path()).json(order);
        self.execute(req).await
    }

    pub async fn buy(&self, symbol: &str, quantity: i64) -> CliClientResult<Value> {
        let order = TradeRequest::new(symbol, quantity)?;
        self.trade(TradeSide::Buy, &order).await
    }

    pub async fn sell(&self, symbol: &str, quantity: i64) -> CliClientResult<Value> {
        let order = TradeRequest::new(symbol, quantity)?;
        self.trade(TradeSide::Sell, &order).await
    }

    // =========================================================================
    // Market Operations
    // =========================================================================

    pub async fn quote(&self, symbol: &str) -> CliClientResult<Quote> {
        let symbol = Watchlist::normalize_symbol(symbol).ok_or_else(|| {
            ClientError::Core(CoreError::InvalidSymbol {
                value: symbol.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        })?;

        let req = self.request(Method::GET, &format!("/api/market/stocks/{symbol}"));
        let raw = self.execute(req).await?;

        Quote::from_provider_for(&symbol, &raw)
            .ok_or_else(|| ClientError::unexpected(format!("no quote data for {symbol}")))
    }

    /// One request per symbol, all in flight at once. Every outcome is kept,
    /// in input order, under the symbol that was asked for.
    pub async fn quote_batch(&self, symbols: &[String]) -> Vec<(String, CliClientResult<Quote>)> {
        let requests = symbols.iter().map(|symbol| async move {
            let outcome = self.quote(symbol).await;
            let key = Watchlist::normalize_symbol(symbol).unwrap_or_else(|| symbol.clone());
            (key, outcome)
        });
        join_all(requests).await
    }

    /// Quotes for every symbol that answered. Failed symbols are left out.
    pub async fn quotes(&self, symbols: &[String]) -> HashMap<String, Quote> {
        let mut quotes = HashMap::with_capacity(symbols.len());
        for (symbol, outcome) in self.quote_batch(symbols).await {
            match outcome {
                Ok(quote) => {
                    quotes.insert(symbol, quote);
                }
                Err(e) => warn!("Quote for {symbol} failed: {}", e.user_message()),
            }
        }
        quotes
    }

    pub async fn news(&self) -> CliClientResult<Vec<NewsItem>> {
        let req = self.request(Method::GET, "/api/market/news");
        let raw = self.execute(req).await?;
        Ok(NewsItem::from_feed(&raw))
    }

    // =========================================================================
    // Tutorial Operations
    // =========================================================================

    pub async fn tutorials(&self) -> CliClientResult<Vec<Tutorial>> {
        let req = self.request(Method::GET, "/api/tutorials");
        Self::decode(self.execute(req).await?)
    }

    pub async fn create_tutorial(&self, tutorial: &NewTutorial) -> CliClientResult<Tutorial> {
        let req = self.request(Method::POST, "/api/tutorials").json(tutorial);
        Self::decode(self.execute(req).await?)
    }

    pub async fn delete_tutorial(&self, id: i64) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/api/tutorials/{id}"));
        self.execute(req).await
    }

    // =========================================================================
    // Competition Operations
    // =========================================================================

    pub async fn competitions(&self) -> CliClientResult<Vec<Competition>> {
        let req = self.request(Method::GET, "/api/competitions");
        Self::decode(self.execute(req).await?)
    }

    pub async fn create_competition(
        &self,
        competition: &NewCompetition,
    ) -> CliClientResult<Competition> {
        let req = self.request(Method::POST, "/api/competitions").json(competition);
        Self::decode(self.execute(req).await?)
    }

    pub async fn join_competition(&self, id: i64) -> CliClientResult<CompetitionParticipant> {
        let req = self.request(Method::POST, &format!("/api/competitions/join/{id}"));
        Self::decode(self.execute(req).await?)
    }
}

/// Best human-readable reason for a failed request: the body's `message`,
/// then its `error` (plain string or `{message}`), then the status phrase.
pub(crate) fn error_message(body: &str, status: StatusCode) -> String {
    let non_blank = |s: &&str| !s.trim().is_empty();

    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value.get("message").and_then(Value::as_str).filter(non_blank) {
            return message.to_string();
        }

        let nested = match value.get("error") {
            Some(Value::String(message)) => Some(message.as_str()),
            Some(error) => error.get("message").and_then(Value::as_str),
            None => None,
        };
        if let Some(message) = nested.filter(non_blank) {
            return message.to_string();
        }
    }

    status
        .canonical_reason()
        .map(String::from)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}
