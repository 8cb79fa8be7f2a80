use crate::{
    CliError, CliResult, Client, ClientError, Commands, MarketPoller, QuoteBoard,
    admin_commands::AdminCommands, competition_commands::CompetitionCommands,
    market_commands::MarketCommands, portfolio_commands::PortfolioCommands,
    tutorial_commands::TutorialCommands,
};

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use error_location::ErrorLocation;
use log::{info, warn};
use serde::Serialize;
use serde_json::{Value, json};
use vst_auth::{
    AuthContext, GuardDecision, NavigationOutcome, Navigator, Route, RouteGuard, TokenStore,
};
use vst_config::Config;
use vst_core::{NewCompetition, NewTutorial, TradeRequest, TradeSide, Watchlist};

/// One CLI invocation: session, backend client and navigation history.
///
/// Every command is a page visit. The navigator runs the page's guard
/// against the resolved session before the command touches the backend.
pub struct App {
    config: Config,
    auth: AuthContext,
    client: Arc<Client>,
    navigator: Navigator,
}

impl App {
    pub fn new(config: Config, token_store: Arc<dyn TokenStore>) -> CliResult<Self> {
        Self::with_auth(config, AuthContext::new(token_store))
    }

    /// Build around an existing session context. The client shares the
    /// context's token store.
    pub fn with_auth(config: Config, auth: AuthContext) -> CliResult<Self> {
        let client = Client::new(
            &config.api.base_url,
            auth.token_store(),
            Duration::from_secs(config.api.timeout_secs),
        )?;

        Ok(Self {
            config,
            auth,
            client: Arc::new(client),
            navigator: Navigator::new(),
        })
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    pub fn client(&self) -> &Arc<Client> {
        &self.client
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Guard, then run the command.
    ///
    /// A 401 from the backend while signed in means the token was revoked
    /// or expired server-side: the local session is dropped and the user is
    /// sent to the login page.
    pub async fn dispatch(&mut self, command: Commands) -> CliResult<Value> {
        match self.navigator.navigate(command.route(), &self.auth.state()) {
            NavigationOutcome::Pending => {
                return Err(CliError::SessionLoading {
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            NavigationOutcome::Redirected { requested, to } => {
                info!("{requested} requires a different session, redirecting to {to}");
                return Err(CliError::Redirected { requested, to });
            }
            NavigationOutcome::Render(_) => {}
        }

        match self.run(command).await {
            Err(CliError::Client(e))
                if e.is_unauthorized() && self.auth.state().is_authenticated() =>
            {
                warn!("Backend rejected the session token, signing out");
                self.auth.logout();
                let login = self
                    .navigator
                    .navigate(Route::Login, &self.auth.state())
                    .route()
                    .unwrap_or(Route::Login);
                Err(CliError::SessionEnded {
                    login,
                    message: e.user_message(),
                })
            }
            other => other,
        }
    }

    async fn run(&mut self, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Login { email, password } => self.login(&email, &password).await,
            Commands::Signup {
                username,
                email,
                password,
            } => Ok(self.client.signup(&username, &email, &password).await?),
            Commands::Logout => self.logout().await,
            Commands::Status => Ok(self.client.status().await?),
            Commands::Dashboard => self.dashboard(),
            Commands::Portfolio { action } => self.portfolio(action).await,
            Commands::Market { action } => self.market(action).await,
            Commands::Tutorials { action } => match action {
                TutorialCommands::List => to_json(&self.client.tutorials().await?),
            },
            Commands::Competitions { action } => match action {
                CompetitionCommands::List => to_json(&self.client.competitions().await?),
                CompetitionCommands::Join { id } => {
                    to_json(&self.client.join_competition(id).await?)
                }
            },
            Commands::Admin { action } => self.admin(action).await,
        }
    }

    async fn login(&mut self, email: &str, password: &str) -> CliResult<Value> {
        let token = self.client.login(email, password).await?;
        let user = self.auth.login(&token)?;
        let next = self
            .navigator
            .navigate(Route::Dashboard, &self.auth.state())
            .route()
            .unwrap_or(Route::Dashboard);

        Ok(json!({
            "message": format!("Signed in as {}", user.email),
            "user": user,
            "next": next.path(),
        }))
    }

    async fn logout(&mut self) -> CliResult<Value> {
        if self.auth.state().is_authenticated()
            && let Err(e) = self.client.logout().await
        {
            warn!(
                "Backend logout failed, clearing local session anyway: {}",
                e.user_message()
            );
        }
        self.auth.logout();
        self.navigator.navigate(Route::Login, &self.auth.state());

        Ok(json!({ "message": "Signed out", "next": Route::Login.path() }))
    }

    fn dashboard(&self) -> CliResult<Value> {
        let state = self.auth.state();
        let Some(user) = state.user() else {
            return Err(CliError::Redirected {
                requested: Route::Dashboard,
                to: Route::Login,
            });
        };

        // Pages the session may open; the admin page only shows for admins.
        let pages: Vec<&str> = Route::ALL
            .into_iter()
            .filter(|r| *r != Route::Landing && r.access().check(&state) == GuardDecision::Allow)
            .map(|r| r.path())
            .collect();

        Ok(json!({
            "message": format!("Welcome, {}", user.email),
            "email": user.email,
            "roles": user.roles,
            "admin": user.is_admin(),
            "pages": pages,
        }))
    }

    async fn portfolio(&self, action: PortfolioCommands) -> CliResult<Value> {
        let (side, symbol, quantity) = match action {
            PortfolioCommands::Show => {
                let portfolio = self.client.portfolio().await?;
                return Ok(json!({
                    "holdings": portfolio.holdings,
                    "totalCostBasis": portfolio.total_cost_basis(),
                }));
            }
            PortfolioCommands::Buy { symbol, quantity } => (TradeSide::Buy, symbol, quantity),
            PortfolioCommands::Sell { symbol, quantity } => (TradeSide::Sell, symbol, quantity),
        };

        let order = TradeRequest::new(&symbol, quantity)?;
        let result = self.client.trade(side, &order).await?;

        // Order accepted; the reload is best-effort.
        let holdings = match self.client.portfolio().await {
            Ok(portfolio) => json!(portfolio.holdings),
            Err(e) => {
                warn!("Order placed but portfolio reload failed: {}", e.user_message());
                Value::Null
            }
        };

        let verb = match side {
            TradeSide::Buy => "Buy",
            TradeSide::Sell => "Sell",
        };
        Ok(json!({
            "message": format!("{verb} order placed"),
            "order": order,
            "result": result,
            "holdings": holdings,
        }))
    }

    async fn market(&self, action: MarketCommands) -> CliResult<Value> {
        match action {
            MarketCommands::Quote { symbols } => {
                let watchlist = self.watchlist(&symbols);
                let board = QuoteBoard::new(Arc::clone(&self.client));
                let outcome = board.refresh(watchlist.symbols()).await;

                Ok(json!({
                    "quotes": board.snapshot().await,
                    "failed": outcome.failed,
                    "quickAdd": watchlist.suggestions(),
                }))
            }
            MarketCommands::Watch {
                symbols,
                interval,
                count,
            } => {
                let watchlist = self.watchlist(&symbols);
                let secs = interval
                    .unwrap_or(self.config.market.poll_interval_secs)
                    .max(1);

                let mut poller = MarketPoller::new(
                    QuoteBoard::new(Arc::clone(&self.client)),
                    Duration::from_secs(secs),
                );
                if let Some(count) = count {
                    poller = poller.with_max_polls(count);
                }

                let handle = poller.handle();
                tokio::spawn(async move {
                    if tokio::signal::ctrl_c().await.is_ok() {
                        handle.stop();
                    }
                });

                let polls = poller
                    .run(watchlist.symbols().to_vec(), |update| {
                        match serde_json::to_string(&update) {
                            Ok(line) => println!("{line}"),
                            Err(e) => warn!("Could not serialize quote update: {e}"),
                        }
                    })
                    .await;

                Ok(json!({ "polls": polls }))
            }
            MarketCommands::News => to_json(&self.client.news().await?),
        }
    }

    async fn admin(&self, action: AdminCommands) -> CliResult<Value> {
        match action {
            AdminCommands::CreateTutorial { title, content } => {
                let tutorial = NewTutorial::new(&title, &content)?;
                to_json(&self.client.create_tutorial(&tutorial).await?)
            }
            AdminCommands::DeleteTutorial { id } => {
                self.client.delete_tutorial(id).await?;
                Ok(json!({ "message": "Tutorial deleted", "id": id }))
            }
            AdminCommands::CreateCompetition {
                name,
                description,
                start_date,
                end_date,
                starting_balance,
            } => {
                let competition = NewCompetition::from_dates(
                    &name,
                    description.as_deref(),
                    &start_date,
                    &end_date,
                    starting_balance,
                )?;
                to_json(&self.client.create_competition(&competition).await?)
            }
        }
    }

    /// Symbols from the command line, or the configured list when none.
    fn watchlist(&self, symbols: &[String]) -> Watchlist {
        let requested: &[String] = if symbols.is_empty() {
            &self.config.market.symbols
        } else {
            symbols
        };

        let watchlist = Watchlist::with_symbols(requested);
        if watchlist.len() < requested.len() {
            warn!(
                "Watching {} of {} symbols (duplicates, blanks and anything past the limit are skipped)",
                watchlist.len(),
                requested.len()
            );
        }
        watchlist
    }
}

fn to_json<T: Serialize>(value: &T) -> CliResult<Value> {
    serde_json::to_value(value).map_err(|e| CliError::Client(ClientError::from_json(e)))
}
