use std::fmt;
use std::str::FromStr;

/// Who may see a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Authenticated,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Login,
    Signup,
    Dashboard,
    Portfolio,
    Market,
    Tutorials,
    Competitions,
    Admin,
}

impl Route {
    pub const ALL: [Route; 9] = [
        Self::Landing,
        Self::Login,
        Self::Signup,
        Self::Dashboard,
        Self::Portfolio,
        Self::Market,
        Self::Tutorials,
        Self::Competitions,
        Self::Admin,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Dashboard => "/dashboard",
            Self::Portfolio => "/portfolio",
            Self::Market => "/market",
            Self::Tutorials => "/tutorials",
            Self::Competitions => "/competitions",
            Self::Admin => "/admin",
        }
    }

    pub fn access(&self) -> RouteAccess {
        match self {
            Self::Landing | Self::Login | Self::Signup => RouteAccess::Public,
            Self::Admin => RouteAccess::Admin,
            Self::Dashboard
            | Self::Portfolio
            | Self::Market
            | Self::Tutorials
            | Self::Competitions => RouteAccess::Authenticated,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim();
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        Self::ALL
            .into_iter()
            .find(|r| r.path() == path)
            .ok_or_else(|| format!("unknown route '{s}'"))
    }
}
