use crate::{GuardDecision, Route, RouteGuard, SessionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Session resolution has not finished; nothing may render yet.
    Pending,
    Render(Route),
    Redirected { requested: Route, to: Route },
}

impl NavigationOutcome {
    /// The route that ends up on screen, if any.
    pub fn route(&self) -> Option<Route> {
        match self {
            Self::Pending => None,
            Self::Render(route) => Some(*route),
            Self::Redirected { to, .. } => Some(*to),
        }
    }
}

/// History of visited routes with guard evaluation on every move.
///
/// A blocked route never enters history: the redirect target takes its
/// place, so going back cannot land on a page the guard refused.
#[derive(Debug, Clone)]
pub struct Navigator {
    history: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            history: vec![Route::Landing],
        }
    }

    pub fn current(&self) -> Route {
        self.history.last().copied().unwrap_or(Route::Landing)
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }

    pub fn navigate(&mut self, requested: Route, state: &SessionState) -> NavigationOutcome {
        if state.is_loading() {
            return NavigationOutcome::Pending;
        }

        let target = Self::settle(requested, state);
        self.history.push(target);

        if target == requested {
            NavigationOutcome::Render(target)
        } else {
            log::debug!("Navigation to {requested} redirected to {target}");
            NavigationOutcome::Redirected {
                requested,
                to: target,
            }
        }
    }

    /// Step back one entry, re-checking the guard of the route landed on.
    /// Returns `None` when there is nowhere to go back to.
    pub fn back(&mut self, state: &SessionState) -> Option<NavigationOutcome> {
        if self.history.len() < 2 || state.is_loading() {
            return None;
        }

        self.history.pop();
        let requested = self.current();
        let target = Self::settle(requested, state);

        if target == requested {
            Some(NavigationOutcome::Render(target))
        } else {
            if let Some(top) = self.history.last_mut() {
                *top = target;
            }
            Some(NavigationOutcome::Redirected {
                requested,
                to: target,
            })
        }
    }

    /// Follow redirects until a route allows rendering. Redirect targets are
    /// Login (public) or Dashboard (which only redirects to Login), so the
    /// chain is at most two hops; the loop is capped at one hop per route.
    fn settle(requested: Route, state: &SessionState) -> Route {
        let mut target = requested;
        for _ in 0..Route::ALL.len() {
            match target.access().check(state) {
                GuardDecision::Allow => break,
                GuardDecision::Redirect(next) => target = next,
            }
        }
        target
    }
}
