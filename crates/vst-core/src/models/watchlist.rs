use crate::{DEFAULT_WATCHLIST, MAX_WATCHLIST_SYMBOLS, QUICK_ADD_SYMBOLS};

/// Ordered set of tracked ticker symbols, capped at [`MAX_WATCHLIST_SYMBOLS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Watchlist {
    symbols: Vec<String>,
}

impl Default for Watchlist {
    fn default() -> Self {
        Self::with_symbols(DEFAULT_WATCHLIST)
    }
}

impl Watchlist {
    pub fn empty() -> Self {
        Self {
            symbols: Vec::new(),
        }
    }

    /// Build from arbitrary input, applying the same rules as [`Watchlist::add`].
    pub fn with_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::empty();
        for symbol in symbols {
            list.add(symbol.as_ref());
        }
        list
    }

    /// Trim and uppercase; blank input is not a symbol.
    pub fn normalize_symbol(raw: &str) -> Option<String> {
        let symbol = raw.trim().to_uppercase();
        if symbol.is_empty() || symbol.chars().any(char::is_whitespace) {
            None
        } else {
            Some(symbol)
        }
    }

    /// Returns `true` if the symbol was added. Blanks, duplicates and
    /// additions beyond the cap are ignored.
    pub fn add(&mut self, raw: &str) -> bool {
        let Some(symbol) = Self::normalize_symbol(raw) else {
            return false;
        };
        if self.symbols.contains(&symbol) || self.symbols.len() >= MAX_WATCHLIST_SYMBOLS {
            return false;
        }
        self.symbols.push(symbol);
        true
    }

    pub fn remove(&mut self, raw: &str) -> bool {
        let Some(symbol) = Self::normalize_symbol(raw) else {
            return false;
        };
        let before = self.symbols.len();
        self.symbols.retain(|s| *s != symbol);
        self.symbols.len() != before
    }

    pub fn contains(&self, raw: &str) -> bool {
        Self::normalize_symbol(raw).is_some_and(|s| self.symbols.contains(&s))
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.symbols.len() >= MAX_WATCHLIST_SYMBOLS
    }

    /// Quick-add symbols not yet tracked. Empty once the list is full.
    pub fn suggestions(&self) -> Vec<&'static str> {
        if self.is_full() {
            return Vec::new();
        }
        QUICK_ADD_SYMBOLS
            .into_iter()
            .filter(|s| !self.contains(s))
            .collect()
    }
}
