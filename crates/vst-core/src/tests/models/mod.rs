mod competition;
mod news_item;
mod portfolio;
mod quote;
mod trade_request;
mod tutorial;
mod watchlist;
