pub mod u101_currency_selection;
