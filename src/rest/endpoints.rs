//! CoinSpot REST API endpoint table.

use crate::error::CoinspotError;

/// Base URL for the CoinSpot API.
pub const COINSPOT_BASE_URL: &str = "https://www.coinspot.com.au";

/// Placeholder replaced by the coin symbol in coin-scoped paths.
const COIN_PLACEHOLDER: &str = "{coin}";

/// Public endpoints (no account data).
pub mod public {
    /// Latest buy/sell/last prices for all coins.
    pub const LATEST: &str = "/pubapi/latest";
}

/// Full-access endpoints. Rejected on a read-only client.
pub mod private {
    /// Open orders for a coin.
    pub const ORDERS: &str = "/api/orders";
    /// Completed orders for a coin.
    pub const ORDER_HISTORY: &str = "/api/orders/history";
    /// Deposit address for a coin.
    pub const COIN_DEPOSIT: &str = "/api/my/coin/deposit";
    /// Quick buy quote.
    pub const QUOTE_BUY: &str = "/api/quote/buy";
    /// Quick sell quote.
    pub const QUOTE_SELL: &str = "/api/quote/sell";
    /// The account's open buy and sell orders.
    pub const MY_ORDERS: &str = "/api/my/orders";
    /// Place a buy order.
    pub const BUY: &str = "/api/my/buy";
    /// Place a sell order.
    pub const SELL: &str = "/api/my/sell";
    /// Cancel a buy order.
    pub const BUY_CANCEL: &str = "/api/my/buy/cancel";
    /// Cancel a sell order.
    pub const SELL_CANCEL: &str = "/api/my/sell/cancel";
    /// All balances. Served under `/api/ro/` but needs a full-access client.
    pub const BALANCES: &str = "/api/ro/my/balances";
}

/// Read-only endpoints. Allowed on a read-only client.
pub mod readonly {
    /// Balance for one coin.
    pub const COIN_BALANCE: &str = "/api/ro/my/balances/{coin}";
    /// AUD deposit history.
    pub const DEPOSITS: &str = "/api/ro/my/deposits";
    /// AUD withdrawal history.
    pub const WITHDRAWALS: &str = "/api/ro/my/withdrawals";
    /// Buy and sell order history.
    pub const TRANSACTIONS: &str = "/api/ro/my/transactions";
    /// Buy and sell order history for one coin.
    pub const COIN_TRANSACTIONS: &str = "/api/ro/my/transactions/{coin}";
    /// Open orders.
    pub const OPEN_TRANSACTIONS: &str = "/api/ro/my/transactions/open";
    /// Open orders for one coin.
    pub const COIN_OPEN_TRANSACTIONS: &str = "/api/ro/my/transactions/{coin}/open";
    /// Coin send and receive history.
    pub const SEND_RECEIVE: &str = "/api/ro/my/sendreceive";
    /// Completed affiliate payments.
    pub const AFFILIATE_PAYMENTS: &str = "/api/ro/my/affiliatepayments";
    /// Completed referral payments.
    pub const REFERRAL_PAYMENTS: &str = "/api/ro/my/referralpayments";
}

/// What kind of API key an endpoint needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// Market data; no account involved.
    Public,
    /// Account data that a read-only key may see.
    ReadOnly,
    /// Requires a full-access key.
    Private,
}

impl Access {
    /// Whether a client configured as read-only may call an endpoint with this access level.
    pub fn allowed_when_read_only(self) -> bool {
        !matches!(self, Access::Private)
    }
}

/// Every CoinSpot endpoint this client knows how to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    LatestPrices,
    Orders,
    OrderHistory,
    CoinDeposit,
    QuoteBuy,
    QuoteSell,
    Balances,
    MyOrders,
    Buy,
    Sell,
    BuyCancel,
    SellCancel,
    CoinBalance,
    DepositHistory,
    WithdrawalHistory,
    TransactionHistory,
    CoinTransactionHistory,
    OpenTransactions,
    CoinOpenTransactions,
    SendReceive,
    AffiliatePayments,
    ReferralPayments,
}

impl Endpoint {
    /// All endpoints, in catalog order.
    pub const ALL: [Endpoint; 22] = [
        Endpoint::LatestPrices,
        Endpoint::Orders,
        Endpoint::OrderHistory,
        Endpoint::CoinDeposit,
        Endpoint::QuoteBuy,
        Endpoint::QuoteSell,
        Endpoint::Balances,
        Endpoint::MyOrders,
        Endpoint::Buy,
        Endpoint::Sell,
        Endpoint::BuyCancel,
        Endpoint::SellCancel,
        Endpoint::CoinBalance,
        Endpoint::DepositHistory,
        Endpoint::WithdrawalHistory,
        Endpoint::TransactionHistory,
        Endpoint::CoinTransactionHistory,
        Endpoint::OpenTransactions,
        Endpoint::CoinOpenTransactions,
        Endpoint::SendReceive,
        Endpoint::AffiliatePayments,
        Endpoint::ReferralPayments,
    ];

    /// The path, with a `{coin}` placeholder for coin-scoped endpoints.
    pub const fn path_template(self) -> &'static str {
        match self {
            Endpoint::LatestPrices => public::LATEST,
            Endpoint::Orders => private::ORDERS,
            Endpoint::OrderHistory => private::ORDER_HISTORY,
            Endpoint::CoinDeposit => private::COIN_DEPOSIT,
            Endpoint::QuoteBuy => private::QUOTE_BUY,
            Endpoint::QuoteSell => private::QUOTE_SELL,
            Endpoint::MyOrders => private::MY_ORDERS,
            Endpoint::Buy => private::BUY,
            Endpoint::Sell => private::SELL,
            Endpoint::BuyCancel => private::BUY_CANCEL,
            Endpoint::SellCancel => private::SELL_CANCEL,
            Endpoint::Balances => private::BALANCES,
            Endpoint::CoinBalance => readonly::COIN_BALANCE,
            Endpoint::DepositHistory => readonly::DEPOSITS,
            Endpoint::WithdrawalHistory => readonly::WITHDRAWALS,
            Endpoint::TransactionHistory => readonly::TRANSACTIONS,
            Endpoint::CoinTransactionHistory => readonly::COIN_TRANSACTIONS,
            Endpoint::OpenTransactions => readonly::OPEN_TRANSACTIONS,
            Endpoint::CoinOpenTransactions => readonly::COIN_OPEN_TRANSACTIONS,
            Endpoint::SendReceive => readonly::SEND_RECEIVE,
            Endpoint::AffiliatePayments => readonly::AFFILIATE_PAYMENTS,
            Endpoint::ReferralPayments => readonly::REFERRAL_PAYMENTS,
        }
    }

    /// The access level the endpoint needs.
    pub const fn access(self) -> Access {
        match self {
            Endpoint::LatestPrices => Access::Public,
            Endpoint::Orders
            | Endpoint::OrderHistory
            | Endpoint::CoinDeposit
            | Endpoint::QuoteBuy
            | Endpoint::QuoteSell
            | Endpoint::MyOrders
            | Endpoint::Buy
            | Endpoint::Sell
            | Endpoint::BuyCancel
            | Endpoint::SellCancel
            | Endpoint::Balances => Access::Private,
            Endpoint::CoinBalance
            | Endpoint::DepositHistory
            | Endpoint::WithdrawalHistory
            | Endpoint::TransactionHistory
            | Endpoint::CoinTransactionHistory
            | Endpoint::OpenTransactions
            | Endpoint::CoinOpenTransactions
            | Endpoint::SendReceive
            | Endpoint::AffiliatePayments
            | Endpoint::ReferralPayments => Access::ReadOnly,
        }
    }

    /// Whether the coin symbol is part of the path.
    pub fn is_coin_scoped(self) -> bool {
        self.path_template().contains(COIN_PLACEHOLDER)
    }

    /// Resolve the request path.
    ///
    /// Coin-scoped endpoints require `coin`, which must be a non-empty
    /// alphanumeric symbol. Other endpoints ignore it.
    pub fn path(self, coin: Option<&str>) -> Result<String, CoinspotError> {
        let template = self.path_template();
        if !self.is_coin_scoped() {
            return Ok(template.to_string());
        }

        let coin = coin.ok_or_else(|| {
            CoinspotError::InvalidParameters(format!("{self:?} requires a coin symbol"))
        })?;
        validate_coin(coin)?;
        Ok(template.replace(COIN_PLACEHOLDER, coin))
    }
}

/// Coin symbols are interpolated into paths, so only plain alphanumerics are accepted.
pub(crate) fn validate_coin(coin: &str) -> Result<(), CoinspotError> {
    if coin.is_empty() || !coin.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(CoinspotError::InvalidParameters(format!(
            "Invalid coin symbol: {coin:?}"
        )));
    }
    Ok(())
}
